use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use sqlx::sqlite::SqlitePool;

use super::{parse_param, require_params, Fields, TeamNameQuery};
use crate::db;
use crate::error::ApiError;
use crate::models::{Game, GameField, NewGame, PlayerGameStatistics, StatusResponse, UpdateField};

// Query parameters for games on a given day
#[derive(Deserialize)]
pub struct DateQuery {
    #[serde(default)]
    date: Option<String>,
}

// Query parameters for one game's box scores
#[derive(Deserialize)]
pub struct GameIdQuery {
    #[serde(default)]
    game_id: Option<String>,
}

// GET /api/team/games?team_name=Lakers - Home and away games of a team
pub async fn get_team_games(
    State(pool): State<SqlitePool>,
    Query(params): Query<TeamNameQuery>,
) -> Result<Json<Vec<Game>>, ApiError> {
    let [team_name] = require_params([("team_name", params.team_name)])?;

    let games = db::games::get_games_by_team(&pool, &team_name).await?;

    Ok(Json(games))
}

// GET /api/games?date=2024-10-22 - Games played on a date
pub async fn get_games_by_date(
    State(pool): State<SqlitePool>,
    Query(params): Query<DateQuery>,
) -> Result<Json<Vec<Game>>, ApiError> {
    let [date] = require_params([("date", params.date)])?;

    let games = db::games::get_games_by_date(&pool, parse_param("date", &date)?).await?;

    Ok(Json(games))
}

// GET /api/game/stats?game_id=1 - Box scores of one game
pub async fn get_game_stats(
    State(pool): State<SqlitePool>,
    Query(params): Query<GameIdQuery>,
) -> Result<Json<Vec<PlayerGameStatistics>>, ApiError> {
    let [game_id] = require_params([("game_id", params.game_id)])?;

    let stats = db::statistics::get_statistics_by_game(&pool, parse_param("game_id", &game_id)?).await?;

    Ok(Json(stats))
}

// POST /api/game - Record a game
pub async fn add_game(
    State(pool): State<SqlitePool>,
    body: Bytes,
) -> Result<(StatusCode, Json<StatusResponse>), ApiError> {
    let fields = Fields::from_body(&body);
    fields.require(&["date", "location", "home_team_id", "away_team_id", "home_score", "away_score"])?;

    let game = NewGame {
        date: fields.date("date")?,
        location: fields.text("location")?,
        home_team_id: fields.integer("home_team_id")?,
        away_team_id: fields.integer("away_team_id")?,
        home_score: fields.integer("home_score")?,
        away_score: fields.integer("away_score")?,
    };
    db::games::add_game(&pool, &game).await?;

    Ok((StatusCode::CREATED, Json(StatusResponse::ok())))
}

// PUT /api/game - Change one column of a game
pub async fn update_game(
    State(pool): State<SqlitePool>,
    body: Bytes,
) -> Result<Json<StatusResponse>, ApiError> {
    let fields = Fields::from_body(&body);
    fields.require(&["game_id", "column", "new_value"])?;

    let game_id = fields.integer("game_id")?;
    let field = GameField::parse(&fields.text("column")?, fields.value("new_value")?)?;
    db::games::update_game(&pool, game_id, &field).await?;

    Ok(Json(StatusResponse::ok()))
}
