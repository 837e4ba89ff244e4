use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use sqlx::sqlite::SqlitePool;

use super::{parse_param, require_params, Fields, NameQuery};
use crate::db;
use crate::error::ApiError;
use crate::models::{
    LeaderboardStat, NewPlayer, NewPlayerStatistics, Player, PlayerField, PlayerGameStatistics, RankedPlayer,
    SeasonAverages, StatusResponse, UpdateField,
};

// Query parameters for a player's game log
#[derive(Deserialize)]
pub struct PlayerIdQuery {
    #[serde(default)]
    player_id: Option<String>,
}

async fn leaderboard(pool: &SqlitePool, stat: LeaderboardStat) -> Result<Json<Vec<RankedPlayer>>, ApiError> {
    let entries = db::reports::top_players(pool, stat).await?;

    Ok(Json(
        entries
            .into_iter()
            .map(|entry| RankedPlayer { stat, entry })
            .collect(),
    ))
}

// GET /api/players/top/points - Top 10 by points per game
pub async fn top_points(State(pool): State<SqlitePool>) -> Result<Json<Vec<RankedPlayer>>, ApiError> {
    leaderboard(&pool, LeaderboardStat::Points).await
}

// GET /api/players/top/assists - Top 10 by assists per game
pub async fn top_assists(State(pool): State<SqlitePool>) -> Result<Json<Vec<RankedPlayer>>, ApiError> {
    leaderboard(&pool, LeaderboardStat::Assists).await
}

// GET /api/players/top/rebounds - Top 10 by rebounds per game
pub async fn top_rebounds(State(pool): State<SqlitePool>) -> Result<Json<Vec<RankedPlayer>>, ApiError> {
    leaderboard(&pool, LeaderboardStat::Rebounds).await
}

// GET /api/players/top/blocks - Top 10 by blocks per game
pub async fn top_blocks(State(pool): State<SqlitePool>) -> Result<Json<Vec<RankedPlayer>>, ApiError> {
    leaderboard(&pool, LeaderboardStat::Blocks).await
}

// GET /api/players/top/steals - Top 10 by steals per game
pub async fn top_steals(State(pool): State<SqlitePool>) -> Result<Json<Vec<RankedPlayer>>, ApiError> {
    leaderboard(&pool, LeaderboardStat::Steals).await
}

// GET /api/player/search?name=LeBron James - Players with exactly this name
pub async fn search_player(
    State(pool): State<SqlitePool>,
    Query(params): Query<NameQuery>,
) -> Result<Json<Vec<Player>>, ApiError> {
    let [name] = require_params([("name", params.name)])?;

    let players = db::reports::search_player_by_name(&pool, &name).await?;

    Ok(Json(players))
}

// GET /api/player/averages?name=LeBron James - Per-game averages
pub async fn player_averages(
    State(pool): State<SqlitePool>,
    Query(params): Query<NameQuery>,
) -> Result<Json<SeasonAverages>, ApiError> {
    let [name] = require_params([("name", params.name)])?;

    let averages = db::reports::average_statistics_by_player(&pool, &name).await?;

    Ok(Json(averages))
}

// GET /api/player/stats?player_id=1 - Every logged game for a player
pub async fn player_stats(
    State(pool): State<SqlitePool>,
    Query(params): Query<PlayerIdQuery>,
) -> Result<Json<Vec<PlayerGameStatistics>>, ApiError> {
    let [player_id] = require_params([("player_id", params.player_id)])?;

    let stats = db::statistics::get_statistics_by_player(&pool, parse_param("player_id", &player_id)?).await?;

    Ok(Json(stats))
}

// POST /api/player - Create a player
pub async fn add_player(
    State(pool): State<SqlitePool>,
    body: Bytes,
) -> Result<(StatusCode, Json<StatusResponse>), ApiError> {
    let fields = Fields::from_body(&body);
    fields.require(&["name", "height", "weight", "age", "position", "team_id"])?;

    let player = NewPlayer {
        name: fields.text("name")?,
        height: fields.integer("height")?,
        weight: fields.integer("weight")?,
        age: fields.integer("age")?,
        position: fields.text("position")?,
        team_id: fields.integer("team_id")?,
    };
    db::players::add_player(&pool, &player).await?;

    Ok((StatusCode::CREATED, Json(StatusResponse::ok())))
}

// PUT /api/player - Change one column of a player
pub async fn update_player(
    State(pool): State<SqlitePool>,
    body: Bytes,
) -> Result<Json<StatusResponse>, ApiError> {
    let fields = Fields::from_body(&body);
    fields.require(&["player_id", "column", "new_value"])?;

    let player_id = fields.integer("player_id")?;
    let field = PlayerField::parse(&fields.text("column")?, fields.value("new_value")?)?;
    db::players::update_player(&pool, player_id, &field).await?;

    Ok(Json(StatusResponse::ok()))
}

// DELETE /api/player?name=... - Delete players by name
pub async fn delete_player(
    State(pool): State<SqlitePool>,
    Query(params): Query<NameQuery>,
) -> Result<Json<StatusResponse>, ApiError> {
    let [name] = require_params([("name", params.name)])?;

    let deleted = db::players::delete_player(&pool, &name).await?;
    tracing::debug!("Deleted {} player row(s)", deleted);

    Ok(Json(StatusResponse::ok()))
}

// POST /api/player/log-game - Record a player's box score for one game
pub async fn log_game(
    State(pool): State<SqlitePool>,
    body: Bytes,
) -> Result<(StatusCode, Json<StatusResponse>), ApiError> {
    let fields = Fields::from_body(&body);
    fields.require(&["game_id", "player_id", "points", "rebounds", "assists"])?;

    let stats = NewPlayerStatistics {
        game_id: fields.integer("game_id")?,
        player_id: fields.integer("player_id")?,
        points: fields.integer("points")?,
        rebounds: fields.integer("rebounds")?,
        assists: fields.integer("assists")?,
        blocks: fields.integer_or_zero("blocks")?,
        steals: fields.integer_or_zero("steals")?,
        turnovers: fields.integer_or_zero("turnovers")?,
        minutes_played: fields.integer_or_zero("minutes_played")?,
        fouls: fields.integer_or_zero("fouls")?,
    };
    db::statistics::add_player_statistics(&pool, &stats).await?;

    Ok((StatusCode::CREATED, Json(StatusResponse::ok())))
}
