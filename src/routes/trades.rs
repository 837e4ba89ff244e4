use axum::{body::Bytes, extract::State, response::Json};
use sqlx::sqlite::SqlitePool;

use super::Fields;
use crate::db;
use crate::error::ApiError;
use crate::models::{StatusResponse, TradeResponse};

// POST /api/player/trade - Move one player to another team
pub async fn trade_player(
    State(pool): State<SqlitePool>,
    body: Bytes,
) -> Result<Json<StatusResponse>, ApiError> {
    let fields = Fields::from_body(&body);
    fields.require(&["player_name", "team_name"])?;

    db::trades::trade_player(&pool, &fields.text("player_name")?, &fields.text("team_name")?).await?;

    Ok(Json(StatusResponse::ok()))
}

// POST /api/players/trade - Move several players to one team, skipping unknown names
pub async fn trade_players(
    State(pool): State<SqlitePool>,
    body: Bytes,
) -> Result<Json<TradeResponse>, ApiError> {
    let fields = Fields::from_body(&body);
    fields.require(&["player_names", "team_name"])?;

    let player_names = fields.text_list("player_names")?;
    let summary = db::trades::trade_multiple_players(&pool, &player_names, &fields.text("team_name")?).await?;

    Ok(Json(TradeResponse {
        status: "ok".to_string(),
        summary,
    }))
}
