use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use sqlx::sqlite::SqlitePool;

use super::{require_params, Fields, NameQuery, TeamNameQuery};
use crate::db;
use crate::error::ApiError;
use crate::models::{NewTeam, RosterEntry, StatusResponse, Team, TeamField, UpdateField};

// Query parameters for filtering a roster by position
#[derive(Deserialize)]
pub struct TeamPositionQuery {
    #[serde(default)]
    team_name: Option<String>,
    #[serde(default)]
    position: Option<String>,
}

// GET /api/teams - List all teams
pub async fn get_teams(State(pool): State<SqlitePool>) -> Result<Json<Vec<Team>>, ApiError> {
    let teams = db::teams::get_all_teams(&pool).await?;

    Ok(Json(teams))
}

// GET /api/team?name=Lakers - Teams with this name
pub async fn get_team(
    State(pool): State<SqlitePool>,
    Query(params): Query<NameQuery>,
) -> Result<Json<Vec<Team>>, ApiError> {
    let [name] = require_params([("name", params.name)])?;

    let teams = db::teams::get_team(&pool, &name).await?;

    Ok(Json(teams))
}

// GET /api/team/roster?team_name=Lakers - Players on a team
pub async fn team_roster(
    State(pool): State<SqlitePool>,
    Query(params): Query<TeamNameQuery>,
) -> Result<Json<Vec<RosterEntry>>, ApiError> {
    let [team_name] = require_params([("team_name", params.team_name)])?;

    let roster = db::reports::team_roster(&pool, &team_name).await?;

    Ok(Json(roster))
}

// GET /api/team/players-by-position?team_name=Lakers&position=PG
pub async fn team_players_by_position(
    State(pool): State<SqlitePool>,
    Query(params): Query<TeamPositionQuery>,
) -> Result<Json<Vec<RosterEntry>>, ApiError> {
    let [team_name, position] = require_params([("team_name", params.team_name), ("position", params.position)])?;

    let roster = db::reports::team_players_by_position(&pool, &team_name, &position).await?;

    Ok(Json(roster))
}

// POST /api/team - Create a team
pub async fn add_team(
    State(pool): State<SqlitePool>,
    body: Bytes,
) -> Result<(StatusCode, Json<StatusResponse>), ApiError> {
    let fields = Fields::from_body(&body);
    fields.require(&["name", "city", "division", "conference"])?;

    let team = NewTeam {
        name: fields.text("name")?,
        city: fields.text("city")?,
        division: fields.text("division")?,
        conference: fields.text("conference")?,
    };
    db::teams::add_team(&pool, &team).await?;

    Ok((StatusCode::CREATED, Json(StatusResponse::ok())))
}

// PUT /api/team - Change one column of a team
pub async fn update_team(
    State(pool): State<SqlitePool>,
    body: Bytes,
) -> Result<Json<StatusResponse>, ApiError> {
    let fields = Fields::from_body(&body);
    fields.require(&["team_id", "column", "new_value"])?;

    let team_id = fields.integer("team_id")?;
    let field = TeamField::parse(&fields.text("column")?, fields.value("new_value")?)?;
    db::teams::update_team(&pool, team_id, &field).await?;

    Ok(Json(StatusResponse::ok()))
}

// DELETE /api/team?name=Lakers - Delete teams by name
pub async fn delete_team(
    State(pool): State<SqlitePool>,
    Query(params): Query<NameQuery>,
) -> Result<Json<StatusResponse>, ApiError> {
    let [name] = require_params([("name", params.name)])?;

    let deleted = db::teams::delete_team(&pool, &name).await?;
    tracing::debug!("Deleted {} team row(s)", deleted);

    Ok(Json(StatusResponse::ok()))
}
