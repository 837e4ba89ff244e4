use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use sqlx::sqlite::SqlitePool;

use super::{require_params, Fields, TeamNameQuery};
use crate::db;
use crate::error::ApiError;
use crate::models::{Coach, CoachField, NewCoach, StatusResponse, UpdateField};

// GET /api/team/coach?team_name=Lakers - Coaches of a team
pub async fn get_team_coach(
    State(pool): State<SqlitePool>,
    Query(params): Query<TeamNameQuery>,
) -> Result<Json<Vec<Coach>>, ApiError> {
    let [team_name] = require_params([("team_name", params.team_name)])?;

    let coaches = db::coaches::get_coach_by_team(&pool, &team_name).await?;

    Ok(Json(coaches))
}

// POST /api/coach - Create a coach
pub async fn add_coach(
    State(pool): State<SqlitePool>,
    body: Bytes,
) -> Result<(StatusCode, Json<StatusResponse>), ApiError> {
    let fields = Fields::from_body(&body);
    fields.require(&["name", "salary", "team_id"])?;

    let coach = NewCoach {
        name: fields.text("name")?,
        salary: fields.integer("salary")?,
        team_id: fields.integer("team_id")?,
    };
    db::coaches::add_coach(&pool, &coach).await?;

    Ok((StatusCode::CREATED, Json(StatusResponse::ok())))
}

// PUT /api/coach - Change one column of a coach
pub async fn update_coach(
    State(pool): State<SqlitePool>,
    body: Bytes,
) -> Result<Json<StatusResponse>, ApiError> {
    let fields = Fields::from_body(&body);
    fields.require(&["coach_id", "column", "new_value"])?;

    let coach_id = fields.integer("coach_id")?;
    let field = CoachField::parse(&fields.text("column")?, fields.value("new_value")?)?;
    db::coaches::update_coach(&pool, coach_id, &field).await?;

    Ok(Json(StatusResponse::ok()))
}
