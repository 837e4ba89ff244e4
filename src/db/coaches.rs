use sqlx::sqlite::SqlitePool;

use super::{apply_update, execute, fetch_all};
use crate::models::{Coach, CoachField, NewCoach};

pub async fn add_coach(pool: &SqlitePool, coach: &NewCoach) -> Result<i64, sqlx::Error> {
    let result = execute(
        pool,
        r#"INSERT INTO Coach (Name, Salary, TeamID) VALUES (?, ?, ?)"#,
        &[coach.name.as_str().into(), coach.salary.into(), coach.team_id.into()],
    )
    .await?;

    Ok(result.last_insert_rowid())
}

pub async fn delete_coach(pool: &SqlitePool, coach_name: &str) -> Result<u64, sqlx::Error> {
    let result = execute(pool, r#"DELETE FROM Coach WHERE Name = ?"#, &[coach_name.into()]).await?;
    Ok(result.rows_affected())
}

pub async fn update_coach(pool: &SqlitePool, coach_id: i64, field: &CoachField) -> Result<u64, sqlx::Error> {
    apply_update(pool, field, &[coach_id.into()]).await
}

pub async fn get_coach(pool: &SqlitePool, coach_name: &str) -> Result<Vec<Coach>, sqlx::Error> {
    fetch_all(
        pool,
        r#"SELECT CoachID AS coach_id, Name AS name, Salary AS salary, TeamID AS team_id
           FROM Coach
           WHERE Name = ?"#,
        &[coach_name.into()],
    )
    .await
}

/// Coaching staff of the team with the given name
pub async fn get_coach_by_team(pool: &SqlitePool, team_name: &str) -> Result<Vec<Coach>, sqlx::Error> {
    fetch_all(
        pool,
        r#"SELECT Coach.CoachID AS coach_id, Coach.Name AS name, Coach.Salary AS salary, Coach.TeamID AS team_id
           FROM Coach
           INNER JOIN Team ON Coach.TeamID = Team.TeamID
           WHERE Team.Name = ?
           ORDER BY Coach.CoachID"#,
        &[team_name.into()],
    )
    .await
}
