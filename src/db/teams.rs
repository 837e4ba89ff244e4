use sqlx::sqlite::SqlitePool;

use super::{apply_update, execute, fetch_all, fetch_optional};
use crate::models::{NewTeam, Team, TeamField};

const TEAM_COLUMNS: &str = r#"
    TeamID AS team_id,
    Name AS name,
    City AS city,
    Division AS division,
    Conference AS conference"#;

/// Insert a team and return its assigned id
pub async fn add_team(pool: &SqlitePool, team: &NewTeam) -> Result<i64, sqlx::Error> {
    let result = execute(
        pool,
        r#"INSERT INTO Team (Name, City, Division, Conference) VALUES (?, ?, ?, ?)"#,
        &[
            team.name.as_str().into(),
            team.city.as_str().into(),
            team.division.as_str().into(),
            team.conference.as_str().into(),
        ],
    )
    .await?;

    Ok(result.last_insert_rowid())
}

pub async fn delete_team(pool: &SqlitePool, team_name: &str) -> Result<u64, sqlx::Error> {
    let result = execute(pool, r#"DELETE FROM Team WHERE Name = ?"#, &[team_name.into()]).await?;
    Ok(result.rows_affected())
}

pub async fn update_team(pool: &SqlitePool, team_id: i64, field: &TeamField) -> Result<u64, sqlx::Error> {
    apply_update(pool, field, &[team_id.into()]).await
}

/// Teams matching a name. Names are not unique, so this may return several.
pub async fn get_team(pool: &SqlitePool, team_name: &str) -> Result<Vec<Team>, sqlx::Error> {
    let sql = format!("SELECT {TEAM_COLUMNS} FROM Team WHERE Name = ?");
    fetch_all(pool, &sql, &[team_name.into()]).await
}

pub async fn get_team_by_id(pool: &SqlitePool, team_id: i64) -> Result<Option<Team>, sqlx::Error> {
    let sql = format!("SELECT {TEAM_COLUMNS} FROM Team WHERE TeamID = ?");
    fetch_optional(pool, &sql, &[team_id.into()]).await
}

pub async fn get_all_teams(pool: &SqlitePool) -> Result<Vec<Team>, sqlx::Error> {
    let sql = format!("SELECT {TEAM_COLUMNS} FROM Team ORDER BY Name");
    fetch_all(pool, &sql, &[]).await
}
