use sqlx::sqlite::SqlitePool;

use super::{apply_update, execute, fetch_all, fetch_optional};
use crate::models::{NewPlayer, Player, PlayerField};

pub(crate) const PLAYER_COLUMNS: &str = r#"
    Player.PlayerID AS player_id,
    Player.Name AS name,
    Player.Height AS height,
    Player.Weight AS weight,
    Player.Age AS age,
    Player.Position AS position,
    Player.TeamID AS team_id"#;

pub async fn add_player(pool: &SqlitePool, player: &NewPlayer) -> Result<i64, sqlx::Error> {
    let result = execute(
        pool,
        r#"INSERT INTO Player (Name, Height, Weight, Age, Position, TeamID)
           VALUES (?, ?, ?, ?, ?, ?)"#,
        &[
            player.name.as_str().into(),
            player.height.into(),
            player.weight.into(),
            player.age.into(),
            player.position.as_str().into(),
            player.team_id.into(),
        ],
    )
    .await?;

    Ok(result.last_insert_rowid())
}

pub async fn delete_player(pool: &SqlitePool, player_name: &str) -> Result<u64, sqlx::Error> {
    let result = execute(pool, r#"DELETE FROM Player WHERE Name = ?"#, &[player_name.into()]).await?;
    Ok(result.rows_affected())
}

pub async fn update_player(pool: &SqlitePool, player_id: i64, field: &PlayerField) -> Result<u64, sqlx::Error> {
    apply_update(pool, field, &[player_id.into()]).await
}

pub async fn get_player(pool: &SqlitePool, player_name: &str) -> Result<Vec<Player>, sqlx::Error> {
    let sql = format!("SELECT {PLAYER_COLUMNS} FROM Player WHERE Player.Name = ?");
    fetch_all(pool, &sql, &[player_name.into()]).await
}

pub async fn get_player_by_id(pool: &SqlitePool, player_id: i64) -> Result<Option<Player>, sqlx::Error> {
    let sql = format!("SELECT {PLAYER_COLUMNS} FROM Player WHERE Player.PlayerID = ?");
    fetch_optional(pool, &sql, &[player_id.into()]).await
}

pub async fn get_players_by_team(pool: &SqlitePool, team_name: &str) -> Result<Vec<Player>, sqlx::Error> {
    let sql = format!(
        "SELECT {PLAYER_COLUMNS}
         FROM Player
         INNER JOIN Team ON Player.TeamID = Team.TeamID
         WHERE Team.Name = ?
         ORDER BY Player.PlayerID"
    );
    fetch_all(pool, &sql, &[team_name.into()]).await
}

/// Players at a position across the whole league
pub async fn get_players_by_position(pool: &SqlitePool, position: &str) -> Result<Vec<Player>, sqlx::Error> {
    let sql = format!(
        "SELECT {PLAYER_COLUMNS} FROM Player WHERE Player.Position = ? ORDER BY Player.PlayerID"
    );
    fetch_all(pool, &sql, &[position.into()]).await
}
