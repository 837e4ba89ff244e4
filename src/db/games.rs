use chrono::NaiveDate;
use sqlx::sqlite::SqlitePool;

use super::{apply_update, execute, fetch_all, fetch_optional};
use crate::models::{Game, GameField, NewGame};

const GAME_COLUMNS: &str = r#"
    Game.GameID AS game_id,
    Game.Date AS date,
    Game.Location AS location,
    Game.HomeTeamID AS home_team_id,
    Game.AwayTeamID AS away_team_id,
    Game.HomeScore AS home_score,
    Game.AwayScore AS away_score"#;

pub async fn add_game(pool: &SqlitePool, game: &NewGame) -> Result<i64, sqlx::Error> {
    let result = execute(
        pool,
        r#"INSERT INTO Game (Date, Location, HomeTeamID, AwayTeamID, HomeScore, AwayScore)
           VALUES (?, ?, ?, ?, ?, ?)"#,
        &[
            game.date.into(),
            game.location.as_str().into(),
            game.home_team_id.into(),
            game.away_team_id.into(),
            game.home_score.into(),
            game.away_score.into(),
        ],
    )
    .await?;

    Ok(result.last_insert_rowid())
}

pub async fn delete_game(pool: &SqlitePool, game_id: i64) -> Result<u64, sqlx::Error> {
    let result = execute(pool, r#"DELETE FROM Game WHERE GameID = ?"#, &[game_id.into()]).await?;
    Ok(result.rows_affected())
}

pub async fn update_game(pool: &SqlitePool, game_id: i64, field: &GameField) -> Result<u64, sqlx::Error> {
    apply_update(pool, field, &[game_id.into()]).await
}

pub async fn get_game(pool: &SqlitePool, game_id: i64) -> Result<Option<Game>, sqlx::Error> {
    let sql = format!("SELECT {GAME_COLUMNS} FROM Game WHERE Game.GameID = ?");
    fetch_optional(pool, &sql, &[game_id.into()]).await
}

/// Every game the named team played, home or away
pub async fn get_games_by_team(pool: &SqlitePool, team_name: &str) -> Result<Vec<Game>, sqlx::Error> {
    let sql = format!(
        "SELECT {GAME_COLUMNS}
         FROM Game
         INNER JOIN Team AS home_team ON Game.HomeTeamID = home_team.TeamID
         INNER JOIN Team AS away_team ON Game.AwayTeamID = away_team.TeamID
         WHERE home_team.Name = ? OR away_team.Name = ?
         ORDER BY Game.Date, Game.GameID"
    );
    fetch_all(pool, &sql, &[team_name.into(), team_name.into()]).await
}

pub async fn get_games_by_date(pool: &SqlitePool, date: NaiveDate) -> Result<Vec<Game>, sqlx::Error> {
    let sql = format!("SELECT {GAME_COLUMNS} FROM Game WHERE Game.Date = ? ORDER BY Game.GameID");
    fetch_all(pool, &sql, &[date.into()]).await
}
