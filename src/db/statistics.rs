use sqlx::sqlite::SqlitePool;

use super::schema::Table;
use super::{apply_update, execute, fetch_all, fetch_optional};
use crate::models::{NewPlayerStatistics, PlayerGameStatistics, StatisticsField};

const STATISTICS_COLUMNS: &str = r#"
    GameID AS game_id,
    PlayerID AS player_id,
    Points AS points,
    Rebounds AS rebounds,
    Assists AS assists,
    Blocks AS blocks,
    Steals AS steals,
    Turnovers AS turnovers,
    MinutesPlayed AS minutes_played,
    Fouls AS fouls"#;

/// Record a player's box score for one game. Fails if the (game, player)
/// pair already has a line.
pub async fn add_player_statistics(pool: &SqlitePool, stats: &NewPlayerStatistics) -> Result<(), sqlx::Error> {
    execute(
        pool,
        Table::PlayerGameStatistics.insert_sql(),
        &[
            stats.game_id.into(),
            stats.player_id.into(),
            stats.points.into(),
            stats.rebounds.into(),
            stats.assists.into(),
            stats.blocks.into(),
            stats.steals.into(),
            stats.turnovers.into(),
            stats.minutes_played.into(),
            stats.fouls.into(),
        ],
    )
    .await?;

    Ok(())
}

pub async fn update_player_statistics(
    pool: &SqlitePool,
    game_id: i64,
    player_id: i64,
    field: &StatisticsField,
) -> Result<u64, sqlx::Error> {
    apply_update(pool, field, &[game_id.into(), player_id.into()]).await
}

pub async fn delete_player_statistics(pool: &SqlitePool, game_id: i64, player_id: i64) -> Result<u64, sqlx::Error> {
    let result = execute(
        pool,
        r#"DELETE FROM PlayerGameStatistics WHERE GameID = ? AND PlayerID = ?"#,
        &[game_id.into(), player_id.into()],
    )
    .await?;
    Ok(result.rows_affected())
}

pub async fn get_player_statistics(
    pool: &SqlitePool,
    game_id: i64,
    player_id: i64,
) -> Result<Option<PlayerGameStatistics>, sqlx::Error> {
    let sql = format!("SELECT {STATISTICS_COLUMNS} FROM PlayerGameStatistics WHERE GameID = ? AND PlayerID = ?");
    fetch_optional(pool, &sql, &[game_id.into(), player_id.into()]).await
}

pub async fn get_statistics_by_player(
    pool: &SqlitePool,
    player_id: i64,
) -> Result<Vec<PlayerGameStatistics>, sqlx::Error> {
    let sql = format!("SELECT {STATISTICS_COLUMNS} FROM PlayerGameStatistics WHERE PlayerID = ? ORDER BY GameID");
    fetch_all(pool, &sql, &[player_id.into()]).await
}

pub async fn get_statistics_by_game(pool: &SqlitePool, game_id: i64) -> Result<Vec<PlayerGameStatistics>, sqlx::Error> {
    let sql = format!("SELECT {STATISTICS_COLUMNS} FROM PlayerGameStatistics WHERE GameID = ? ORDER BY PlayerID");
    fetch_all(pool, &sql, &[game_id.into()]).await
}
