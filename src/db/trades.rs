use sqlx::sqlite::SqlitePool;

use super::{execute, fetch_column};
use crate::models::TradeSummary;

#[derive(Debug, thiserror::Error)]
pub enum TradeError {
    #[error("Player '{0}' not found")]
    UnknownPlayer(String),
    #[error("Team '{0}' not found")]
    UnknownTeam(String),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Id of the first player with this name, if any
pub async fn get_player_id(pool: &SqlitePool, player_name: &str) -> Result<Option<i64>, sqlx::Error> {
    let ids: Vec<i64> = fetch_column(
        pool,
        r#"SELECT PlayerID FROM Player WHERE Name = ? ORDER BY PlayerID"#,
        &[player_name.into()],
    )
    .await?;
    Ok(ids.into_iter().next())
}

/// Id of the first team with this name, if any
pub async fn get_team_id(pool: &SqlitePool, team_name: &str) -> Result<Option<i64>, sqlx::Error> {
    let ids: Vec<i64> = fetch_column(
        pool,
        r#"SELECT TeamID FROM Team WHERE Name = ? ORDER BY TeamID"#,
        &[team_name.into()],
    )
    .await?;
    Ok(ids.into_iter().next())
}

async fn move_player(pool: &SqlitePool, player_id: i64, team_id: i64) -> Result<(), sqlx::Error> {
    execute(
        pool,
        r#"UPDATE Player SET TeamID = ? WHERE PlayerID = ?"#,
        &[team_id.into(), player_id.into()],
    )
    .await?;
    Ok(())
}

/// Move a player to another team, both looked up by name.
pub async fn trade_player(pool: &SqlitePool, player_name: &str, team_name: &str) -> Result<(), TradeError> {
    let player_id = get_player_id(pool, player_name)
        .await?
        .ok_or_else(|| TradeError::UnknownPlayer(player_name.to_string()))?;
    let team_id = get_team_id(pool, team_name)
        .await?
        .ok_or_else(|| TradeError::UnknownTeam(team_name.to_string()))?;

    move_player(pool, player_id, team_id).await?;
    tracing::info!("Traded player {} to {}", player_name, team_name);
    Ok(())
}

/// Move several players to one team.
///
/// Each player is traded independently: unknown names are logged and skipped
/// and trades already applied are kept if a later one fails. An unknown team
/// aborts before any player moves.
pub async fn trade_multiple_players<S: AsRef<str>>(
    pool: &SqlitePool,
    player_names: &[S],
    team_name: &str,
) -> Result<TradeSummary, TradeError> {
    let team_id = get_team_id(pool, team_name)
        .await?
        .ok_or_else(|| TradeError::UnknownTeam(team_name.to_string()))?;

    let mut summary = TradeSummary::default();
    for player_name in player_names {
        let player_name = player_name.as_ref();
        let Some(player_id) = get_player_id(pool, player_name).await? else {
            tracing::warn!("Player '{}' not found, skipping", player_name);
            summary.skipped.push(player_name.to_string());
            continue;
        };

        move_player(pool, player_id, team_id).await?;
        tracing::info!("Traded player {} to {}", player_name, team_name);
        summary.traded.push(player_name.to_string());
    }

    Ok(summary)
}
