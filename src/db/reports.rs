use sqlx::sqlite::SqlitePool;

use super::players::PLAYER_COLUMNS;
use super::{fetch_all, fetch_optional};
use crate::models::{LeaderboardEntry, LeaderboardStat, Player, RosterEntry, SeasonAverages};

/// How many players a leaderboard returns.
pub const LEADERBOARD_SIZE: i64 = 10;

fn leaderboard_sql(stat: LeaderboardStat) -> &'static str {
    match stat {
        LeaderboardStat::Points => {
            r#"SELECT Player.PlayerID AS player_id, Player.Name AS name,
                      AVG(PlayerGameStatistics.Points) AS average
               FROM Player
               INNER JOIN PlayerGameStatistics ON Player.PlayerID = PlayerGameStatistics.PlayerID
               GROUP BY Player.PlayerID, Player.Name
               ORDER BY average DESC
               LIMIT ?"#
        }
        LeaderboardStat::Assists => {
            r#"SELECT Player.PlayerID AS player_id, Player.Name AS name,
                      AVG(PlayerGameStatistics.Assists) AS average
               FROM Player
               INNER JOIN PlayerGameStatistics ON Player.PlayerID = PlayerGameStatistics.PlayerID
               GROUP BY Player.PlayerID, Player.Name
               ORDER BY average DESC
               LIMIT ?"#
        }
        LeaderboardStat::Rebounds => {
            r#"SELECT Player.PlayerID AS player_id, Player.Name AS name,
                      AVG(PlayerGameStatistics.Rebounds) AS average
               FROM Player
               INNER JOIN PlayerGameStatistics ON Player.PlayerID = PlayerGameStatistics.PlayerID
               GROUP BY Player.PlayerID, Player.Name
               ORDER BY average DESC
               LIMIT ?"#
        }
        LeaderboardStat::Blocks => {
            r#"SELECT Player.PlayerID AS player_id, Player.Name AS name,
                      AVG(PlayerGameStatistics.Blocks) AS average
               FROM Player
               INNER JOIN PlayerGameStatistics ON Player.PlayerID = PlayerGameStatistics.PlayerID
               GROUP BY Player.PlayerID, Player.Name
               ORDER BY average DESC
               LIMIT ?"#
        }
        LeaderboardStat::Steals => {
            r#"SELECT Player.PlayerID AS player_id, Player.Name AS name,
                      AVG(PlayerGameStatistics.Steals) AS average
               FROM Player
               INNER JOIN PlayerGameStatistics ON Player.PlayerID = PlayerGameStatistics.PlayerID
               GROUP BY Player.PlayerID, Player.Name
               ORDER BY average DESC
               LIMIT ?"#
        }
    }
}

/// Top players by per-game average of `stat`, highest first. Only players
/// with at least one logged game qualify; order among equal averages is
/// unspecified.
pub async fn top_players(pool: &SqlitePool, stat: LeaderboardStat) -> Result<Vec<LeaderboardEntry>, sqlx::Error> {
    fetch_all(pool, leaderboard_sql(stat), &[LEADERBOARD_SIZE.into()]).await
}

pub async fn team_roster(pool: &SqlitePool, team_name: &str) -> Result<Vec<RosterEntry>, sqlx::Error> {
    fetch_all(
        pool,
        r#"SELECT Player.PlayerID AS player_id, Player.Name AS name,
                  Player.Position AS position, Player.Age AS age
           FROM Player
           INNER JOIN Team ON Player.TeamID = Team.TeamID
           WHERE Team.Name = ?
           ORDER BY Player.PlayerID"#,
        &[team_name.into()],
    )
    .await
}

pub async fn team_players_by_position(
    pool: &SqlitePool,
    team_name: &str,
    position: &str,
) -> Result<Vec<RosterEntry>, sqlx::Error> {
    fetch_all(
        pool,
        r#"SELECT Player.PlayerID AS player_id, Player.Name AS name,
                  Player.Position AS position, Player.Age AS age
           FROM Player
           INNER JOIN Team ON Player.TeamID = Team.TeamID
           WHERE Team.Name = ? AND Player.Position = ?
           ORDER BY Player.PlayerID"#,
        &[team_name.into(), position.into()],
    )
    .await
}

pub async fn search_player_by_name(pool: &SqlitePool, name: &str) -> Result<Vec<Player>, sqlx::Error> {
    let sql = format!("SELECT {PLAYER_COLUMNS} FROM Player WHERE Player.Name = ? ORDER BY Player.PlayerID");
    fetch_all(pool, &sql, &[name.into()]).await
}

/// Per-game averages for every player with this name. The aggregate always
/// yields one row; its values are NULL when no games were logged.
pub async fn average_statistics_by_player(pool: &SqlitePool, player_name: &str) -> Result<SeasonAverages, sqlx::Error> {
    let averages = fetch_optional(
        pool,
        r#"SELECT AVG(Points) AS avg_points,
                  AVG(Rebounds) AS avg_rebounds,
                  AVG(Assists) AS avg_assists,
                  AVG(Blocks) AS avg_blocks,
                  AVG(Steals) AS avg_steals,
                  AVG(Turnovers) AS avg_turnovers,
                  AVG(MinutesPlayed) AS avg_minutes_played,
                  AVG(Fouls) AS avg_fouls
           FROM PlayerGameStatistics
           INNER JOIN Player ON PlayerGameStatistics.PlayerID = Player.PlayerID
           WHERE Player.Name = ?"#,
        &[player_name.into()],
    )
    .await?;

    Ok(averages.unwrap_or_default())
}
