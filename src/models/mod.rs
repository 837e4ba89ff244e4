use serde::{Deserialize, Serialize};

pub mod fields;

pub use fields::{CoachField, FieldError, GameField, PlayerField, StatisticsField, TeamField, UpdateField};

/// Row from the Team table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Team {
    pub team_id: i64,
    pub name: String,
    pub city: String,
    pub division: String,
    pub conference: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTeam {
    pub name: String,
    pub city: String,
    pub division: String,
    pub conference: String,
}

/// Row from the Coach table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Coach {
    pub coach_id: i64,
    pub name: String,
    pub salary: i64,
    pub team_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCoach {
    pub name: String,
    pub salary: i64,
    pub team_id: i64,
}

/// Row from the Player table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Player {
    pub player_id: i64,
    pub name: String,
    pub height: i64,
    pub weight: i64,
    pub age: i64,
    pub position: String,
    pub team_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPlayer {
    pub name: String,
    pub height: i64,
    pub weight: i64,
    pub age: i64,
    pub position: String,
    pub team_id: i64,
}

/// Row from the Game table. Dates are stored as ISO `YYYY-MM-DD` text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Game {
    pub game_id: i64,
    pub date: chrono::NaiveDate,
    pub location: String,
    pub home_team_id: i64,
    pub away_team_id: i64,
    pub home_score: i64,
    pub away_score: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGame {
    pub date: chrono::NaiveDate,
    pub location: String,
    pub home_team_id: i64,
    pub away_team_id: i64,
    pub home_score: i64,
    pub away_score: i64,
}

/// Box score line for one player in one game, keyed by (game_id, player_id)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct PlayerGameStatistics {
    pub game_id: i64,
    pub player_id: i64,
    pub points: i64,
    pub rebounds: i64,
    pub assists: i64,
    pub blocks: i64,
    pub steals: i64,
    pub turnovers: i64,
    pub minutes_played: i64,
    pub fouls: i64,
}

/// Payload for logging a game. Only the headline numbers are required on the
/// wire; the rest of the box score defaults to zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPlayerStatistics {
    pub game_id: i64,
    pub player_id: i64,
    pub points: i64,
    pub rebounds: i64,
    pub assists: i64,
    pub blocks: i64,
    pub steals: i64,
    pub turnovers: i64,
    pub minutes_played: i64,
    pub fouls: i64,
}

/// Player summary used by roster listings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct RosterEntry {
    pub player_id: i64,
    pub name: String,
    pub position: String,
    pub age: i64,
}

/// Statistic a leaderboard can rank players by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaderboardStat {
    Points,
    Assists,
    Rebounds,
    Blocks,
    Steals,
}

impl LeaderboardStat {
    /// JSON key holding the average, e.g. `avg_points`.
    pub fn average_key(self) -> &'static str {
        match self {
            LeaderboardStat::Points => "avg_points",
            LeaderboardStat::Assists => "avg_assists",
            LeaderboardStat::Rebounds => "avg_rebounds",
            LeaderboardStat::Blocks => "avg_blocks",
            LeaderboardStat::Steals => "avg_steals",
        }
    }
}

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct LeaderboardEntry {
    pub player_id: i64,
    pub name: String,
    pub average: f64,
}

/// A leaderboard line, serialized with the average under the stat's own key:
/// `{"player_id": 1, "name": "...", "avg_points": 27.5}`
#[derive(Debug)]
pub struct RankedPlayer {
    pub stat: LeaderboardStat,
    pub entry: LeaderboardEntry,
}

impl Serialize for RankedPlayer {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("player_id", &self.entry.player_id)?;
        map.serialize_entry("name", &self.entry.name)?;
        map.serialize_entry(self.stat.average_key(), &self.entry.average)?;
        map.end()
    }
}

/// Per-game averages across a player's logged games. Every field is `None`
/// when the player has no statistics rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct SeasonAverages {
    pub avg_points: Option<f64>,
    pub avg_rebounds: Option<f64>,
    pub avg_assists: Option<f64>,
    pub avg_blocks: Option<f64>,
    pub avg_steals: Option<f64>,
    pub avg_turnovers: Option<f64>,
    pub avg_minutes_played: Option<f64>,
    pub avg_fouls: Option<f64>,
}

/// Result of a multi-player trade.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TradeSummary {
    pub traded: Vec<String>,
    pub skipped: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn ok() -> Self {
        StatusResponse {
            status: "ok".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TradeResponse {
    pub status: String,
    #[serde(flatten)]
    pub summary: TradeSummary,
}
