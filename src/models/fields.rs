//! Closed sets of updatable columns.
//!
//! Every variant pairs one column with its typed value and maps to a single
//! fixed `UPDATE` statement, so wire input only ever selects a statement and
//! never contributes SQL text.

use chrono::NaiveDate;
use serde_json::Value;

use crate::db::SqlValue;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    #[error("Invalid column '{0}'")]
    InvalidColumn(String),
    #[error("Invalid value for '{column}': {reason}")]
    InvalidValue { column: String, reason: String },
}

/// A single-column update for one entity.
pub trait UpdateField: Sized {
    /// Build the update from a wire column name (the SQL column name, e.g.
    /// `TeamID`) and its JSON value.
    fn parse(column: &str, value: &Value) -> Result<Self, FieldError>;

    fn column(&self) -> &'static str;

    /// Parameterized statement. The new value is bound first, followed by the
    /// row key.
    fn statement(&self) -> &'static str;

    fn value(&self) -> SqlValue;
}

fn invalid(column: &str, reason: impl Into<String>) -> FieldError {
    FieldError::InvalidValue {
        column: column.to_string(),
        reason: reason.into(),
    }
}

pub(crate) fn text(column: &str, value: &Value) -> Result<String, FieldError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| invalid(column, "expected a string"))
}

pub(crate) fn integer(column: &str, value: &Value) -> Result<i64, FieldError> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| {
                // 206.0 is still an integer
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                    .map(|f| f as i64)
            })
            .ok_or_else(|| invalid(column, format!("expected an integer, got {n}"))),
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|_| invalid(column, format!("expected an integer, got {s:?}"))),
        _ => Err(invalid(column, "expected an integer")),
    }
}

/// Integer for a nullable column; JSON `null` clears it.
fn nullable_integer(column: &str, value: &Value) -> Result<Option<i64>, FieldError> {
    match value {
        Value::Null => Ok(None),
        other => integer(column, other).map(Some),
    }
}

pub(crate) fn date(column: &str, value: &Value) -> Result<NaiveDate, FieldError> {
    let raw = text(column, value)?;
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| invalid(column, format!("expected a YYYY-MM-DD date, got {raw:?}")))
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlayerField {
    Name(String),
    Height(i64),
    Weight(i64),
    Age(i64),
    Position(String),
    /// `None` releases the player from any team
    TeamId(Option<i64>),
}

impl UpdateField for PlayerField {
    fn parse(column: &str, value: &Value) -> Result<Self, FieldError> {
        match column {
            "Name" => Ok(PlayerField::Name(text(column, value)?)),
            "Height" => Ok(PlayerField::Height(integer(column, value)?)),
            "Weight" => Ok(PlayerField::Weight(integer(column, value)?)),
            "Age" => Ok(PlayerField::Age(integer(column, value)?)),
            "Position" => Ok(PlayerField::Position(text(column, value)?)),
            "TeamID" => Ok(PlayerField::TeamId(nullable_integer(column, value)?)),
            other => Err(FieldError::InvalidColumn(other.to_string())),
        }
    }

    fn column(&self) -> &'static str {
        match self {
            PlayerField::Name(_) => "Name",
            PlayerField::Height(_) => "Height",
            PlayerField::Weight(_) => "Weight",
            PlayerField::Age(_) => "Age",
            PlayerField::Position(_) => "Position",
            PlayerField::TeamId(_) => "TeamID",
        }
    }

    fn statement(&self) -> &'static str {
        match self {
            PlayerField::Name(_) => "UPDATE Player SET Name = ? WHERE PlayerID = ?",
            PlayerField::Height(_) => "UPDATE Player SET Height = ? WHERE PlayerID = ?",
            PlayerField::Weight(_) => "UPDATE Player SET Weight = ? WHERE PlayerID = ?",
            PlayerField::Age(_) => "UPDATE Player SET Age = ? WHERE PlayerID = ?",
            PlayerField::Position(_) => "UPDATE Player SET Position = ? WHERE PlayerID = ?",
            PlayerField::TeamId(_) => "UPDATE Player SET TeamID = ? WHERE PlayerID = ?",
        }
    }

    fn value(&self) -> SqlValue {
        match self {
            PlayerField::Name(v) | PlayerField::Position(v) => v.clone().into(),
            PlayerField::Height(v) | PlayerField::Weight(v) | PlayerField::Age(v) => (*v).into(),
            PlayerField::TeamId(v) => (*v).into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TeamField {
    Name(String),
    City(String),
    Division(String),
    Conference(String),
}

impl UpdateField for TeamField {
    fn parse(column: &str, value: &Value) -> Result<Self, FieldError> {
        match column {
            "Name" => Ok(TeamField::Name(text(column, value)?)),
            "City" => Ok(TeamField::City(text(column, value)?)),
            "Division" => Ok(TeamField::Division(text(column, value)?)),
            "Conference" => Ok(TeamField::Conference(text(column, value)?)),
            other => Err(FieldError::InvalidColumn(other.to_string())),
        }
    }

    fn column(&self) -> &'static str {
        match self {
            TeamField::Name(_) => "Name",
            TeamField::City(_) => "City",
            TeamField::Division(_) => "Division",
            TeamField::Conference(_) => "Conference",
        }
    }

    fn statement(&self) -> &'static str {
        match self {
            TeamField::Name(_) => "UPDATE Team SET Name = ? WHERE TeamID = ?",
            TeamField::City(_) => "UPDATE Team SET City = ? WHERE TeamID = ?",
            TeamField::Division(_) => "UPDATE Team SET Division = ? WHERE TeamID = ?",
            TeamField::Conference(_) => "UPDATE Team SET Conference = ? WHERE TeamID = ?",
        }
    }

    fn value(&self) -> SqlValue {
        match self {
            TeamField::Name(v)
            | TeamField::City(v)
            | TeamField::Division(v)
            | TeamField::Conference(v) => v.clone().into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CoachField {
    Name(String),
    Salary(i64),
    TeamId(Option<i64>),
}

impl UpdateField for CoachField {
    fn parse(column: &str, value: &Value) -> Result<Self, FieldError> {
        match column {
            "Name" => Ok(CoachField::Name(text(column, value)?)),
            "Salary" => Ok(CoachField::Salary(integer(column, value)?)),
            "TeamID" => Ok(CoachField::TeamId(nullable_integer(column, value)?)),
            other => Err(FieldError::InvalidColumn(other.to_string())),
        }
    }

    fn column(&self) -> &'static str {
        match self {
            CoachField::Name(_) => "Name",
            CoachField::Salary(_) => "Salary",
            CoachField::TeamId(_) => "TeamID",
        }
    }

    fn statement(&self) -> &'static str {
        match self {
            CoachField::Name(_) => "UPDATE Coach SET Name = ? WHERE CoachID = ?",
            CoachField::Salary(_) => "UPDATE Coach SET Salary = ? WHERE CoachID = ?",
            CoachField::TeamId(_) => "UPDATE Coach SET TeamID = ? WHERE CoachID = ?",
        }
    }

    fn value(&self) -> SqlValue {
        match self {
            CoachField::Name(v) => v.clone().into(),
            CoachField::Salary(v) => (*v).into(),
            CoachField::TeamId(v) => (*v).into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GameField {
    Date(NaiveDate),
    Location(String),
    HomeTeamId(i64),
    AwayTeamId(i64),
    HomeScore(i64),
    AwayScore(i64),
}

impl UpdateField for GameField {
    fn parse(column: &str, value: &Value) -> Result<Self, FieldError> {
        match column {
            "Date" => Ok(GameField::Date(date(column, value)?)),
            "Location" => Ok(GameField::Location(text(column, value)?)),
            "HomeTeamID" => Ok(GameField::HomeTeamId(integer(column, value)?)),
            "AwayTeamID" => Ok(GameField::AwayTeamId(integer(column, value)?)),
            "HomeScore" => Ok(GameField::HomeScore(integer(column, value)?)),
            "AwayScore" => Ok(GameField::AwayScore(integer(column, value)?)),
            other => Err(FieldError::InvalidColumn(other.to_string())),
        }
    }

    fn column(&self) -> &'static str {
        match self {
            GameField::Date(_) => "Date",
            GameField::Location(_) => "Location",
            GameField::HomeTeamId(_) => "HomeTeamID",
            GameField::AwayTeamId(_) => "AwayTeamID",
            GameField::HomeScore(_) => "HomeScore",
            GameField::AwayScore(_) => "AwayScore",
        }
    }

    fn statement(&self) -> &'static str {
        match self {
            GameField::Date(_) => "UPDATE Game SET Date = ? WHERE GameID = ?",
            GameField::Location(_) => "UPDATE Game SET Location = ? WHERE GameID = ?",
            GameField::HomeTeamId(_) => "UPDATE Game SET HomeTeamID = ? WHERE GameID = ?",
            GameField::AwayTeamId(_) => "UPDATE Game SET AwayTeamID = ? WHERE GameID = ?",
            GameField::HomeScore(_) => "UPDATE Game SET HomeScore = ? WHERE GameID = ?",
            GameField::AwayScore(_) => "UPDATE Game SET AwayScore = ? WHERE GameID = ?",
        }
    }

    fn value(&self) -> SqlValue {
        match self {
            GameField::Date(v) => (*v).into(),
            GameField::Location(v) => v.clone().into(),
            GameField::HomeTeamId(v)
            | GameField::AwayTeamId(v)
            | GameField::HomeScore(v)
            | GameField::AwayScore(v) => (*v).into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatisticsField {
    Points(i64),
    Rebounds(i64),
    Assists(i64),
    Blocks(i64),
    Steals(i64),
    Turnovers(i64),
    MinutesPlayed(i64),
    Fouls(i64),
}

impl UpdateField for StatisticsField {
    fn parse(column: &str, value: &Value) -> Result<Self, FieldError> {
        let build: fn(i64) -> StatisticsField = match column {
            "Points" => StatisticsField::Points,
            "Rebounds" => StatisticsField::Rebounds,
            "Assists" => StatisticsField::Assists,
            "Blocks" => StatisticsField::Blocks,
            "Steals" => StatisticsField::Steals,
            "Turnovers" => StatisticsField::Turnovers,
            "MinutesPlayed" => StatisticsField::MinutesPlayed,
            "Fouls" => StatisticsField::Fouls,
            other => return Err(FieldError::InvalidColumn(other.to_string())),
        };
        Ok(build(integer(column, value)?))
    }

    fn column(&self) -> &'static str {
        match self {
            StatisticsField::Points(_) => "Points",
            StatisticsField::Rebounds(_) => "Rebounds",
            StatisticsField::Assists(_) => "Assists",
            StatisticsField::Blocks(_) => "Blocks",
            StatisticsField::Steals(_) => "Steals",
            StatisticsField::Turnovers(_) => "Turnovers",
            StatisticsField::MinutesPlayed(_) => "MinutesPlayed",
            StatisticsField::Fouls(_) => "Fouls",
        }
    }

    fn statement(&self) -> &'static str {
        match self {
            StatisticsField::Points(_) => {
                "UPDATE PlayerGameStatistics SET Points = ? WHERE GameID = ? AND PlayerID = ?"
            }
            StatisticsField::Rebounds(_) => {
                "UPDATE PlayerGameStatistics SET Rebounds = ? WHERE GameID = ? AND PlayerID = ?"
            }
            StatisticsField::Assists(_) => {
                "UPDATE PlayerGameStatistics SET Assists = ? WHERE GameID = ? AND PlayerID = ?"
            }
            StatisticsField::Blocks(_) => {
                "UPDATE PlayerGameStatistics SET Blocks = ? WHERE GameID = ? AND PlayerID = ?"
            }
            StatisticsField::Steals(_) => {
                "UPDATE PlayerGameStatistics SET Steals = ? WHERE GameID = ? AND PlayerID = ?"
            }
            StatisticsField::Turnovers(_) => {
                "UPDATE PlayerGameStatistics SET Turnovers = ? WHERE GameID = ? AND PlayerID = ?"
            }
            StatisticsField::MinutesPlayed(_) => {
                "UPDATE PlayerGameStatistics SET MinutesPlayed = ? WHERE GameID = ? AND PlayerID = ?"
            }
            StatisticsField::Fouls(_) => {
                "UPDATE PlayerGameStatistics SET Fouls = ? WHERE GameID = ? AND PlayerID = ?"
            }
        }
    }

    fn value(&self) -> SqlValue {
        match self {
            StatisticsField::Points(v)
            | StatisticsField::Rebounds(v)
            | StatisticsField::Assists(v)
            | StatisticsField::Blocks(v)
            | StatisticsField::Steals(v)
            | StatisticsField::Turnovers(v)
            | StatisticsField::MinutesPlayed(v)
            | StatisticsField::Fouls(v) => (*v).into(),
        }
    }
}
