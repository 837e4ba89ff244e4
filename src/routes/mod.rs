use std::str::FromStr;

use axum::{
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::{Map, Value};
use sqlx::sqlite::SqlitePool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::models::fields;

pub mod coaches;
pub mod games;
pub mod health;
pub mod players;
pub mod teams;
pub mod trades;

/// Build the full application router over a shared pool.
pub fn router(pool: SqlitePool) -> Router {
    // The stats frontend is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(health::health_check))

        // Leaderboards
        .route("/api/players/top/points", get(players::top_points))
        .route("/api/players/top/assists", get(players::top_assists))
        .route("/api/players/top/rebounds", get(players::top_rebounds))
        .route("/api/players/top/blocks", get(players::top_blocks))
        .route("/api/players/top/steals", get(players::top_steals))

        // Player endpoints
        .route(
            "/api/player",
            post(players::add_player)
                .put(players::update_player)
                .delete(players::delete_player),
        )
        .route("/api/player/search", get(players::search_player))
        .route("/api/player/averages", get(players::player_averages))
        .route("/api/player/stats", get(players::player_stats))
        .route("/api/player/log-game", post(players::log_game))

        // Team endpoints
        .route("/api/teams", get(teams::get_teams))
        .route(
            "/api/team",
            get(teams::get_team)
                .post(teams::add_team)
                .put(teams::update_team)
                .delete(teams::delete_team),
        )
        .route("/api/team/roster", get(teams::team_roster))
        .route("/api/team/players-by-position", get(teams::team_players_by_position))
        .route("/api/team/coach", get(coaches::get_team_coach))
        .route("/api/team/games", get(games::get_team_games))

        // Coaches and games
        .route("/api/coach", post(coaches::add_coach).put(coaches::update_coach))
        .route("/api/game", post(games::add_game).put(games::update_game))
        .route("/api/games", get(games::get_games_by_date))
        .route("/api/game/stats", get(games::get_game_stats))

        // Trades
        .route("/api/player/trade", post(trades::trade_player))
        .route("/api/players/trade", post(trades::trade_players))

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(pool)
}

// Query parameters naming a team, player or coach
#[derive(Debug, Deserialize)]
pub struct NameQuery {
    #[serde(default)]
    pub name: Option<String>,
}

// Query parameters selecting a team by name
#[derive(Debug, Deserialize)]
pub struct TeamNameQuery {
    #[serde(default)]
    pub team_name: Option<String>,
}

/// Unwrap required query parameters, reporting every absent or empty one at
/// once in the order given.
pub(crate) fn require_params<const N: usize>(params: [(&str, Option<String>); N]) -> Result<[String; N], ApiError> {
    let missing: Vec<String> = params
        .iter()
        .filter(|(_, value)| value.as_deref().is_none_or(|v| v.trim().is_empty()))
        .map(|(name, _)| name.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(ApiError::MissingFields(missing));
    }

    Ok(params.map(|(_, value)| value.unwrap_or_default()))
}

/// Parse a query parameter such as an id or a `YYYY-MM-DD` date.
pub(crate) fn parse_param<T: FromStr>(name: &str, raw: &str) -> Result<T, ApiError> {
    raw.trim().parse().map_err(|_| ApiError::InvalidValue {
        field: name.to_string(),
        reason: format!("cannot parse {raw:?}"),
    })
}

/// Loosely typed JSON body.
///
/// Handlers first `require` every mandatory name so a single 400 lists all
/// that are missing, then read typed values one by one. Integers may arrive
/// as numbers or numeric strings.
#[derive(Debug, Default)]
pub(crate) struct Fields(Map<String, Value>);

/// Body keys whose explicit `null` is a value rather than an omission.
const NULLABLE: &[&str] = &["new_value"];

impl Fields {
    /// A body that is absent, malformed or not an object reads as empty.
    pub(crate) fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice(body) {
            Ok(Value::Object(map)) => Fields(map),
            _ => Fields::default(),
        }
    }

    pub(crate) fn require(&self, names: &[&str]) -> Result<(), ApiError> {
        let missing: Vec<String> = names
            .iter()
            .filter(|name| match self.0.get(**name) {
                None => true,
                Some(Value::Null) => !NULLABLE.contains(*name),
                Some(_) => false,
            })
            .map(|name| name.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ApiError::MissingFields(missing))
        }
    }

    fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name).filter(|value| !value.is_null())
    }

    /// Raw value of a present key, `null` included.
    pub(crate) fn value(&self, name: &str) -> Result<&Value, ApiError> {
        self.0
            .get(name)
            .ok_or_else(|| ApiError::MissingFields(vec![name.to_string()]))
    }

    pub(crate) fn text(&self, name: &str) -> Result<String, ApiError> {
        Ok(fields::text(name, self.value(name)?)?)
    }

    pub(crate) fn integer(&self, name: &str) -> Result<i64, ApiError> {
        Ok(fields::integer(name, self.value(name)?)?)
    }

    /// Integer that falls back to zero when absent.
    pub(crate) fn integer_or_zero(&self, name: &str) -> Result<i64, ApiError> {
        match self.get(name) {
            Some(value) => Ok(fields::integer(name, value)?),
            None => Ok(0),
        }
    }

    pub(crate) fn date(&self, name: &str) -> Result<chrono::NaiveDate, ApiError> {
        Ok(fields::date(name, self.value(name)?)?)
    }

    pub(crate) fn text_list(&self, name: &str) -> Result<Vec<String>, ApiError> {
        let invalid = || ApiError::InvalidValue {
            field: name.to_string(),
            reason: "expected a list of strings".to_string(),
        };

        self.value(name)?
            .as_array()
            .ok_or_else(invalid)?
            .iter()
            .map(|item| item.as_str().map(str::to_string).ok_or_else(invalid))
            .collect()
    }
}
