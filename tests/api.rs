//! HTTP tests for the league API.
//!
//! Each test builds the full router over a fresh in-memory database and
//! drives it with `oneshot`, checking status codes, JSON bodies and the rows
//! left behind.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use league_stats_api::{db::schema, routes};
use serde_json::{json, Value};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tower::ServiceExt;

async fn setup() -> (Router, SqlitePool) {
    // one connection: every :memory: connection is its own database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    schema::create_all_tables(&pool).await.unwrap();

    (routes::router(pool.clone()), pool)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let body = match body {
        Some(value) => Body::from(value.to_string()),
        None => Body::empty(),
    };
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, "GET", uri, None).await
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, "POST", uri, Some(body)).await
}

async fn put(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, "PUT", uri, Some(body)).await
}

async fn add_team(app: &Router, name: &str) {
    let (status, _) = post(
        app,
        "/api/team",
        json!({"name": name, "city": "Somewhere", "division": "Pacific", "conference": "West"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

async fn add_player(app: &Router, name: &str, team_id: i64) {
    let (status, _) = post(
        app,
        "/api/player",
        json!({"name": name, "height": 206, "weight": 113, "age": 39, "position": "SF", "team_id": team_id}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

async fn add_game(app: &Router, home_team_id: i64, away_team_id: i64) {
    let (status, _) = post(
        app,
        "/api/game",
        json!({
            "date": "2024-10-22",
            "location": "Crypto.com Arena",
            "home_team_id": home_team_id,
            "away_team_id": away_team_id,
            "home_score": 110,
            "away_score": 103
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

async fn count(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Health check answers with a fixed status body.
#[tokio::test]
async fn health_reports_ok() {
    let (app, _) = setup().await;

    let (status, body) = get(&app, "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

/// A newly created team exists and has an empty roster.
#[tokio::test]
async fn new_team_has_empty_roster() {
    let (app, _) = setup().await;

    let (status, body) = post(
        &app,
        "/api/team",
        json!({"name": "Lakers", "city": "Los Angeles", "division": "Pacific", "conference": "West"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"status": "ok"}));

    let (status, roster) = get(&app, "/api/team/roster?team_name=Lakers").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(roster, json!([]));

    let (_, teams) = get(&app, "/api/team?name=Lakers").await;
    assert_eq!(
        teams,
        json!([{
            "team_id": 1,
            "name": "Lakers",
            "city": "Los Angeles",
            "division": "Pacific",
            "conference": "West"
        }])
    );
}

/// Missing body fields are all named, in order, and nothing is written.
#[tokio::test]
async fn missing_fields_are_rejected_without_writing() {
    let (app, pool) = setup().await;

    let (status, body) = post(&app, "/api/team", json!({"name": "Lakers"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Missing fields: city, division, conference"}));

    let (status, body) = send(&app, "POST", "/api/team", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Missing fields: name, city, division, conference"}));

    assert_eq!(count(&pool, "Team").await, 0);
}

/// Query parameters that are absent or empty are reported as missing.
#[tokio::test]
async fn missing_query_parameters_are_rejected() {
    let (app, _) = setup().await;

    let (status, body) = get(&app, "/api/team/roster").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Missing fields: team_name"}));

    let (status, body) = get(&app, "/api/team/players-by-position?team_name=&position=PG").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Missing fields: team_name"}));
}

/// Only allow-listed columns can be updated, and only that column changes.
#[tokio::test]
async fn player_updates_respect_the_column_allow_list() {
    let (app, _) = setup().await;
    add_team(&app, "Lakers").await;
    add_player(&app, "LeBron", 1).await;

    let (status, body) = put(
        &app,
        "/api/player",
        json!({"player_id": 1, "column": "PlayerID", "new_value": 99}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid column 'PlayerID'"}));

    let (status, body) = put(
        &app,
        "/api/player",
        json!({"player_id": 1, "column": "Height", "new_value": "tall"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid value for 'Height'"));

    let (status, _) = put(
        &app,
        "/api/player",
        json!({"player_id": "1", "column": "Height", "new_value": "203"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, players) = get(&app, "/api/player/search?name=LeBron").await;
    assert_eq!(
        players,
        json!([{
            "player_id": 1,
            "name": "LeBron",
            "height": 203,
            "weight": 113,
            "age": 39,
            "position": "SF",
            "team_id": 1
        }])
    );
}

/// Team updates go through the same allow-list.
#[tokio::test]
async fn team_update_and_delete() {
    let (app, pool) = setup().await;
    add_team(&app, "Sonics").await;

    let (status, _) = put(
        &app,
        "/api/team",
        json!({"team_id": 1, "column": "City", "new_value": "Seattle"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = put(
        &app,
        "/api/team",
        json!({"team_id": 1, "column": "Name; DROP TABLE Team", "new_value": "x"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, teams) = get(&app, "/api/teams").await;
    assert_eq!(teams[0]["city"], "Seattle");

    let (status, _) = send(&app, "DELETE", "/api/team?name=Sonics", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(count(&pool, "Team").await, 0);
}

/// Logging a game fills the optional box score columns with zero.
#[tokio::test]
async fn log_game_defaults_optional_stats() {
    let (app, _) = setup().await;
    add_team(&app, "Lakers").await;
    add_team(&app, "Suns").await;
    add_player(&app, "LeBron", 1).await;
    add_game(&app, 1, 2).await;

    let (status, body) = post(
        &app,
        "/api/player/log-game",
        json!({"game_id": 1, "player_id": 1, "points": 28, "rebounds": 8, "assists": 11, "steals": 2}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"status": "ok"}));

    let (_, stats) = get(&app, "/api/player/stats?player_id=1").await;
    assert_eq!(
        stats,
        json!([{
            "game_id": 1,
            "player_id": 1,
            "points": 28,
            "rebounds": 8,
            "assists": 11,
            "blocks": 0,
            "steals": 2,
            "turnovers": 0,
            "minutes_played": 0,
            "fouls": 0
        }])
    );

    let (_, box_score) = get(&app, "/api/game/stats?game_id=1").await;
    assert_eq!(box_score, stats);

    let (_, averages) = get(&app, "/api/player/averages?name=LeBron").await;
    assert_eq!(averages["avg_points"], 28.0);
    assert_eq!(averages["avg_fouls"], 0.0);
}

/// Leaderboards hold at most ten players, best first, keyed by the stat.
#[tokio::test]
async fn top_scorers_are_capped_and_sorted() {
    let (app, _) = setup().await;
    add_team(&app, "Home").await;
    add_team(&app, "Away").await;
    add_game(&app, 1, 2).await;

    for i in 1..=12 {
        add_player(&app, &format!("Player{i}"), 1).await;
        let (status, _) = post(
            &app,
            "/api/player/log-game",
            json!({"game_id": 1, "player_id": i, "points": i * 3, "rebounds": 1, "assists": 1}),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, top) = get(&app, "/api/players/top/points").await;
    assert_eq!(status, StatusCode::OK);

    let top = top.as_array().unwrap();
    assert_eq!(top.len(), 10);
    assert_eq!(top[0], json!({"player_id": 12, "name": "Player12", "avg_points": 36.0}));
    let averages: Vec<f64> = top.iter().map(|p| p["avg_points"].as_f64().unwrap()).collect();
    assert!(averages.windows(2).all(|w| w[0] >= w[1]));

    let (_, steals) = get(&app, "/api/players/top/steals").await;
    assert_eq!(steals[0]["avg_steals"], 0.0);
}

/// A single trade moves the player; unknown names are a 404.
#[tokio::test]
async fn trade_single_player() {
    let (app, _) = setup().await;
    add_team(&app, "Bucks").await;
    add_team(&app, "Lakers").await;
    add_player(&app, "Dame", 1).await;

    let (status, body) = post(
        &app,
        "/api/player/trade",
        json!({"player_name": "Dame", "team_name": "Lakers"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));

    let (_, roster) = get(&app, "/api/team/roster?team_name=Lakers").await;
    assert_eq!(roster, json!([{"player_id": 1, "name": "Dame", "position": "SF", "age": 39}]));

    let (status, body) = post(
        &app,
        "/api/player/trade",
        json!({"player_name": "Ghost", "team_name": "Lakers"}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Player 'Ghost' not found"}));
}

/// A multi-player trade applies the known names and reports the rest.
#[tokio::test]
async fn trade_multiple_players_skips_unknown_names() {
    let (app, _) = setup().await;
    add_team(&app, "Bucks").await;
    add_team(&app, "Lakers").await;
    add_player(&app, "A", 1).await;
    add_player(&app, "B", 1).await;

    let (status, body) = post(
        &app,
        "/api/players/trade",
        json!({"player_names": ["A", "Ghost", "B"], "team_name": "Lakers"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok", "traded": ["A", "B"], "skipped": ["Ghost"]}));

    let (_, roster) = get(&app, "/api/team/roster?team_name=Lakers").await;
    assert_eq!(roster.as_array().unwrap().len(), 2);

    let (status, _) = post(
        &app,
        "/api/players/trade",
        json!({"player_names": ["A"], "team_name": "Nowhere"}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Foreign key violations surface as a generic 500 and leave no row.
#[tokio::test]
async fn player_for_unknown_team_is_rejected() {
    let (app, pool) = setup().await;

    let (status, body) = post(
        &app,
        "/api/player",
        json!({"name": "Nobody", "height": 200, "weight": 100, "age": 20, "position": "C", "team_id": 999}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Internal server error"}));
    assert_eq!(count(&pool, "Player").await, 0);
}

/// Coaches and games can be created, read back through their team and edited.
#[tokio::test]
async fn coaches_and_games_by_team() {
    let (app, _) = setup().await;
    add_team(&app, "Lakers").await;
    add_team(&app, "Suns").await;
    add_game(&app, 2, 1).await;

    let (status, _) = post(
        &app,
        "/api/coach",
        json!({"name": "JJ Redick", "salary": 8000000, "team_id": 1}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = put(
        &app,
        "/api/coach",
        json!({"coach_id": 1, "column": "Salary", "new_value": 9000000}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, coaches) = get(&app, "/api/team/coach?team_name=Lakers").await;
    assert_eq!(
        coaches,
        json!([{"coach_id": 1, "name": "JJ Redick", "salary": 9000000, "team_id": 1}])
    );

    let (status, _) = put(
        &app,
        "/api/game",
        json!({"game_id": 1, "column": "AwayScore", "new_value": 120}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, games) = get(&app, "/api/team/games?team_name=Lakers").await;
    assert_eq!(
        games,
        json!([{
            "game_id": 1,
            "date": "2024-10-22",
            "location": "Crypto.com Arena",
            "home_team_id": 2,
            "away_team_id": 1,
            "home_score": 110,
            "away_score": 120
        }])
    );

    let (_, on_date) = get(&app, "/api/games?date=2024-10-22").await;
    assert_eq!(on_date, games);

    let (status, body) = get(&app, "/api/games?date=yesterday").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid value for 'date'"));
}

/// An explicit null `new_value` clears a nullable team column.
#[tokio::test]
async fn null_team_id_releases_player_and_coach() {
    let (app, _) = setup().await;
    add_team(&app, "Lakers").await;
    add_player(&app, "LeBron", 1).await;
    let (status, _) = post(
        &app,
        "/api/coach",
        json!({"name": "JJ Redick", "salary": 8000000, "team_id": 1}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = put(
        &app,
        "/api/player",
        json!({"player_id": 1, "column": "TeamID", "new_value": null}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));

    let (_, players) = get(&app, "/api/player/search?name=LeBron").await;
    assert_eq!(players[0]["team_id"], Value::Null);
    let (_, roster) = get(&app, "/api/team/roster?team_name=Lakers").await;
    assert_eq!(roster, json!([]));

    let (status, _) = put(
        &app,
        "/api/coach",
        json!({"coach_id": 1, "column": "TeamID", "new_value": null}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (_, coaches) = get(&app, "/api/team/coach?team_name=Lakers").await;
    assert_eq!(coaches, json!([]));

    // NOT NULL columns still refuse it
    let (status, body) = put(
        &app,
        "/api/player",
        json!({"player_id": 1, "column": "Age", "new_value": null}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid value for 'Age'"));
}

/// Whole-number floats are accepted for integer fields.
#[tokio::test]
async fn integral_floats_are_accepted() {
    let (app, _) = setup().await;
    add_team(&app, "Lakers").await;

    let (status, _) = post(
        &app,
        "/api/player",
        json!({"name": "Anthony Davis", "height": 208.0, "weight": 115, "age": 31.0, "position": "PF", "team_id": 1}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, players) = get(&app, "/api/player/search?name=Anthony%20Davis").await;
    assert_eq!(players[0]["height"], 208);
    assert_eq!(players[0]["age"], 31);

    let (status, body) = put(
        &app,
        "/api/player",
        json!({"player_id": 1, "column": "Weight", "new_value": 115.5}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid value for 'Weight'"));
}

/// Incomplete updates and box scores are rejected before anything is written.
#[tokio::test]
async fn incomplete_update_and_log_game_write_nothing() {
    let (app, pool) = setup().await;
    add_team(&app, "Lakers").await;
    add_team(&app, "Suns").await;
    add_player(&app, "LeBron", 1).await;
    add_game(&app, 1, 2).await;

    let (status, body) = put(&app, "/api/player", json!({"player_id": 1, "column": "Height"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Missing fields: new_value"}));

    let (_, players) = get(&app, "/api/player/search?name=LeBron").await;
    assert_eq!(players[0]["height"], 206);

    let (status, body) = post(
        &app,
        "/api/player/log-game",
        json!({"game_id": 1, "player_id": 1, "points": 30}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Missing fields: rebounds, assists"}));
    assert_eq!(count(&pool, "PlayerGameStatistics").await, 0);
}
