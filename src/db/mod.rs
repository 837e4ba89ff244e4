use sqlx::sqlite::{SqliteArguments, SqlitePool, SqliteQueryResult, SqliteRow};
use sqlx::{Arguments, FromRow};

use crate::models::UpdateField;

pub mod coaches;
pub mod games;
pub mod players;
pub mod reports;
pub mod schema;
pub mod statistics;
pub mod teams;
pub mod trades;

/// A positional query parameter.
///
/// Values are always bound through `?` placeholders, never spliced into SQL text.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Integer(value)
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        SqlValue::Real(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<chrono::NaiveDate> for SqlValue {
    fn from(value: chrono::NaiveDate) -> Self {
        SqlValue::Text(value.format("%Y-%m-%d").to_string())
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(SqlValue::Null)
    }
}

fn arguments<'q>(params: &[SqlValue]) -> Result<SqliteArguments<'q>, sqlx::Error> {
    let mut args = SqliteArguments::default();
    for param in params {
        let added = match param {
            SqlValue::Null => args.add(None::<i64>),
            SqlValue::Integer(v) => args.add(*v),
            SqlValue::Real(v) => args.add(*v),
            SqlValue::Text(v) => args.add(v.clone()),
        };
        added.map_err(sqlx::Error::Encode)?;
    }
    Ok(args)
}

/// Run a statement that returns no rows (insert/update/delete/DDL).
///
/// Each call is its own implicit transaction and is committed on return.
pub async fn execute(
    pool: &SqlitePool,
    sql: &str,
    params: &[SqlValue],
) -> Result<SqliteQueryResult, sqlx::Error> {
    sqlx::query_with(sql, arguments(params)?)
        .execute(pool)
        .await
}

/// Run a read-only query and decode every row, in order.
pub async fn fetch_all<T>(
    pool: &SqlitePool,
    sql: &str,
    params: &[SqlValue],
) -> Result<Vec<T>, sqlx::Error>
where
    T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    sqlx::query_as_with::<_, T, _>(sql, arguments(params)?)
        .fetch_all(pool)
        .await
}

/// Run a read-only query and decode the first row, if any.
pub async fn fetch_optional<T>(
    pool: &SqlitePool,
    sql: &str,
    params: &[SqlValue],
) -> Result<Option<T>, sqlx::Error>
where
    T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    sqlx::query_as_with::<_, T, _>(sql, arguments(params)?)
        .fetch_optional(pool)
        .await
}

/// First column of the first row. Fails with `RowNotFound` on an empty result.
pub async fn fetch_scalar<T>(
    pool: &SqlitePool,
    sql: &str,
    params: &[SqlValue],
) -> Result<T, sqlx::Error>
where
    (T,): for<'r> FromRow<'r, SqliteRow>,
    T: Send + Unpin,
{
    sqlx::query_scalar_with::<_, T, _>(sql, arguments(params)?)
        .fetch_one(pool)
        .await
}

/// First column of every row.
pub async fn fetch_column<T>(
    pool: &SqlitePool,
    sql: &str,
    params: &[SqlValue],
) -> Result<Vec<T>, sqlx::Error>
where
    (T,): for<'r> FromRow<'r, SqliteRow>,
    T: Send + Unpin,
{
    sqlx::query_scalar_with::<_, T, _>(sql, arguments(params)?)
        .fetch_all(pool)
        .await
}

/// Execute the same statement once per row inside a single transaction.
///
/// Either every row is written or, if any row fails, none are.
pub async fn bulk_insert(
    pool: &SqlitePool,
    sql: &str,
    rows: &[Vec<SqlValue>],
) -> Result<u64, sqlx::Error> {
    if rows.is_empty() {
        return Ok(0);
    }

    let mut tx = pool.begin().await?;
    let mut written = 0;
    for row in rows {
        written += sqlx::query_with(sql, arguments(row)?)
            .execute(&mut *tx)
            .await?
            .rows_affected();
    }
    tx.commit().await?;

    Ok(written)
}

/// Apply a single-column update. `keys` identify the row and are bound after
/// the new value, in the order the statement expects.
pub(crate) async fn apply_update<F: UpdateField>(
    pool: &SqlitePool,
    field: &F,
    keys: &[SqlValue],
) -> Result<u64, sqlx::Error> {
    let mut params = Vec::with_capacity(keys.len() + 1);
    params.push(field.value());
    params.extend_from_slice(keys);

    let result = execute(pool, field.statement(), &params).await?;
    tracing::debug!(column = field.column(), rows = result.rows_affected(), "applied update");
    Ok(result.rows_affected())
}

#[cfg(test)]
pub(crate) mod test_support {
    use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

    /// In-memory database with the league schema. One connection, since every
    /// `:memory:` connection is its own database.
    pub async fn pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory sqlite");
        super::schema::create_all_tables(&pool)
            .await
            .expect("schema");
        pool
    }

    pub async fn add_team(pool: &SqlitePool, name: &str) -> i64 {
        crate::db::teams::add_team(
            pool,
            &crate::models::NewTeam {
                name: name.to_string(),
                city: format!("{name} City"),
                division: "Central".to_string(),
                conference: "East".to_string(),
            },
        )
        .await
        .expect("team")
    }

    /// Adds a guard with fixed measurements.
    pub async fn add_player(pool: &SqlitePool, name: &str, team_id: i64) -> i64 {
        crate::db::players::add_player(
            pool,
            &crate::models::NewPlayer {
                name: name.to_string(),
                height: 198,
                weight: 95,
                age: 26,
                position: "G".to_string(),
                team_id,
            },
        )
        .await
        .expect("player")
    }

    pub async fn add_game(pool: &SqlitePool, home_team_id: i64, away_team_id: i64) -> i64 {
        crate::db::games::add_game(
            pool,
            &crate::models::NewGame {
                date: chrono::NaiveDate::from_ymd_opt(2024, 10, 22).expect("date"),
                location: "Arena".to_string(),
                home_team_id,
                away_team_id,
                home_score: 100,
                away_score: 98,
            },
        )
        .await
        .expect("game")
    }

    /// Logs points/rebounds/assists for a player, the rest of the line zeroed.
    pub async fn log(pool: &SqlitePool, game_id: i64, player_id: i64, points: i64, rebounds: i64, assists: i64) {
        crate::db::statistics::add_player_statistics(
            pool,
            &crate::models::NewPlayerStatistics {
                game_id,
                player_id,
                points,
                rebounds,
                assists,
                blocks: 0,
                steals: 0,
                turnovers: 0,
                minutes_played: 0,
                fouls: 0,
            },
        )
        .await
        .expect("statistics");
    }
}
