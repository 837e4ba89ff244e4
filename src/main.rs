use std::str::FromStr;

use league_stats_api::{config::Config, db::schema, routes};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting league stats server...");

    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePool::connect_with(options).await?;

    tracing::info!("Database connection established.");

    if config.reset_schema {
        schema::reset(&pool).await?;
    } else {
        schema::create_all_tables(&pool).await?;
    }

    let app = routes::router(pool);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
