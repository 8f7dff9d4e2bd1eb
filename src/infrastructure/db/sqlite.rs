use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;
use std::{str::FromStr, time::Duration};

use crate::settings::AppConfig;

const MAX_CONNECTIONS: u32 = 10;

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

fn pool_options(database_url: &str) -> SqlitePoolOptions {
    if is_in_memory(database_url) {
        // The database lives only as long as its connection, so keep exactly one open forever.
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
    } else {
        SqlitePoolOptions::new().max_connections(MAX_CONNECTIONS)
    }
}

/// Opens the store, creating the database file when needed. Retries with exponential backoff.
pub async fn create_pool(config: &AppConfig) -> Result<SqlitePool, sqlx::Error> {
    let database_url = config.database_url.as_str();
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let max_retries = 5;
    let mut retry_count = 0;
    let mut wait_seconds = 1;

    loop {
        match pool_options(database_url)
            .connect_with(options.clone())
            .await
        {
            Ok(pool) => {
                info!("Database connection established.");
                return Ok(pool);
            }
            Err(e) if retry_count < max_retries => {
                retry_count += 1;
                info!(
                    "Failed to connect to database (attempt {}/{}): {}. Retrying in {}s...",
                    retry_count, max_retries, e, wait_seconds);

                tokio::time::sleep(Duration::from_secs(wait_seconds)).await;

                wait_seconds *= 2;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Applies the embedded migrations in `migrations/`. Already-applied ones are skipped.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Database migrations applied.");
    Ok(())
}
