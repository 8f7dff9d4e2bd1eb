//! Creates the configured admin account, or resets its password and role if it exists.
//!
//! Reads the same configuration as the server (`config/`, `.env`, `APP_*`), so
//! `APP_ADMIN__PASSWORD=... cargo run --bin create-admin` sets a new password.

use anyhow::Context;

use portfolio_api::{
    auth::password::hash_password,
    db::sqlite::{create_pool, run_migrations},
    entities::user::UserInsert,
    repositories::{sqlx_repo::SqlxUserRepo, user::UserRepository},
    settings::AppConfig,
    telemetry::init_tracing,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::new().context("Configuration error")?;
    init_tracing(&config);

    let admin = &config.admin;

    tracing::info!("Initializing database at {}", config.database_url);
    let pool = create_pool(&config).await.context("Failed to open database")?;
    run_migrations(&pool).await.context("Failed to run database migrations")?;

    let users = SqlxUserRepo::new(pool.clone());
    let existed = users
        .get_user_by_email(&admin.email)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to look up {}: {}", admin.email, e))?
        .is_some();

    let password_hash = hash_password(&admin.password)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?;

    users
        .upsert_admin(&UserInsert::admin(&admin.email, &admin.name, password_hash))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to write admin account: {}", e))?;

    if existed {
        tracing::info!("✅ Admin account {} updated (password reset, role admin)", admin.email);
    } else {
        tracing::info!("✅ Admin account {} created", admin.email);
    }
    tracing::warn!("Change the admin password after your first login");

    pool.close().await;
    Ok(())
}
