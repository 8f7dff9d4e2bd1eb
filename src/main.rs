use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

use portfolio_api::{
    constants::{APP_VERSION, START_TIME},
    db::{seed::bootstrap, sqlite::{create_pool, run_migrations}},
    graceful_shutdown::shutdown_signal,
    middlewares::auth::AuthMiddleware,
    routes::configure_routes,
    settings::AppConfig,
    telemetry::init_tracing,
    web::cors::cors_layer,
    AppState,
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::new().context("Configuration error")?;

    init_tracing(&config);
    tracing::info!("Loaded configuration: {:?}", config);
    let _ = *START_TIME;

    let pool = create_pool(&config)
        .await
        .context("Failed to create database connection pool")?;
    run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;
    bootstrap(&config, &pool)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to seed database: {}", e))?;

    let app_state = web::Data::new(
        AppState::new(&config, pool.clone())
    );

    let server_addr = config.server_addr();

    tracing::info!(
        "🚀 Starting {} v{} on {} ({})",
        config.name,
        APP_VERSION,
        server_addr,
        config.env
    );

    let server_config = config.clone();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(NormalizePath::trim())
            .wrap(AuthMiddleware)
            .wrap(TracingLogger::default())
            .wrap(cors_layer(&server_config))
            .configure(configure_routes)
    })
    .workers(config.worker_count)
    .disable_signals()
    .bind(&server_addr)
    .with_context(|| format!("Failed to bind {}", server_addr))?
    .run();

    tokio::spawn(shutdown_signal(server.handle()));

    server.await?;

    pool.close().await;
    tracing::info!("Database pool closed, bye");
    Ok(())
}
