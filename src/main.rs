use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use anyhow::Context;
use once_cell::sync::Lazy;
use resume_api::{
    constants::START_TIME,
    db::{postgres::create_pool, schema::init_schema},
    graceful_shutdown::shutdown_signal,
    routes::configure_routes,
    settings::AppConfig,
    telemetry::init_tracing,
    web::cors::build_cors,
    AppState
};
use tracing_actix_web::TracingLogger;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    Lazy::force(&START_TIME);

    let config = AppConfig::new();
    init_tracing(config.as_ref().map(|c| c.log_format).unwrap_or_default());

    let config = match config {
        Ok(cfg) => {
            tracing::info!("Loaded configuration: {:?}", cfg);
            cfg
        },
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let pool = create_pool(&config)
        .await
        .context("Failed to create database connection pool")?;

    init_schema(&pool)
        .await
        .context("Failed to create resume tables")?;

    let app_state = web::Data::new(AppState::new(pool.clone()));

    let server_addr = config.server_addr();

    tracing::info!(
        "Starting {} v{} on {}",
        config.name,
        env!("CARGO_PKG_VERSION"),
        server_addr
    );

    let server_config = config.clone();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(build_cors(&server_config))
            .wrap(NormalizePath::trim())
            .wrap(TracingLogger::default())
            .configure(configure_routes)
    })
    .workers(config.worker_count)
    .bind(&server_addr)
    .with_context(|| format!("Failed to bind {server_addr}"))?
    .run();

    let result = tokio::select! {
        res = server => res.context("HTTP server error"),
        _ = shutdown_signal() => Ok(()),
    };

    pool.close().await;
    tracing::info!("Database pool closed.");

    result
}
