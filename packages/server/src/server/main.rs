// Main entry point for the staffing API server

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use server_core::kernel::{
    ChangeFeedConsumer, LocalBlobStorage, PgStaffingStore, ServerDeps, TriggerRouter,
};
use server_core::server::auth::JwtService;
use server_core::server::{build_app, AppState};
use server_core::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Plantao Saude staffing API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Connect to database
    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    // Run migrations
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Migrations complete");

    // Wire dependencies
    let store = Arc::new(PgStaffingStore::new(pool.clone()));
    let files = Arc::new(LocalBlobStorage::new(
        &config.files_dir,
        &config.public_base_url,
        &config.url_signing_secret,
    ));
    let pdf_url_ttl = Duration::from_secs(config.pdf_url_ttl_days as u64 * 86_400);
    let server_deps = Arc::new(ServerDeps::new(store, files.clone(), pdf_url_ttl));

    // Start the change-feed consumer
    let nats_client = async_nats::connect(&config.nats_url)
        .await
        .context("Failed to connect to NATS")?;
    tracing::info!("NATS connected");

    let router = Arc::new(TriggerRouter::new((*server_deps).clone()));
    let consumer = ChangeFeedConsumer::new(router);
    tokio::spawn(async move {
        if let Err(error) = consumer.run(nats_client).await {
            tracing::error!(error = %error, "Change feed consumer exited");
        }
    });

    // Build application
    let jwt_service = Arc::new(JwtService::new(&config.jwt_secret));
    let app = build_app(AppState {
        db_pool: pool,
        server_deps,
        jwt_service,
        files,
    });

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
