mod adapters;
mod application;
mod domain;
mod services;

use std::{sync::Arc, time::Duration};

use adapters::{
    repositories::PgNoticeRepository,
    router::{build_router, cors_layer},
    state::AppState,
};
use domain::config::server::{ConfigError, ServerConfig};
use services::{LocalMediaStorage, MediaError};
use thiserror::Error;
use tracing::{error, info, warn};

/// Conditions that stop the service before (or while) serving.
#[derive(Debug, Error)]
enum StartupError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to connect to the database: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("Failed to migrate database: {0}")]
    Migrate(#[source] sqlx::Error),

    #[error("Failed to create uploads directory: {0}")]
    UploadDir(#[source] MediaError),

    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "notice_board=info,tower_http=info".into()),
        )
        .init();

    if let Err(e) = run().await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = ServerConfig::from_env()?;

    info!("Connecting to database...");
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(30))
        .connect(&config.database_url)
        .await
        .map_err(StartupError::Connect)?;
    info!("Database connection established");

    let notice_repo = PgNoticeRepository::new(pool);
    notice_repo
        .ensure_schema()
        .await
        .map_err(StartupError::Migrate)?;

    let media_storage = LocalMediaStorage::new(config.upload_dir.clone(), &config.public_base_url)
        .await
        .map_err(StartupError::UploadDir)?;
    info!(
        "Serving uploads from {} as {}/uploads",
        media_storage.upload_dir().display(),
        config.public_base_url
    );

    let cors = cors_layer(config.cors_allowed_origins.as_deref())?;
    let upload_dir = media_storage.upload_dir().to_path_buf();

    let app_state = AppState {
        notice_repository: Arc::new(notice_repo),
        media_storage: Arc::new(media_storage),
    };
    let router = build_router(app_state, &upload_dir, cors);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(|source| StartupError::Bind {
            address: address.clone(),
            source,
        })?;

    info!("Server listening on {}", address);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Cannot listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Cannot listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down..."),
        _ = terminate => info!("Received SIGTERM, shutting down..."),
    }
}
