pub mod api;
pub mod awareness;
pub mod config;
pub mod db;
pub mod enrich;
pub mod models;
pub mod triage;

use std::sync::Arc;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::api::{AppContext, ServerError};
use crate::config::{Config, ConfigError};
use crate::db::{DatabaseError, SqliteAuditLog};

#[derive(Error, Debug)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    #[error("Failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),

    #[error(transparent)]
    Server(#[from] ServerError),
}

/// Initialise logging, open the audit database and serve until Ctrl-C.
pub fn run() -> Result<(), StartupError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let config = Config::from_env()?;
    let audit = SqliteAuditLog::open(&config.database_path)?;
    tracing::info!(path = %config.database_path.display(), "Audit database ready");

    // Blocking HTTP clients inside the context must be built and dropped
    // outside the async runtime.
    let ctx = AppContext::from_config(&config, Arc::new(audit));

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let result = runtime.block_on(api::run(&config, ctx.clone()));
    drop(runtime);
    drop(ctx);

    result.map_err(StartupError::from)
}
