//! collab-resolve - resolve user ids through the configured user directory
//!
//! Run with:
//! ```bash
//! cargo run -p collab-client -- a1 b2
//! ```
//!
//! Configuration is loaded from environment variables (see `CollabConfig`).
//! Resolved records are printed to stdout as JSON; logs go to stderr.

use std::sync::Arc;

use collab_client::{CollabClient, StaticRoomMembers};
use collab_common::{
    try_init_tracing_with_config, AppError, AppResult, CollabConfig, ConfigError, TracingConfig,
};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Configuration decides the log format, so load it before tracing starts
    let config = CollabConfig::from_env();
    if let Err(e) = try_init_tracing_with_config(tracing_config(&config)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run(config).await {
        error!(error = %e, code = e.error_code(), "collab-resolve failed");
        std::process::exit(1);
    }
}

/// Log settings for the loaded environment, defaults when loading failed
fn tracing_config(config: &Result<CollabConfig, ConfigError>) -> TracingConfig {
    let tracing = match config {
        Ok(config) => TracingConfig::for_environment(config.app.env),
        Err(_) => TracingConfig::default(),
    };
    tracing.with_stderr()
}

async fn run(config: Result<CollabConfig, ConfigError>) -> AppResult<()> {
    let config = config.map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    let user_ids: Vec<String> = std::env::args().skip(1).collect();
    if user_ids.is_empty() {
        return Err(AppError::invalid_input("usage: collab-resolve <user-id>..."));
    }

    info!(
        app = %config.app.name,
        env = ?config.app.env,
        "Configuration loaded"
    );

    let client = CollabClient::from_config(&config, Arc::new(StaticRoomMembers::new()))?;
    let users = client.resolve_users(&user_ids).await;

    let output = serde_json::to_string_pretty(&users).map_err(AppError::internal)?;
    println!("{output}");

    Ok(())
}
