//! StudyBuddy Fixture Server
//!
//! Run with: cargo run --bin studybuddy-api [-- path/to/config.toml]
//!
//! # Configuration
//!
//! Read from the file given as first argument, otherwise from the default
//! locations (`~/.config/studybuddy/config.toml`, `/etc/studybuddy/config.toml`,
//! `./config.toml`). Environment variables override the file:
//! - `STUDYBUDDY_SERVER_HOST`: Host to bind to (default: 127.0.0.1)
//! - `STUDYBUDDY_SERVER_PORT`: Port to listen on (default: 5000)
//! - `STUDYBUDDY_STATIC_DIR`: Built UI to serve alongside the API (optional)
//! - `STUDYBUDDY_LOG_LEVEL` / `STUDYBUDDY_LOG_FORMAT`: Log output
//! - `RUST_LOG`: Full filter directive, takes precedence over the level

use std::path::PathBuf;

use studybuddy::config::Config;
use studybuddy::server::{serve, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = Config::resolve(config_path.as_deref())?;

    init_tracing(&config);

    tracing::info!("Starting StudyBuddy fixture server v{}", env!("CARGO_PKG_VERSION"));

    let server_config = config.server_config();
    match &server_config.static_dir {
        Some(dir) => tracing::info!("UI directory: {:?}", dir),
        None => tracing::info!("No UI directory configured, serving the API only"),
    }

    serve(AppState::new(server_config)).await?;

    tracing::info!("StudyBuddy fixture server stopped");
    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.logging.filter_directive().into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
