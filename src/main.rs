//! SmartHealth Server
//!
//! Serves the built dashboard frontend.
//!
//! Run with: cargo run --bin smarthealth
//!
//! Configuration is read from `config.toml` (see `smarthealth-cli config`)
//! with `SMARTHEALTH_*` environment overrides. `RUST_LOG` takes precedence
//! over the configured log level.

use smarthealth::config::{Config, LoggingConfig};
use smarthealth::server::{serve, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_default();
    init_tracing(&config.logging);

    tracing::info!("Starting SmartHealth server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Static directory: {:?}", config.server.static_dir);

    serve(AppState::new(config.server)).await?;

    tracing::info!("SmartHealth server stopped");
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&logging.level));

    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
