//! GetiCard Server: digital business card API.
//!
//! Main entry point that loads configuration, initializes logging, and
//! starts the HTTP server.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use geticard_core::config::AppConfig;
use geticard_core::error::AppError;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "geticard-server", version, about = "GetiCard business card API server")]
struct Args {
    /// Directory holding `default.toml` and per-environment overlays.
    #[arg(long, env = "GETICARD_CONFIG_DIR", default_value = "config")]
    config_dir: String,

    /// Environment overlay to apply (`{config_dir}/{env}.toml`).
    #[arg(long, env = "GETICARD_ENV", default_value = "development")]
    env: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let config = match AppConfig::load(&args.config_dir, &args.env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(config_dir = %args.config_dir, env = %args.env, "Configuration loaded");

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    geticard_api::run_server(config).await
}
