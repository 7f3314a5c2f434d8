pub mod backend;
pub mod chat;
pub mod cli;
pub mod config;
pub mod render;
pub mod tui;

pub use cli::Cli;
pub use config::AppConfig;

use backend::HttpBackend;
use std::error::Error;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};

pub async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    init_tracing();
    info!("Starting mentor-chat");

    let config_path = cli.config.as_deref().map(Path::new);
    let file_config = AppConfig::load(config_path)?;
    if let Some(path) = config_path {
        info!(path = %path.display(), "Loaded configuration from file");
    } else {
        info!("Loaded configuration using default path or defaults");
    }

    let endpoint = cli
        .backend_url
        .clone()
        .unwrap_or(file_config.backend_url);
    debug!(endpoint = %endpoint, "Creating backend client");
    let backend = Arc::new(HttpBackend::new(endpoint.clone()));

    tui::run_chat(backend, &endpoint).await?;
    info!("Chat session finished");
    Ok(())
}

fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        // The TUI owns stdout; logs go to stderr and stay off unless
        // RUST_LOG asks for them.
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_level(true)
            .init();
    });
}
