//! Admin Console - Main Entry Point
//!
//! Runs the headless user administration walkthrough.

use admin_console::app::application::run_app;
use admin_console::utils::config_store::{default_config_path, load_config};

fn main() -> anyhow::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting admin console...");

    let path = default_config_path()?;
    let config = load_config(&path)?;
    tracing::info!(path = %path.display(), page_size = config.page_size, locale = ?config.locale, "Configuration loaded");

    run_app(config)
}
