//! mockdeck - A terminal admin console for user records and stub mappings
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;

use mockdeck_app::config;
use mockdeck_core::prelude::*;

/// A terminal admin console for user records and WireMock stub mappings
#[derive(Parser, Debug)]
#[command(name = "mockdeck")]
#[command(about = "Admin console for user records and WireMock stub mappings", long_about = None)]
struct Args {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the user API base URL
    #[arg(long, value_name = "URL")]
    user_api: Option<String>,

    /// Override the admin API base URL
    #[arg(long, value_name = "URL")]
    admin_api: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since TUI owns stdout)
    mockdeck_core::logging::init()?;

    let mut settings = config::load_settings(args.config.as_deref());
    if let Some(url) = args.user_api {
        settings.backend.user_api_url = url;
    }
    if let Some(url) = args.admin_api {
        settings.backend.admin_api_url = url;
    }

    info!("mockdeck starting");
    info!(
        "user_api={} admin_api={} page_size={}",
        settings.backend.user_api_url, settings.backend.admin_api_url, settings.ui.page_size
    );

    let result = mockdeck_tui::run(settings).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("mockdeck exiting");
    result
}
