//! Shapeshift server binary

use anyhow::{Context, Result};
use app_core::branding::{endpoint_summary, APP_NAME, APP_VERSION};
use app_core::{ProductCatalog, StaticCatalog, SystemClock, TracingSink};
use app_server::config::parse_mode_override;
use app_server::{AppState, ServerConfig};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "shapeshift")]
#[command(about = "Server-driven storefront that changes with the clock", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file path (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on, e.g. 0.0.0.0:8080
    #[arg(short, long)]
    bind: Option<String>,

    /// Pin every request to one mode (late_night, morning, day, flash_sale,
    /// afternoon, evening, night), or `auto` to follow the clock
    #[arg(short, long)]
    mode: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ServerConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    if let Some(bind) = cli.bind {
        config = config.with_bind_address(bind);
    }
    if let Some(mode) = cli.mode.as_deref() {
        config = config.with_mode_override(parse_mode_override(mode)?);
    }

    let default_filter = if cli.verbose {
        "debug"
    } else {
        config.log_filter.as_str()
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let catalog = Arc::new(StaticCatalog::new());
    info!("{} v{}", APP_NAME, APP_VERSION);
    info!("Catalog loaded with {} products", catalog.all().len());
    match config.mode_override {
        Some(mode) => info!("Mode pinned to {}", mode),
        None => info!("Mode follows the local clock"),
    }
    for endpoint in endpoint_summary() {
        info!("  {}", endpoint);
    }

    let state = AppState::new(catalog, Arc::new(SystemClock), Arc::new(TracingSink))
        .with_mode_override(config.mode_override);

    app_server::serve(&config, state).await?;
    Ok(())
}
