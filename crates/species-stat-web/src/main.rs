//! Species Stat web server.

use anyhow::{Context, Result};
use clap::Parser;
use species_stat_core::config::Config;
use species_stat_store::SurveyStore;
use species_stat_web::{create_router, AppState};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "species-stat-web")]
#[command(about = "Species Stat - follow-list survey API")]
struct Cli {
    /// Config file (default: species-stat.toml in this or a parent directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Path to SQLite database
    #[arg(short, long)]
    db: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => Config::from_path(path)?,
        None => Config::load()?,
    };
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(db) = cli.db {
        config.database.path = db;
    }

    let taxonomy = config
        .load_taxonomy()
        .context("Invalid taxonomy, refusing to start")?;

    if let Some(parent) = config.database.path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    let store = SurveyStore::open(&config.database.path)
        .with_context(|| format!("Failed to open {}", config.database.path.display()))?;

    let state = AppState::new(taxonomy, store).with_max_notes(config.summary.max_notes);
    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!(%addr, db = %config.database.path.display(), "Starting species-stat web server");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
