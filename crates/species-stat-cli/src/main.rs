//! Species Stat CLI - run the survey from a terminal.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "species-stat")]
#[command(author, version, about = "Species Stat - how your follow list compares to the fandom", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default species-stat.toml
    Init {
        /// Project directory (default: current directory)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// List categories and choices with baseline percentages
    Taxonomy,

    /// Import a JSON array of contacts for a subject
    Import {
        /// Subject username
        username: String,

        /// JSON file: [{"username": "...", "icon_url": "..."}]
        file: String,
    },

    /// Record one classification
    Answer {
        /// Subject username
        username: String,

        /// Contact being classified
        contact: String,

        /// Choice name (see `species-stat taxonomy`)
        choice: String,
    },

    /// Show a subject's deviation table and text summary
    Summary {
        /// Subject username
        username: String,

        /// Deviations mentioned in the sentence (default: from config)
        #[arg(short, long)]
        notes: Option<usize>,
    },

    /// Show database statistics
    Stats,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Init { path } => commands::init::run(path),
        Commands::Taxonomy => commands::taxonomy::run(cli.verbose),
        Commands::Import { username, file } => commands::import::run(&username, &file),
        Commands::Answer {
            username,
            contact,
            choice,
        } => commands::answer::run(&username, &contact, &choice),
        Commands::Summary { username, notes } => commands::summary::run(&username, notes),
        Commands::Stats => commands::stats::run(),
    }
}
