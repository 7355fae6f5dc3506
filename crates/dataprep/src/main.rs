//! Dataprep CLI - normalize image datasets into fixed-size RGB JPEGs.
//!
//! Every image in each input directory is converted to RGB, stretched to a
//! `size × size` square and written as `<stem>.jpg` into a sibling directory
//! named `<input>_<size>`. Outputs that already exist are skipped, so an
//! interrupted run can simply be started again.
//!
//! # Usage
//!
//! ```bash
//! # Normalize ./data/train and ./data/test to 384×384
//! dataprep run
//!
//! # Custom inputs and size
//! dataprep run ./images/train ./images/val --size 224
//!
//! # View configuration
//! dataprep config show
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;
mod logging;

/// Dataprep - normalize image datasets into fixed-size RGB JPEGs.
#[derive(Parser, Debug)]
#[command(name = "dataprep")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    /// Config file to use instead of the default location
    #[arg(short, long, global = true, env = "DATAPREP_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Normalize the input datasets
    Run(cli::run::RunArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logging isn't initialized yet, so use eprintln for config warnings.
    let config = match &cli.config {
        Some(path) => dataprep_core::Config::load_from(path)?,
        None => match dataprep_core::Config::load() {
            Ok(config) => config,
            Err(e) => {
                eprintln!(
                    "Warning: Failed to load config: {e}\n  \
                     Using default configuration. Check your config file with `dataprep config path`."
                );
                dataprep_core::Config::default()
            }
        },
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("Dataprep v{}", dataprep_core::VERSION);

    // Dispatch to the appropriate command handler
    match cli.command {
        Commands::Run(args) => cli::run::execute(args, config).await,
        Commands::Config(args) => cli::config::execute(args, config, cli.config).await,
    }
}
