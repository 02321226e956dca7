//! cfgsnap CLI
//!
//! Command-line interface for taking, listing, diffing and exporting
//! configuration snapshots

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;

#[derive(Debug, Parser)]
#[command(name = "cfgsnap")]
#[command(about = "cfgsnap - Configuration snapshot and diff tool", long_about = None)]
struct Cli {
    /// Configuration file (default: ./cfgsnap.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Snapshot directory (overrides the configuration file)
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Capture the live configuration as a new snapshot
    Take(commands::take::TakeArgs),
    /// List snapshots with their change counts
    List(commands::list::ListArgs),
    /// Show the differences between two snapshots
    Diff(commands::diff::DiffArgs),
    /// Print a config:set script replaying the differences
    Export(commands::export::ExportArgs),
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let file = config::load(cli.config.as_deref())?;
    let settings = config::Settings::resolve(file, cli.dir)?;
    cfgsnap_core::logging_facility::init(settings.log_profile);

    match cli.command {
        Commands::Take(args) => commands::take::execute(args, &settings),
        Commands::List(args) => commands::list::execute(args, &settings),
        Commands::Diff(args) => commands::diff::execute(args, &settings),
        Commands::Export(args) => commands::export::execute(args, &settings),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
