//! Engram CLI - learn binary patterns and recall them from noisy queries.
//!
//! Patterns are plain text grids, one line per row (`#` on, `.` off).
//! Nothing is persisted between runs: every invocation learns its slots
//! from scratch.

mod commands;
mod config;
mod patterns;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "engram")]
#[command(author, version, about = "Engram - Hopfield-style associative memory", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default engram.toml
    Init {
        /// Project directory (default: current directory)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Learn the slot patterns, then recall and match a query
    Recall {
        /// Pattern file for a reference slot (repeat, in slot order)
        #[arg(short, long = "slot", required = true)]
        slots: Vec<PathBuf>,

        /// Query pattern file
        #[arg(short, long)]
        query: PathBuf,

        /// Print the structured report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Find the slot a query matches, without learning
    Match {
        /// Pattern file for a reference slot (repeat, in slot order)
        #[arg(short, long = "slot", required = true)]
        slots: Vec<PathBuf>,

        /// Query pattern file
        #[arg(short, long)]
        query: PathBuf,
    },

    /// Learn the slot patterns and summarize the weight matrix
    Weights {
        /// Pattern file for a reference slot (repeat, in slot order)
        #[arg(short, long = "slot", required = true)]
        slots: Vec<PathBuf>,

        /// Print the full matrix as JSON
        #[arg(long)]
        json: bool,
    },
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
        Commands::Recall { slots, query, json } => commands::recall::run(&slots, &query, json),
        Commands::Match { slots, query } => commands::matching::run(&slots, &query),
        Commands::Weights { slots, json } => commands::weights::run(&slots, json),
    }
}
