//! CLI argument definitions using clap
//!
//! Commands:
//! - snapvault repl [--config <path>] [--format text|json]
//! - snapvault run <script> [--config <path>] [--format text|json]

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// snapvault - An in-memory, branching version-history store for named files
#[derive(Parser, Debug)]
#[command(name = "snapvault")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Read commands interactively from stdin
    Repl {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Execute every command in a script file and exit
    Run {
        /// File with one command per line
        script: PathBuf,

        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// How command results are printed.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per command
    Json,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
