//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Iceberg sink writer configuration CLI
#[derive(Parser, Debug)]
#[command(name = "iceberg-sink-config")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a writer config and print it
    Resolve {
        /// Parameter file (YAML or JSON)
        #[arg(short, long)]
        params: Option<PathBuf>,

        /// Storage options file (YAML or JSON)
        #[arg(short, long)]
        storage: Option<PathBuf>,

        /// Override a parameter (KEY=VALUE), may be repeated
        #[arg(long = "set", value_name = "KEY=VALUE")]
        overrides: Vec<String>,
    },

    /// List recognized writer parameters
    Keys,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one message per line)
    Json,
    /// Human-readable output
    Pretty,
}
