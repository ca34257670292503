//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tableau metadata extractor CLI
#[derive(Parser, Debug)]
#[command(name = "tableau-extractor")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Recipe file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Inline recipe JSON, takes precedence over --config
    #[arg(long, global = true)]
    pub config_json: Option<String>,

    /// Registered extractor to run
    #[arg(short, long, global = true, default_value = "tableau")]
    pub extractor: String,

    /// Output format for status messages
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract dashboards as JSON lines
    Extract {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Abort the run after this many seconds
        #[arg(long)]
        timeout: Option<u64>,
    },

    /// Validate the recipe and sign in
    Check,

    /// Validate the recipe only (no network)
    Validate,

    /// Show extractor description and sample recipe
    Info,

    /// List registered extractors
    List,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one message per line)
    Json,
    /// Human-readable output
    Pretty,
}
