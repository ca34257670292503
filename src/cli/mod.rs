//! CLI module
//!
//! Command-line interface for running extractors.
//!
//! # Commands
//!
//! - `extract` - Run an extraction, writing JSON lines
//! - `check` - Validate the recipe and sign in
//! - `validate` - Validate the recipe without network access
//! - `info` - Describe an extractor
//! - `list` - List registered extractors

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
