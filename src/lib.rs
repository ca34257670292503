// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Tableau Extractor
//!
//! Pulls dashboard metadata out of a Tableau Server site over its REST API.
//! Each workbook becomes a dashboard record, each of its views a chart, and
//! each workbook connection an upstream of every chart's lineage.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tableau_extractor::{Extractor, MemoryEmitter, TableauExtractor};
//!
//! #[tokio::main]
//! async fn main() -> tableau_extractor::Result<()> {
//!     let recipe = serde_json::json!({
//!         "host": "https://server.tableau.com",
//!         "version": "3.12",
//!         "sitename": "testdev550928",
//!         "username": "meteor_user",
//!         "password": "xxxxxxxxxx"
//!     });
//!
//!     let mut extractor = TableauExtractor::new();
//!     extractor.init(&recipe).await?;
//!
//!     let mut emitter = MemoryEmitter::new();
//!     let stats = extractor.extract(&mut emitter).await?;
//!     println!("{} dashboards", stats.dashboards_emitted);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      Extractor Interface                     │
//! │   info()   validate(recipe)   init(recipe)   extract(emit)   │
//! └──────────────────────────────────────────────────────────────┘
//!                                │
//! ┌───────────┬───────────┬──────┴──────┬────────────┬───────────┐
//! │   Auth    │   HTTP    │     API     │  Builder   │   Emit    │
//! ├───────────┼───────────┼─────────────┼────────────┼───────────┤
//! │ Sign-in   │ GET/POST  │ Workbooks   │ URNs       │ Memory    │
//! │ Session   │ Timeout   │ Detail      │ Timestamps │ JSON lines│
//! │           │ Rate Limit│ Connections │ Lineage    │           │
//! └───────────┴───────────┴─────────────┴────────────┴───────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the extractor
pub mod error;

/// Common types, aliases and constants
pub mod types;

/// Recipe parsing and validation
pub mod config;

/// HTTP client with timeout and rate limiting
pub mod http;

/// Sign-in and session handling
pub mod auth;

/// REST API wire types and endpoints
pub mod api;

/// Output record types
pub mod assets;

/// Dashboard assembly from API responses
pub mod builder;

/// Record sinks
pub mod emit;

/// Extraction driver
pub mod extractor;

/// Extractor trait and registry
pub mod registry;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use assets::{Chart, Dashboard, Record};
pub use config::Config;
pub use emit::{Emitter, JsonLinesEmitter, MemoryEmitter};
pub use extractor::{ExtractStats, Info, TableauExtractor};
pub use registry::{Extractor, ExtractorRegistry};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
