//! Output assets
//!
//! `Dashboard`, `Chart` and `Lineage` records produced by the assembler and
//! consumed by an [`Emitter`](crate::emit::Emitter).

mod types;

pub use types::{Chart, Dashboard, Lineage, Properties, Record, Resource, Timestamps};
