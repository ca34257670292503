//! Record emission
//!
//! The extractor pushes every assembled dashboard into an [`Emitter`].
//!
//! - `MemoryEmitter` keeps records in memory
//! - `JsonLinesEmitter` writes one JSON document per line to any writer

mod writer;

pub use writer::JsonLinesEmitter;

use crate::assets::Record;
use crate::error::Result;

/// Sink for extracted records
pub trait Emitter: Send {
    /// Accept one record
    fn emit(&mut self, record: Record) -> Result<()>;
}

/// Collects records in emission order
#[derive(Debug, Default)]
pub struct MemoryEmitter {
    records: Vec<Record>,
}

impl MemoryEmitter {
    /// Create an empty emitter
    pub fn new() -> Self {
        Self::default()
    }

    /// Records received so far
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Take ownership of the collected records
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl Emitter for MemoryEmitter {
    fn emit(&mut self, record: Record) -> Result<()> {
        self.records.push(record);
        Ok(())
    }
}
