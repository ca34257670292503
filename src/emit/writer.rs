//! JSON lines writer

use super::Emitter;
use crate::assets::Record;
use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes each record as a single line of JSON
pub struct JsonLinesEmitter<W: Write + Send> {
    writer: W,
    written: usize,
}

impl<W: Write + Send> JsonLinesEmitter<W> {
    /// Wrap a writer
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Number of records written
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush and return the inner writer
    pub fn into_inner(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl JsonLinesEmitter<BufWriter<File>> {
    /// Create (or truncate) a file and write records into it
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write + Send> Emitter for JsonLinesEmitter<W> {
    fn emit(&mut self, record: Record) -> Result<()> {
        serde_json::to_writer(&mut self.writer, record.data())
            .map_err(|e| Error::emit(format!("failed to serialize record: {e}")))?;
        self.writer
            .write_all(b"\n")
            .and_then(|()| self.writer.flush())
            .map_err(|e| Error::emit(e.to_string()))?;
        self.written += 1;
        Ok(())
    }
}
