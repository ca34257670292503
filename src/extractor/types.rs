//! Extractor types
//!
//! Descriptive info and run statistics for the extraction driver.

use serde::Serialize;

/// Static description of an extractor
#[derive(Debug, Clone, Serialize)]
pub struct Info {
    /// Registry name
    pub name: &'static str,
    /// One-line description
    pub description: &'static str,
    /// Longer summary
    pub summary: &'static str,
    /// Example recipe
    pub sample_config: &'static str,
    /// Classification tags
    pub tags: Vec<&'static str>,
}

/// Statistics from one extraction run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractStats {
    /// Workbooks returned by the list endpoint
    pub workbooks_listed: usize,
    /// Dashboards handed to the emitter
    pub dashboards_emitted: usize,
    /// Charts across all emitted dashboards
    pub charts_emitted: usize,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl ExtractStats {
    /// Create new stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one emitted dashboard and its charts
    pub fn add_dashboard(&mut self, charts: usize) {
        self.dashboards_emitted += 1;
        self.charts_emitted += charts;
    }

    /// Set duration
    pub fn set_duration(&mut self, ms: u64) {
        self.duration_ms = ms;
    }
}
