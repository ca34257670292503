//! Catalog asset types
//!
//! Shapes emitted downstream: a dashboard owns its charts, each chart points
//! back at the dashboard by URN and carries the upstream lineage.

use crate::types::Attributes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Named, addressable catalog entity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub urn: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub service: String,
}

/// Upstream data sources of a chart
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lineage {
    pub upstreams: Vec<Resource>,
}

/// Free-form attributes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Properties {
    pub attributes: Attributes,
}

/// Creation and last-update instants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamps {
    pub create_time: DateTime<Utc>,
    pub update_time: DateTime<Utc>,
}

/// One view of a workbook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub urn: String,
    pub source: String,
    pub dashboard_urn: String,
    pub lineage: Lineage,
    pub properties: Properties,
    pub timestamps: Timestamps,
}

/// One workbook with all of its views
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub resource: Resource,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub charts: Vec<Chart>,
    pub properties: Properties,
    pub timestamps: Timestamps,
}

/// Unit handed to the emitter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    data: Dashboard,
}

impl Record {
    /// Wrap a dashboard
    pub fn new(data: Dashboard) -> Self {
        Self { data }
    }

    /// The wrapped dashboard
    pub fn data(&self) -> &Dashboard {
        &self.data
    }

    /// Unwrap the dashboard
    pub fn into_data(self) -> Dashboard {
        self.data
    }
}
