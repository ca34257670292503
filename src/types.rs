//! Common types used throughout the extractor
//!
//! Shared type aliases and constants used across multiple modules.

use std::collections::BTreeMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// Ordered attribute map attached to emitted assets
pub type Attributes = BTreeMap<String, JsonValue>;

// ============================================================================
// Constants
// ============================================================================

/// Service tag stamped on every dashboard and chart
pub const SERVICE: &str = "tableau";

/// Header carrying the session token on authenticated requests
pub const AUTH_HEADER: &str = "X-Tableau-Auth";

/// Page size requested from the workbook list endpoint
pub const WORKBOOK_PAGE_SIZE: u32 = 1000;

/// Layout every `createdAt`/`updatedAt` string must follow (UTC, optional fraction)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";
