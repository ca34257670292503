//! Wire types returned by the REST API
//!
//! Every field defaults when absent or `null` so that sparse server
//! responses still decode; only the assembler decides what is required.

use crate::types::JsonValue;
use serde::{Deserialize, Deserializer};

/// Decode `null` as the field's default value
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// `{id, name}` pair used for projects, owners and datasources
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Identity {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
}

/// Workbook location (personal space or project)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Location {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub location_type: String,
}

/// A single tag
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Tag {
    #[serde(deserialize_with = "null_default")]
    pub label: String,
}

/// `{"tag": [...]}` wrapper
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Tags {
    #[serde(deserialize_with = "null_default")]
    pub tag: Vec<Tag>,
}

impl Tags {
    /// Tag labels in server order; empty when there are no tags
    pub fn labels(&self) -> Vec<String> {
        self.tag.iter().map(|t| t.label.clone()).collect()
    }
}

/// Raw `createdAt`/`updatedAt` strings shared by workbooks and views
pub trait Timestamped {
    fn created_at(&self) -> &str;
    fn updated_at(&self) -> &str;
}

// ============================================================================
// Workbook list
// ============================================================================

/// Minimal workbook entry from the list endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WorkbookSummary {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
}

/// Pagination block; the server sends numbers as strings
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Pagination {
    #[serde(deserialize_with = "null_default")]
    pub page_number: String,
    #[serde(deserialize_with = "null_default")]
    pub page_size: String,
    #[serde(deserialize_with = "null_default")]
    pub total_available: String,
}

impl Pagination {
    /// Total number of workbooks on the site, if reported
    pub fn total(&self) -> Option<usize> {
        self.total_available.parse().ok()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct WorkbookList {
    #[serde(deserialize_with = "null_default")]
    pub workbook: Vec<WorkbookSummary>,
}

/// Body of `GET sites/<site>/workbooks`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct WorkbooksResponse {
    #[serde(deserialize_with = "null_default")]
    pub pagination: Pagination,
    #[serde(deserialize_with = "null_default")]
    pub workbooks: WorkbookList,
}

// ============================================================================
// Workbook detail
// ============================================================================

/// A view (sheet or dashboard tab) inside a workbook
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewDetail {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub content_url: String,
    #[serde(deserialize_with = "null_default")]
    pub view_url_name: String,
    #[serde(deserialize_with = "null_default")]
    pub tags: Tags,
    #[serde(deserialize_with = "null_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_default")]
    pub updated_at: String,
}

impl Timestamped for ViewDetail {
    fn created_at(&self) -> &str {
        &self.created_at
    }

    fn updated_at(&self) -> &str {
        &self.updated_at
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ViewList {
    #[serde(deserialize_with = "null_default")]
    pub view: Vec<ViewDetail>,
}

/// Full workbook detail, including its views
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkbookDetail {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub description: String,
    #[serde(deserialize_with = "null_default")]
    pub project: Identity,
    #[serde(deserialize_with = "null_default")]
    pub owner: Identity,
    #[serde(deserialize_with = "null_default")]
    pub location: Location,
    #[serde(deserialize_with = "null_default")]
    pub tags: Tags,
    #[serde(deserialize_with = "null_default")]
    pub content_url: String,
    #[serde(deserialize_with = "null_default")]
    pub webpage_url: String,
    #[serde(deserialize_with = "null_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_default")]
    pub updated_at: String,
    #[serde(deserialize_with = "null_default")]
    pub views: ViewList,
    #[serde(deserialize_with = "null_default")]
    pub show_tabs: String,
    #[serde(deserialize_with = "null_default")]
    pub size: String,
    #[serde(deserialize_with = "null_default")]
    pub encrypt_extracts: String,
    #[serde(deserialize_with = "null_default")]
    pub default_view_id: String,
    /// Kept verbatim; never read
    pub data_acceleration_config: Option<JsonValue>,
}

impl Timestamped for WorkbookDetail {
    fn created_at(&self) -> &str {
        &self.created_at
    }

    fn updated_at(&self) -> &str {
        &self.updated_at
    }
}

/// Body of `GET sites/<site>/workbooks/<id>`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct WorkbookResponse {
    #[serde(deserialize_with = "null_default")]
    pub workbook: WorkbookDetail,
}

// ============================================================================
// Connections
// ============================================================================

/// A data-source connection used by a workbook
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Connection {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub datasource: Identity,
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub connection_type: String,
    #[serde(deserialize_with = "null_default")]
    pub server_address: String,
    #[serde(deserialize_with = "null_default")]
    pub user_name: String,
    #[serde(deserialize_with = "null_default")]
    pub embed_password: bool,
    #[serde(deserialize_with = "null_default")]
    pub query_tagging_enabled: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ConnectionList {
    #[serde(deserialize_with = "null_default")]
    pub connection: Vec<Connection>,
}

/// Body of `GET sites/<site>/workbooks/<id>/connections`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ConnectionsResponse {
    #[serde(deserialize_with = "null_default")]
    pub connections: ConnectionList,
}

/// Everything the assembler needs for one workbook
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkbookGraph {
    pub detail: WorkbookDetail,
    pub connections: Vec<Connection>,
}
