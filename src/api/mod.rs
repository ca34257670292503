//! REST API module
//!
//! Site-scoped endpoints used by the extractor:
//!
//! - `list_workbooks` - first page of workbook summaries
//! - `fetch_workbook_detail` - workbook with its views
//! - `fetch_workbook_connections` - datasource connections of a workbook
//! - `fetch_workbook_graph` - both of the above, concurrently

mod catalog;
mod client;
mod types;
mod workbook;

pub use client::TableauClient;
pub use types::{
    Connection, Identity, Location, Pagination, Tag, Tags, Timestamped, ViewDetail, ViewList,
    WorkbookDetail, WorkbookGraph, WorkbookSummary,
};
