//! Catalog lister

use super::client::TableauClient;
use super::types::{WorkbookSummary, WorkbooksResponse};
use crate::error::Result;
use crate::http::RequestConfig;
use crate::types::WORKBOOK_PAGE_SIZE;
use tracing::{debug, warn};

impl TableauClient {
    /// List the workbooks of the active site
    ///
    /// Only the first page is requested. Workbooks beyond
    /// [`WORKBOOK_PAGE_SIZE`] are dropped; a warning is logged when the
    /// server reports more than were returned.
    pub async fn list_workbooks(&self) -> Result<Vec<WorkbookSummary>> {
        let request = RequestConfig::new()
            .query("pageSize", WORKBOOK_PAGE_SIZE.to_string())
            .query("pageNumber", "1");

        let response: WorkbooksResponse = self.get(&self.site_path("workbooks"), request).await?;
        let workbooks = response.workbooks.workbook;

        if let Some(total) = response.pagination.total() {
            if total > workbooks.len() {
                warn!(
                    "Site reports {} workbooks but only {} were listed; the rest are skipped",
                    total,
                    workbooks.len()
                );
            }
        }

        debug!("Listed {} workbooks", workbooks.len());
        Ok(workbooks)
    }
}
