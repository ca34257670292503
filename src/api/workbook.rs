//! Detail fetcher
//!
//! Pulls the workbook detail and its connection list concurrently.

use super::client::TableauClient;
use super::types::{
    Connection, ConnectionsResponse, WorkbookDetail, WorkbookGraph, WorkbookResponse,
};
use crate::error::{Result, ResultExt};
use crate::http::RequestConfig;
use futures::future::try_join;
use tracing::debug;

impl TableauClient {
    /// Fetch the full detail of one workbook, views included
    pub async fn fetch_workbook_detail(&self, workbook_id: &str) -> Result<WorkbookDetail> {
        let path = self.site_path(&format!("workbooks/{workbook_id}"));
        let response: WorkbookResponse = self.get(&path, RequestConfig::new()).await?;
        Ok(response.workbook)
    }

    /// Fetch the data-source connections of one workbook
    pub async fn fetch_workbook_connections(&self, workbook_id: &str) -> Result<Vec<Connection>> {
        let path = self.site_path(&format!("workbooks/{workbook_id}/connections"));
        let response: ConnectionsResponse = self.get(&path, RequestConfig::new()).await?;
        Ok(response.connections.connection)
    }

    /// Fetch detail and connections for one workbook concurrently
    ///
    /// Both requests must succeed. The first failure to complete is
    /// returned and the other request is dropped mid-flight; which one that
    /// is when both fail depends on timing.
    pub async fn fetch_workbook_graph(&self, workbook_id: &str) -> Result<WorkbookGraph> {
        let detail = async {
            self.fetch_workbook_detail(workbook_id)
                .await
                .with_context(|| format!("error fetching workbook detail for {workbook_id}"))
        };
        let connections = async {
            self.fetch_workbook_connections(workbook_id)
                .await
                .with_context(|| format!("error fetching workbook connections for {workbook_id}"))
        };

        let (detail, connections) = try_join(detail, connections).await?;
        debug!(
            "Fetched workbook {} with {} views and {} connections",
            workbook_id,
            detail.views.view.len(),
            connections.len()
        );

        Ok(WorkbookGraph {
            detail,
            connections,
        })
    }
}
