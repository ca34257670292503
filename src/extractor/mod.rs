//! Extraction driver
//!
//! Runs one extraction:
//!
//! ```text
//! init:     validate config -> sign in
//! extract:  list workbooks -> for each workbook, in list order:
//!               fetch detail + connections (concurrently)
//!               assemble dashboard
//!               emit
//! ```
//!
//! Workbooks are processed one at a time, so at most two requests are in
//! flight. The first error ends the run; dashboards already emitted stay
//! with the emitter.

mod types;

pub use types::{ExtractStats, Info};

use crate::api::{TableauClient, WorkbookSummary};
use crate::assets::{Dashboard, Record};
use crate::auth::{Credentials, Session};
use crate::builder::build_dashboard;
use crate::config::{Config, SAMPLE_CONFIG};
use crate::emit::Emitter;
use crate::error::{Error, Result, ResultExt};
use crate::http::{HttpClient, HttpClientConfig, RateLimiterConfig};
use crate::registry::Extractor;
use crate::types::{JsonValue, SERVICE};
use async_trait::async_trait;
use std::time::Instant;
use tracing::{debug, info};

/// Extractor for Tableau Server workbooks
#[derive(Debug, Default)]
pub struct TableauExtractor {
    client: Option<TableauClient>,
}

impl TableauExtractor {
    /// Create an uninitialised extractor
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the config, then sign in
    pub async fn init_with_config(&mut self, config: Config) -> Result<()> {
        config.validate()?;

        let http = build_http_client(&config)?;
        let credentials = Credentials::from_config(&config);
        let client = TableauClient::sign_in(http, &credentials)
            .await
            .context("failed to fetch auth token")?;

        self.client = Some(client);
        Ok(())
    }

    /// The session established by `init`
    pub fn session(&self) -> Option<&Session> {
        self.client.as_ref().map(TableauClient::session)
    }

    fn client(&self) -> Result<&TableauClient> {
        self.client
            .as_ref()
            .ok_or_else(|| Error::config("extractor is not initialised; call init first"))
    }

    async fn extract_workbook(
        &self,
        client: &TableauClient,
        summary: &WorkbookSummary,
    ) -> Result<Dashboard> {
        debug!("Fetching workbook {} ({})", summary.name, summary.id);
        let graph = client.fetch_workbook_graph(&summary.id).await?;

        debug!("Assembling workbook {}", summary.id);
        build_dashboard(summary, &graph.detail, &graph.connections)
    }
}

#[async_trait]
impl Extractor for TableauExtractor {
    fn info(&self) -> Info {
        Info {
            name: SERVICE,
            description: "Dashboard list from Tableau server",
            summary: "Extracts workbooks as dashboards, their views as charts, \
                      and workbook connections as chart lineage.",
            sample_config: SAMPLE_CONFIG,
            tags: vec!["oss", "extractor"],
        }
    }

    fn validate(&self, config: &JsonValue) -> Result<()> {
        Config::from_value(config).map(|_| ())
    }

    async fn init(&mut self, config: &JsonValue) -> Result<()> {
        let config = Config::from_value(config)?;
        self.init_with_config(config).await
    }

    async fn extract(&self, emitter: &mut dyn Emitter) -> Result<ExtractStats> {
        let client = self.client()?;
        let start = Instant::now();
        let mut stats = ExtractStats::new();

        info!("Listing workbooks for site {}", client.session().site_id);
        let workbooks = client
            .list_workbooks()
            .await
            .context("failed to fetch list of workbooks")?;
        stats.workbooks_listed = workbooks.len();

        for summary in &workbooks {
            let dashboard = self
                .extract_workbook(client, summary)
                .await
                .with_context(|| {
                    format!("failed to fetch dashboard data for workbook {}", summary.id)
                })?;

            let charts = dashboard.charts.len();
            emitter
                .emit(Record::new(dashboard))
                .with_context(|| {
                    format!("failed to emit dashboard for workbook {}", summary.id)
                })?;
            stats.add_dashboard(charts);
        }

        stats.set_duration(start.elapsed().as_millis() as u64);
        info!(
            "Extracted {} dashboards with {} charts in {}ms",
            stats.dashboards_emitted, stats.charts_emitted, stats.duration_ms
        );
        Ok(stats)
    }
}

fn build_http_client(config: &Config) -> Result<HttpClient> {
    let mut builder = HttpClientConfig::builder()
        .base_url(config.api_base())
        .timeout(config.timeout);
    if let Some(rps) = config.rate_limit {
        builder = builder.rate_limit(RateLimiterConfig::per_second(rps));
    }
    HttpClient::with_config(builder.build())
}
