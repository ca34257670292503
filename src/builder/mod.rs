//! Dashboard assembler
//!
//! Turns one workbook's detail and connection list into a [`Dashboard`]
//! with one [`Chart`] per view. URNs are derived from the project name and
//! the source identifiers:
//!
//! ```text
//! dashboard  tableau::<project>/workbook/<workbook id>
//! chart      tableau::<project>/view/<view id>
//! upstream   <connection type>::<datasource id>
//! ```

use crate::api::{Connection, Timestamped, ViewDetail, WorkbookDetail, WorkbookSummary};
use crate::assets::{Chart, Dashboard, Lineage, Properties, Resource, Timestamps};
use crate::error::{Error, Result, ResultExt};
use crate::types::{Attributes, SERVICE, TIMESTAMP_FORMAT};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::json;

/// Parse one timestamp string in the server's fixed UTC layout
pub fn parse_timestamp(field: &'static str, value: &str) -> Result<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|source| Error::TimestampParse {
            field,
            value: value.to_string(),
            source,
        })
}

/// Parse `createdAt` then `updatedAt`
///
/// `updatedAt` is not looked at when `createdAt` fails, so the error always
/// names the first bad field.
pub fn build_timestamps(model: &impl Timestamped) -> Result<Timestamps> {
    let create_time = parse_timestamp("createdAt", model.created_at())?;
    let update_time = parse_timestamp("updatedAt", model.updated_at())?;
    Ok(Timestamps {
        create_time,
        update_time,
    })
}

pub fn dashboard_urn(project_name: &str, workbook_id: &str) -> String {
    format!("{SERVICE}::{project_name}/workbook/{workbook_id}")
}

pub fn chart_urn(project_name: &str, view_id: &str) -> String {
    format!("{SERVICE}::{project_name}/view/{view_id}")
}

// TODO: normalise connection types such as "sqlserver" into catalog service names
pub fn build_lineage_resource(connection: &Connection) -> Resource {
    Resource {
        urn: format!(
            "{}::{}",
            connection.connection_type, connection.datasource.id
        ),
        name: connection.datasource.name.clone(),
        service: String::new(),
    }
}

/// Upstreams in connection-list order
pub fn build_lineage(connections: &[Connection]) -> Lineage {
    Lineage {
        upstreams: connections.iter().map(build_lineage_resource).collect(),
    }
}

fn view_properties(view: &ViewDetail) -> Properties {
    let mut attributes = Attributes::new();
    attributes.insert("id".into(), json!(view.id));
    attributes.insert("name".into(), json!(view.name));
    attributes.insert("content_url".into(), json!(view.content_url));
    attributes.insert("view_url_name".into(), json!(view.view_url_name));
    attributes.insert("tag".into(), json!(view.tags.labels()));
    Properties { attributes }
}

fn workbook_properties(workbook: &WorkbookDetail) -> Properties {
    let mut attributes = Attributes::new();
    attributes.insert("id".into(), json!(workbook.id));
    attributes.insert("project_id".into(), json!(workbook.project.id));
    attributes.insert("project_name".into(), json!(workbook.project.name));
    attributes.insert("owner_id".into(), json!(workbook.owner.id));
    attributes.insert("owner_name".into(), json!(workbook.owner.name));
    attributes.insert("location_id".into(), json!(workbook.location.id));
    attributes.insert("location_name".into(), json!(workbook.location.name));
    attributes.insert("location_type".into(), json!(workbook.location.location_type));
    attributes.insert("content_url".into(), json!(workbook.content_url));
    attributes.insert("webpage_url".into(), json!(workbook.webpage_url));
    attributes.insert("tag".into(), json!(workbook.tags.labels()));
    Properties { attributes }
}

/// One chart per view, in view order, all sharing `lineage`
pub fn build_charts(
    dashboard_urn: &str,
    workbook: &WorkbookDetail,
    lineage: &Lineage,
) -> Result<Vec<Chart>> {
    workbook
        .views
        .view
        .iter()
        .map(|view| {
            let timestamps = build_timestamps(view).with_context(|| {
                format!(
                    "error building chart {} with ID {} timestamps",
                    view.name, view.id
                )
            })?;

            Ok(Chart {
                urn: chart_urn(&workbook.project.name, &view.id),
                source: SERVICE.to_string(),
                dashboard_urn: dashboard_urn.to_string(),
                lineage: lineage.clone(),
                properties: view_properties(view),
                timestamps,
            })
        })
        .collect()
}

/// Assemble the dashboard for one workbook
///
/// Fails when any timestamp of the workbook or of one of its views does not
/// parse; no partial dashboard is returned.
pub fn build_dashboard(
    summary: &WorkbookSummary,
    workbook: &WorkbookDetail,
    connections: &[Connection],
) -> Result<Dashboard> {
    let urn = dashboard_urn(&workbook.project.name, &workbook.id);
    let lineage = build_lineage(connections);

    let charts = build_charts(&urn, workbook, &lineage)
        .with_context(|| format!("error building charts for workbook {}", summary.id))?;

    let timestamps = build_timestamps(workbook).with_context(|| {
        format!("error building dashboard timestamps for workbook {}", summary.id)
    })?;

    Ok(Dashboard {
        resource: Resource {
            urn,
            name: workbook.name.clone(),
            service: SERVICE.to_string(),
        },
        description: workbook.description.clone(),
        charts,
        properties: workbook_properties(workbook),
        timestamps,
    })
}

#[cfg(test)]
mod tests;
