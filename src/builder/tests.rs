//! Tests for the dashboard assembler

use super::*;
use crate::api::{Identity, Location, Tag, Tags, ViewList};
use crate::error::ErrorKind;
use chrono::{TimeZone, Timelike};
use pretty_assertions::assert_eq;
use test_case::test_case;

fn connection(kind: &str, id: &str, name: &str) -> Connection {
    Connection {
        connection_type: kind.into(),
        datasource: Identity {
            id: id.into(),
            name: name.into(),
        },
        ..Connection::default()
    }
}

fn view(id: &str, name: &str) -> ViewDetail {
    ViewDetail {
        id: id.into(),
        name: name.into(),
        content_url: format!("Regional/sheets/{name}"),
        view_url_name: name.into(),
        tags: Tags::default(),
        created_at: "2021-11-01T11:32:31Z".into(),
        updated_at: "2021-11-02T08:00:00Z".into(),
    }
}

fn workbook() -> WorkbookDetail {
    WorkbookDetail {
        id: "969428bf-0bde-4c73-8efe-04c37ec7c2ba".into(),
        name: "Regional".into(),
        description: "Regional sample".into(),
        project: Identity {
            id: "project-1".into(),
            name: "Samples".into(),
        },
        owner: Identity {
            id: "owner-1".into(),
            name: "user@meteor".into(),
        },
        location: Location {
            id: "project-1".into(),
            name: "Samples".into(),
            location_type: "Project".into(),
        },
        content_url: "Regional".into(),
        webpage_url: "https://server.tableau.com/#/workbooks/1".into(),
        created_at: "2021-11-01T11:32:31Z".into(),
        updated_at: "2021-11-01T11:32:31.123456Z".into(),
        views: ViewList {
            view: vec![
                view("224d5a29-8a40-4b33-9ba5-9af0bab5b661", "Obesity"),
                view("a139e8b6-03c8-4989-b37b-a7f7e6e82415", "College"),
            ],
        },
        ..WorkbookDetail::default()
    }
}

fn summary() -> WorkbookSummary {
    WorkbookSummary {
        id: "969428bf-0bde-4c73-8efe-04c37ec7c2ba".into(),
        name: "Regional".into(),
    }
}

fn sample_connections() -> Vec<Connection> {
    vec![
        connection("excel-direct", "connection_id1", "Data Source 1"),
        connection("postgres", "connection_id2", "Data Source 2"),
    ]
}

// ============================================================================
// Timestamps
// ============================================================================

#[test_case("2021-11-01T11:32:31Z", "2021-11-01T11:32:31Z" ; "whole seconds")]
#[test_case("2021-11-01T11:32:31.5Z", "2021-11-01T11:32:31.999999Z" ; "fractional seconds")]
#[test_case("2000-01-01T00:00:00Z", "2030-12-31T23:59:59Z" ; "range bounds")]
fn test_build_timestamps_valid(created: &str, updated: &str) {
    let mut model = view("v", "View");
    model.created_at = created.into();
    model.updated_at = updated.into();

    let timestamps = build_timestamps(&model).unwrap();
    assert!(timestamps.create_time <= timestamps.update_time);
}

#[test]
fn test_build_timestamps_values() {
    let timestamps = build_timestamps(&workbook()).unwrap();
    assert_eq!(
        timestamps.create_time,
        Utc.with_ymd_and_hms(2021, 11, 1, 11, 32, 31).unwrap()
    );
    assert_eq!(timestamps.update_time.nanosecond(), 123_456_000);
}

#[test_case("invalid" ; "garbage")]
#[test_case("2021-11-01 11:32:31" ; "missing T and Z")]
#[test_case("2021-11-01T11:32:31+07:00" ; "offset instead of Z")]
#[test_case("" ; "empty")]
fn test_build_timestamps_bad_created_at(created: &str) {
    let mut model = view("v", "View");
    model.created_at = created.into();
    model.updated_at = "also invalid".into();

    let err = build_timestamps(&model).unwrap_err();
    match err {
        Error::TimestampParse { field, value, .. } => {
            assert_eq!(field, "createdAt");
            assert_eq!(value, created);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_build_timestamps_bad_updated_at() {
    let mut model = view("v", "View");
    model.updated_at = "invalid".into();

    let err = build_timestamps(&model).unwrap_err();
    assert!(matches!(
        err,
        Error::TimestampParse {
            field: "updatedAt",
            ..
        }
    ));
    assert_eq!(err.kind(), ErrorKind::Parse);
    // createdAt on its own still parses
    assert!(parse_timestamp("createdAt", &model.created_at).is_ok());
}

// ============================================================================
// URNs and lineage
// ============================================================================

#[test]
fn test_urns() {
    assert_eq!(
        dashboard_urn("Samples", "969428bf-0bde-4c73-8efe-04c37ec7c2ba"),
        "tableau::Samples/workbook/969428bf-0bde-4c73-8efe-04c37ec7c2ba"
    );
    assert_eq!(
        chart_urn("Samples", "224d5a29-8a40-4b33-9ba5-9af0bab5b661"),
        "tableau::Samples/view/224d5a29-8a40-4b33-9ba5-9af0bab5b661"
    );
}

#[test]
fn test_build_lineage() {
    let lineage = build_lineage(&sample_connections());

    assert_eq!(
        lineage.upstreams,
        vec![
            Resource {
                urn: "excel-direct::connection_id1".into(),
                name: "Data Source 1".into(),
                service: String::new(),
            },
            Resource {
                urn: "postgres::connection_id2".into(),
                name: "Data Source 2".into(),
                service: String::new(),
            },
        ]
    );
}

#[test]
fn test_build_lineage_empty() {
    assert!(build_lineage(&[]).upstreams.is_empty());
}

// ============================================================================
// Dashboard
// ============================================================================

#[test]
fn test_build_dashboard() {
    let dashboard = build_dashboard(&summary(), &workbook(), &sample_connections()).unwrap();

    assert_eq!(
        dashboard.resource.urn,
        "tableau::Samples/workbook/969428bf-0bde-4c73-8efe-04c37ec7c2ba"
    );
    assert_eq!(dashboard.resource.name, "Regional");
    assert_eq!(dashboard.resource.service, "tableau");
    assert_eq!(dashboard.description, "Regional sample");

    let attributes = &dashboard.properties.attributes;
    assert_eq!(attributes["id"], "969428bf-0bde-4c73-8efe-04c37ec7c2ba");
    assert_eq!(attributes["project_id"], "project-1");
    assert_eq!(attributes["project_name"], "Samples");
    assert_eq!(attributes["owner_id"], "owner-1");
    assert_eq!(attributes["owner_name"], "user@meteor");
    assert_eq!(attributes["location_id"], "project-1");
    assert_eq!(attributes["location_name"], "Samples");
    assert_eq!(attributes["location_type"], "Project");
    assert_eq!(attributes["content_url"], "Regional");
    assert_eq!(attributes["webpage_url"], "https://server.tableau.com/#/workbooks/1");
}

#[test]
fn test_build_dashboard_charts_follow_views() {
    let dashboard = build_dashboard(&summary(), &workbook(), &sample_connections()).unwrap();

    let urns: Vec<&str> = dashboard.charts.iter().map(|c| c.urn.as_str()).collect();
    assert_eq!(
        urns,
        vec![
            "tableau::Samples/view/224d5a29-8a40-4b33-9ba5-9af0bab5b661",
            "tableau::Samples/view/a139e8b6-03c8-4989-b37b-a7f7e6e82415",
        ]
    );

    let expected_lineage = build_lineage(&sample_connections());
    for chart in &dashboard.charts {
        assert_eq!(chart.dashboard_urn, dashboard.resource.urn);
        assert_eq!(chart.source, "tableau");
        assert_eq!(chart.lineage, expected_lineage);
    }

    let first = &dashboard.charts[0].properties.attributes;
    assert_eq!(first["id"], "224d5a29-8a40-4b33-9ba5-9af0bab5b661");
    assert_eq!(first["name"], "Obesity");
    assert_eq!(first["content_url"], "Regional/sheets/Obesity");
    assert_eq!(first["view_url_name"], "Obesity");
    assert_eq!(first["tag"], serde_json::json!([]));
}

#[test]
fn test_tags_are_empty_list_not_absent() {
    let dashboard = build_dashboard(&summary(), &workbook(), &[]).unwrap();
    assert_eq!(dashboard.properties.attributes["tag"], serde_json::json!([]));
}

#[test]
fn test_tags_are_flattened_labels() {
    let mut detail = workbook();
    detail.tags = Tags {
        tag: vec![
            Tag {
                label: "finance".into(),
            },
            Tag {
                label: "weekly".into(),
            },
        ],
    };
    detail.views.view[1].tags = Tags {
        tag: vec![Tag {
            label: "edu".into(),
        }],
    };

    let dashboard = build_dashboard(&summary(), &detail, &[]).unwrap();
    assert_eq!(
        dashboard.properties.attributes["tag"],
        serde_json::json!(["finance", "weekly"])
    );
    assert_eq!(
        dashboard.charts[1].properties.attributes["tag"],
        serde_json::json!(["edu"])
    );
}

#[test]
fn test_workbook_without_views() {
    let mut detail = workbook();
    detail.views.view.clear();

    let dashboard = build_dashboard(&summary(), &detail, &sample_connections()).unwrap();
    assert!(dashboard.charts.is_empty());
}

#[test]
fn test_bad_view_timestamp_fails_dashboard() {
    let mut detail = workbook();
    detail.views.view[1].created_at = "yesterday".into();

    let err = build_dashboard(&summary(), &detail, &[]).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("College"));
    assert!(message.contains("a139e8b6-03c8-4989-b37b-a7f7e6e82415"));
    assert!(message.contains("969428bf-0bde-4c73-8efe-04c37ec7c2ba"));
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[test]
fn test_bad_workbook_timestamp_fails_dashboard() {
    let mut detail = workbook();
    detail.updated_at = "2021-13-45T99:00:00Z".into();

    let err = build_dashboard(&summary(), &detail, &[]).unwrap_err();
    assert!(err.to_string().contains("dashboard timestamps"));
    assert!(matches!(
        err.root(),
        Error::TimestampParse {
            field: "updatedAt",
            ..
        }
    ));
}
