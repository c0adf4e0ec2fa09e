//! Serde roundtrip and JsonSchema validation for the export snapshot.

use chrono::{TimeZone, Utc};
use pippin_core::comments::CommentLog;
use pippin_core::entities::{Blocker, Project, Ticket, TicketDetail};
use pippin_core::enums::TicketState;
use pippin_core::export::{ExportSnapshot, snapshot_schema};
use pippin_core::tenant::TenantId;
use pretty_assertions::assert_eq;

fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

fn sample_snapshot() -> ExportSnapshot {
    let tenant = TenantId::new("demo").unwrap();
    let created = Utc.with_ymd_and_hms(2025, 1, 10, 9, 0, 0).unwrap();

    let mut comments = CommentLog::from_raw("imported from spreadsheet");
    comments.append(created, "kicked off");

    ExportSnapshot {
        exported_at: Utc.with_ymd_and_hms(2025, 1, 11, 0, 0, 0).unwrap(),
        tenant: tenant.clone(),
        projects: vec![Project {
            id: 1,
            tenant: tenant.clone(),
            key: "WEB".into(),
            name: "Website".into(),
            created_at: created,
        }],
        tickets: vec![TicketDetail {
            ticket: Ticket {
                id: 7,
                tenant,
                project_id: 1,
                title: "Fix login".into(),
                body: "Session cookie expires early".into(),
                state: TicketState::InProgress,
                assignee: "sam".into(),
                comments,
                created_at: created,
                updated_at: created,
            },
            project_key: "WEB".into(),
            blocked_by: vec![Blocker {
                ticket_id: 3,
                project_key: "API".into(),
            }],
        }],
    }
}

#[test]
fn snapshot_roundtrips_through_json() {
    let snapshot = sample_snapshot();
    let json = serde_json::to_string_pretty(&snapshot).unwrap();
    let recovered: ExportSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, snapshot);
}

#[test]
fn snapshot_validates_against_generated_schema() {
    let schema = snapshot_schema().unwrap();
    let instance = serde_json::to_value(sample_snapshot()).unwrap();
    let errors = validate_against_schema(&schema, &instance);
    assert!(errors.is_empty(), "schema validation failed: {errors:?}");
}

#[test]
fn ticket_fields_are_flattened_next_to_project_key() {
    let instance = serde_json::to_value(sample_snapshot()).unwrap();
    let ticket = &instance["tickets"][0];
    assert_eq!(ticket["id"], 7);
    assert_eq!(ticket["state"], "in_progress");
    assert_eq!(ticket["project_key"], "WEB");
    assert_eq!(ticket["comments"][0], "imported from spreadsheet");
    assert_eq!(ticket["comments"][1]["text"], "kicked off");
}
