//! Full tenant snapshot for external serialization.

use chrono::{DateTime, NaiveDate, Utc};
use schemars::{JsonSchema, schema_for};
use serde::{Deserialize, Serialize};

use crate::entities::{Project, TicketDetail};
use crate::tenant::TenantId;

/// Every project and ticket of a tenant, regardless of sprint.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ExportSnapshot {
    pub exported_at: DateTime<Utc>,
    pub tenant: TenantId,
    pub projects: Vec<Project>,
    pub tickets: Vec<TicketDetail>,
}

/// Download file name for a snapshot taken on `date`.
#[must_use]
pub fn export_file_name(date: NaiveDate) -> String {
    format!("pippin-export-{}.json", date.format("%Y-%m-%d"))
}

/// JSON Schema describing [`ExportSnapshot`].
///
/// # Errors
///
/// Returns an error if the generated schema cannot be converted to JSON.
pub fn snapshot_schema() -> Result<serde_json::Value, serde_json::Error> {
    serde_json::to_value(schema_for!(ExportSnapshot))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_uses_iso_date() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        assert_eq!(export_file_name(date), "pippin-export-2025-01-10.json");
    }

    #[test]
    fn schema_names_top_level_fields() {
        let schema = snapshot_schema().unwrap();
        let props = schema["properties"].as_object().unwrap();
        for field in ["exported_at", "tenant", "projects", "tickets"] {
            assert!(props.contains_key(field), "missing {field}");
        }
    }
}
