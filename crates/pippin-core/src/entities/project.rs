use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::tenant::TenantId;

/// A tenant-owned container of tickets.
///
/// `key` is a short token (uppercase by convention) unique within the tenant.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Project {
    pub id: i64,
    pub tenant: TenantId,
    pub key: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
