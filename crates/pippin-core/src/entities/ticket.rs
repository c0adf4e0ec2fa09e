use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::comments::{CommentEntry, CommentLog};
use crate::entities::Blocker;
use crate::enums::TicketState;
use crate::tenant::TenantId;

/// A unit of work owned by exactly one project.
///
/// `updated_at` advances on every mutation: state change, field edit, or
/// comment append. Sprint membership is decided by `created_at` alone.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Ticket {
    pub id: i64,
    pub tenant: TenantId,
    pub project_id: i64,
    pub title: String,
    pub body: String,
    pub state: TicketState,
    pub assignee: String,
    #[schemars(with = "Vec<CommentEntry>")]
    pub comments: CommentLog,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A ticket as handed to the presentation layer: joined with its project key
/// and the tickets that block it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TicketDetail {
    #[serde(flatten)]
    pub ticket: Ticket,
    pub project_key: String,
    #[serde(default)]
    pub blocked_by: Vec<Blocker>,
}

impl TicketDetail {
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        !self.blocked_by.is_empty()
    }
}
