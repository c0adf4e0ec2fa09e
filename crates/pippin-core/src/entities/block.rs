use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::tenant::TenantId;

/// Directed edge: `blocker_ticket_id` must be resolved before
/// `blocked_ticket_id` counts as unblocked.
///
/// Cycles and self-edges are allowed; they only matter for display.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
pub struct BlockingEdge {
    pub tenant: TenantId,
    pub blocker_ticket_id: i64,
    pub blocked_ticket_id: i64,
}

/// A ticket that blocks another, as shown on the blocked ticket's badge.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Blocker {
    pub ticket_id: i64,
    pub project_key: String,
}

impl fmt::Display for Blocker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T-{} ({})", self.ticket_id, self.project_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_label() {
        let blocker = Blocker {
            ticket_id: 42,
            project_key: "WEB".into(),
        };
        assert_eq!(blocker.to_string(), "T-42 (WEB)");
    }
}
