//! Board view assembly.

use chrono::{DateTime, Utc};

use pippin_core::board::{Board, SprintFilter, TicketFilter};
use pippin_core::tenant::TenantId;

use crate::error::DatabaseError;
use crate::service::BoardService;

impl BoardService {
    /// Build the four-column board for `filter`, evaluated now.
    pub async fn board(&self, tenant: &TenantId, filter: &TicketFilter) -> Result<Board, DatabaseError> {
        self.board_at(tenant, filter, Utc::now()).await
    }

    /// Build the board with the sprint window evaluated at `now`.
    pub async fn board_at(
        &self,
        tenant: &TenantId,
        filter: &TicketFilter,
        now: DateTime<Utc>,
    ) -> Result<Board, DatabaseError> {
        let projects = self.list_projects(tenant).await?;
        let tickets = self.list_tickets_at(tenant, filter, now).await?;
        let window = (filter.sprint == SprintFilter::Current)
            .then(|| self.settings().current_window(now));

        tracing::debug!(
            %tenant,
            project = %filter.project,
            sprint = ?filter.sprint,
            tickets = tickets.len(),
            "board assembled"
        );

        Ok(Board {
            theme: self.settings().theme,
            sprint: filter.sprint,
            project: filter.project.clone(),
            window,
            projects,
            columns: tickets.into_iter().collect(),
        })
    }
}
