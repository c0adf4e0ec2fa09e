use chrono::Utc;

use pippin_core::board::TicketFilter;
use pippin_core::export::ExportSnapshot;
use pippin_core::tenant::TenantId;

use crate::error::DatabaseError;
use crate::service::BoardService;

impl BoardService {
    /// Snapshot every project and ticket of `tenant`, ignoring sprint windows.
    pub async fn export(&self, tenant: &TenantId) -> Result<ExportSnapshot, DatabaseError> {
        let projects = self.list_projects(tenant).await?;
        let tickets = self.list_tickets(tenant, &TicketFilter::default()).await?;

        tracing::info!(
            %tenant,
            projects = projects.len(),
            tickets = tickets.len(),
            "export snapshot taken"
        );

        Ok(ExportSnapshot {
            exported_at: Utc::now(),
            tenant: tenant.clone(),
            projects,
            tickets,
        })
    }
}
