//! Shared test utilities for pippin-db unit tests.

pub(crate) mod helpers {
    use pippin_core::entities::{Project, TicketDetail};
    use pippin_core::settings::Settings;
    use pippin_core::tenant::TenantId;

    use crate::BoardDb;
    use crate::repos::ticket::NewTicket;
    use crate::service::BoardService;

    /// Create an in-memory `BoardService` with default settings.
    pub async fn test_service() -> BoardService {
        let db = BoardDb::open_local(":memory:").await.unwrap();
        BoardService::from_db(db, Settings::default())
    }

    pub fn tenant(id: &str) -> TenantId {
        TenantId::new(id).unwrap()
    }

    /// Create a project and return it.
    pub async fn seed_project(svc: &BoardService, tenant: &TenantId, key: &str) -> Project {
        svc.create_project(tenant, key, &format!("{key} project"))
            .await
            .unwrap()
    }

    /// Create a backlog ticket in `project_key`.
    pub async fn seed_ticket(
        svc: &BoardService,
        tenant: &TenantId,
        project_key: &str,
        title: &str,
    ) -> TicketDetail {
        svc.create_ticket(tenant, &NewTicket::new(project_key, title))
            .await
            .unwrap()
    }
}
