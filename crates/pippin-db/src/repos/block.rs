//! Blocking edges between tickets.

use chrono::Utc;

use pippin_core::entities::Blocker;
use pippin_core::tenant::TenantId;

use crate::error::DatabaseError;
use crate::helpers::format_datetime;
use crate::service::BoardService;

impl BoardService {
    /// Record that `blocker` blocks `blocked`. Adding an existing edge is a
    /// no-op. Self-edges and cycles are accepted.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` when either ticket id does not exist.
    pub async fn add_block(
        &self,
        tenant: &TenantId,
        blocker: i64,
        blocked: i64,
    ) -> Result<(), DatabaseError> {
        let inserted = self
            .db()
            .conn()
            .execute(
                "INSERT INTO blocks (tenant, blocker_ticket_id, blocked_ticket_id, created_at)
                 VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT (tenant, blocker_ticket_id, blocked_ticket_id) DO NOTHING",
                libsql::params![
                    tenant.as_str(),
                    blocker,
                    blocked,
                    format_datetime(Utc::now())
                ],
            )
            .await?;

        tracing::debug!(%tenant, blocker, blocked, inserted, "block added");
        Ok(())
    }

    /// Remove the edge if present. Removing a missing edge succeeds.
    pub async fn remove_block(
        &self,
        tenant: &TenantId,
        blocker: i64,
        blocked: i64,
    ) -> Result<(), DatabaseError> {
        let removed = self
            .db()
            .conn()
            .execute(
                "DELETE FROM blocks WHERE tenant = ?1 AND blocker_ticket_id = ?2 AND blocked_ticket_id = ?3",
                libsql::params![tenant.as_str(), blocker, blocked],
            )
            .await?;

        tracing::debug!(%tenant, blocker, blocked, removed, "block removed");
        Ok(())
    }

    /// Tickets blocking `ticket_id`, in the order the edges were added.
    pub async fn blockers_of(
        &self,
        tenant: &TenantId,
        ticket_id: i64,
    ) -> Result<Vec<Blocker>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT b.blocker_ticket_id, p.key
                 FROM blocks b
                 JOIN tickets t ON t.id = b.blocker_ticket_id
                 JOIN projects p ON p.id = t.project_id
                 WHERE b.tenant = ?1 AND b.blocked_ticket_id = ?2
                 ORDER BY b.rowid",
                libsql::params![tenant.as_str(), ticket_id],
            )
            .await?;

        let mut blockers = Vec::new();
        while let Some(row) = rows.next().await? {
            blockers.push(Blocker {
                ticket_id: row.get(0)?,
                project_key: row.get(1)?,
            });
        }
        Ok(blockers)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::test_support::helpers::{seed_project, seed_ticket, tenant, test_service};

    #[tokio::test]
    async fn add_block_is_idempotent() {
        let svc = test_service().await;
        let demo = tenant("demo");
        seed_project(&svc, &demo, "WEB").await;
        let a = seed_ticket(&svc, &demo, "WEB", "a").await.ticket.id;
        let b = seed_ticket(&svc, &demo, "WEB", "b").await.ticket.id;

        svc.add_block(&demo, a, b).await.unwrap();
        svc.add_block(&demo, a, b).await.unwrap();

        let blockers = svc.blockers_of(&demo, b).await.unwrap();
        assert_eq!(blockers.len(), 1);
        assert_eq!(blockers[0].to_string(), format!("T-{a} (WEB)"));
        assert!(svc.blockers_of(&demo, a).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn blockers_carry_their_own_project_key() {
        let svc = test_service().await;
        let demo = tenant("demo");
        seed_project(&svc, &demo, "WEB").await;
        seed_project(&svc, &demo, "API").await;
        let api = seed_ticket(&svc, &demo, "API", "endpoint").await.ticket.id;
        let web1 = seed_ticket(&svc, &demo, "WEB", "page").await.ticket.id;
        let web2 = seed_ticket(&svc, &demo, "WEB", "form").await.ticket.id;

        svc.add_block(&demo, api, web2).await.unwrap();
        svc.add_block(&demo, web1, web2).await.unwrap();

        let detail = svc.get_ticket(&demo, web2).await.unwrap();
        assert!(detail.is_blocked());
        let labels: Vec<String> = detail.blocked_by.iter().map(ToString::to_string).collect();
        assert_eq!(labels, vec![format!("T-{api} (API)"), format!("T-{web1} (WEB)")]);
    }

    #[tokio::test]
    async fn remove_missing_block_succeeds() {
        let svc = test_service().await;
        let demo = tenant("demo");
        svc.remove_block(&demo, 1, 2).await.unwrap();

        seed_project(&svc, &demo, "WEB").await;
        let a = seed_ticket(&svc, &demo, "WEB", "a").await.ticket.id;
        let b = seed_ticket(&svc, &demo, "WEB", "b").await.ticket.id;
        svc.add_block(&demo, a, b).await.unwrap();
        svc.remove_block(&demo, a, b).await.unwrap();
        svc.remove_block(&demo, a, b).await.unwrap();
        assert!(svc.blockers_of(&demo, b).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn self_block_and_cycles_are_accepted() {
        let svc = test_service().await;
        let demo = tenant("demo");
        seed_project(&svc, &demo, "WEB").await;
        let a = seed_ticket(&svc, &demo, "WEB", "a").await.ticket.id;
        let b = seed_ticket(&svc, &demo, "WEB", "b").await.ticket.id;

        svc.add_block(&demo, a, a).await.unwrap();
        svc.add_block(&demo, a, b).await.unwrap();
        svc.add_block(&demo, b, a).await.unwrap();

        let ids: Vec<i64> = svc
            .blockers_of(&demo, a)
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.ticket_id)
            .collect();
        assert_eq!(ids, vec![a, b]);
    }

    #[tokio::test]
    async fn edges_are_tenant_scoped() {
        let svc = test_service().await;
        let demo = tenant("demo");
        let other = tenant("other");
        seed_project(&svc, &demo, "WEB").await;
        let a = seed_ticket(&svc, &demo, "WEB", "a").await.ticket.id;
        let b = seed_ticket(&svc, &demo, "WEB", "b").await.ticket.id;

        svc.add_block(&demo, a, b).await.unwrap();
        assert!(svc.blockers_of(&other, b).await.unwrap().is_empty());

        svc.remove_block(&other, a, b).await.unwrap();
        assert_eq!(svc.blockers_of(&demo, b).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn edge_to_missing_ticket_is_rejected() {
        let svc = test_service().await;
        let demo = tenant("demo");
        seed_project(&svc, &demo, "WEB").await;
        let a = seed_ticket(&svc, &demo, "WEB", "a").await.ticket.id;

        assert!(svc.add_block(&demo, a, a + 100).await.is_err());
    }
}
