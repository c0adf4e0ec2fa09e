use chrono::{DateTime, Utc};

use pippin_core::comments::CommentLog;
use pippin_core::errors::CoreError;
use pippin_core::tenant::TenantId;

use crate::error::DatabaseError;
use crate::helpers::{format_datetime, get_string_or_empty};
use crate::service::BoardService;

impl BoardService {
    /// Append a comment stamped with the current time and return the whole
    /// transcript.
    ///
    /// # Errors
    ///
    /// `CoreError::NotFound` when the ticket does not exist for the tenant.
    pub async fn append_comment(
        &self,
        tenant: &TenantId,
        ticket_id: i64,
        text: &str,
    ) -> Result<CommentLog, DatabaseError> {
        self.append_comment_at(tenant, ticket_id, text, Utc::now()).await
    }

    /// Append a comment stamped at `at`.
    ///
    /// # Errors
    ///
    /// `CoreError::NotFound` when the ticket does not exist for the tenant.
    pub async fn append_comment_at(
        &self,
        tenant: &TenantId,
        ticket_id: i64,
        text: &str,
        at: DateTime<Utc>,
    ) -> Result<CommentLog, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT comments FROM tickets WHERE id = ?1 AND tenant = ?2",
                libsql::params![ticket_id, tenant.as_str()],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| CoreError::not_found("ticket", ticket_id))?;

        let mut log = CommentLog::from_raw(get_string_or_empty(&row, 0)?);
        log.append(at, text);

        let affected = self
            .db()
            .conn()
            .execute(
                "UPDATE tickets SET comments = ?1, updated_at = ?2 WHERE id = ?3 AND tenant = ?4",
                libsql::params![
                    log.as_raw(),
                    format_datetime(Utc::now()),
                    ticket_id,
                    tenant.as_str()
                ],
            )
            .await?;

        if affected == 0 {
            return Err(CoreError::not_found("ticket", ticket_id).into());
        }

        tracing::debug!(%tenant, ticket_id, "comment appended");
        Ok(log)
    }
}
