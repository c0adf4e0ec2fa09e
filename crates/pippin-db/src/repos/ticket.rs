//! Ticket repository: create, fetch, filtered listing and lifecycle moves.

use chrono::{DateTime, Utc};

use pippin_core::board::{SprintFilter, TicketFilter};
use pippin_core::comments::CommentLog;
use pippin_core::entities::{Ticket, TicketDetail};
use pippin_core::enums::{Direction, TicketState};
use pippin_core::errors::CoreError;
use pippin_core::tenant::TenantId;

use crate::error::DatabaseError;
use crate::helpers::{format_datetime, get_string_or_empty, parse_datetime, parse_enum};
use crate::service::BoardService;
use crate::updates::ticket::TicketUpdate;

const SELECT_COLS: &str = "t.id, t.tenant, t.project_id, t.title, t.body, t.state, t.assignee, \
     t.comments, t.created_at, t.updated_at, p.key";

const FROM_JOIN: &str = "FROM tickets t JOIN projects p ON t.project_id = p.id";

/// Input for creating a ticket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTicket {
    pub project_key: String,
    pub title: String,
    pub body: String,
    pub assignee: String,
    /// Starting column; `backlog` when absent.
    pub state: Option<TicketState>,
}

impl NewTicket {
    #[must_use]
    pub fn new(project_key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            project_key: project_key.into(),
            title: title.into(),
            ..Default::default()
        }
    }
}

fn row_to_detail(row: &libsql::Row) -> Result<TicketDetail, DatabaseError> {
    Ok(TicketDetail {
        ticket: Ticket {
            id: row.get(0)?,
            tenant: TenantId::new(row.get::<String>(1)?)?,
            project_id: row.get(2)?,
            title: get_string_or_empty(row, 3)?,
            body: get_string_or_empty(row, 4)?,
            state: parse_enum(&row.get::<String>(5)?)?,
            assignee: get_string_or_empty(row, 6)?,
            comments: CommentLog::from_raw(get_string_or_empty(row, 7)?),
            created_at: parse_datetime(&row.get::<String>(8)?)?,
            updated_at: parse_datetime(&row.get::<String>(9)?)?,
        },
        project_key: row.get(10)?,
        blocked_by: Vec::new(),
    })
}

impl BoardService {
    /// Create a ticket stamped with the current time.
    ///
    /// # Errors
    ///
    /// `CoreError::NotFound` when the project key does not exist for the tenant.
    pub async fn create_ticket(
        &self,
        tenant: &TenantId,
        new: &NewTicket,
    ) -> Result<TicketDetail, DatabaseError> {
        self.create_ticket_at(tenant, new, Utc::now()).await
    }

    /// Create a ticket with an explicit creation time (imports, backfills).
    ///
    /// # Errors
    ///
    /// `CoreError::NotFound` when the project key does not exist for the tenant.
    pub async fn create_ticket_at(
        &self,
        tenant: &TenantId,
        new: &NewTicket,
        created_at: DateTime<Utc>,
    ) -> Result<TicketDetail, DatabaseError> {
        let project = self.get_project(tenant, &new.project_key).await?;
        let state = new.state.unwrap_or_default();
        let stamp = format_datetime(created_at);
        // Hand back what a later read will see.
        let created_at = parse_datetime(&stamp)?;

        self.db()
            .conn()
            .execute(
                "INSERT INTO tickets (tenant, project_id, title, body, state, assignee, comments, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, '', ?7, ?8)",
                libsql::params![
                    tenant.as_str(),
                    project.id,
                    new.title.as_str(),
                    new.body.as_str(),
                    state.as_str(),
                    new.assignee.as_str(),
                    stamp.as_str(),
                    stamp.as_str()
                ],
            )
            .await?;
        let id = self.db().conn().last_insert_rowid();

        tracing::debug!(%tenant, ticket_id = id, project = %project.key, %state, "ticket created");

        Ok(TicketDetail {
            ticket: Ticket {
                id,
                tenant: tenant.clone(),
                project_id: project.id,
                title: new.title.clone(),
                body: new.body.clone(),
                state,
                assignee: new.assignee.clone(),
                comments: CommentLog::default(),
                created_at,
                updated_at: created_at,
            },
            project_key: project.key,
            blocked_by: Vec::new(),
        })
    }

    /// Fetch a ticket with its project key and blockers.
    ///
    /// # Errors
    ///
    /// `CoreError::NotFound` when the ticket does not exist for the tenant.
    pub async fn get_ticket(&self, tenant: &TenantId, id: i64) -> Result<TicketDetail, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} {FROM_JOIN} WHERE t.id = ?1 AND t.tenant = ?2"),
                libsql::params![id, tenant.as_str()],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| CoreError::not_found("ticket", id))?;

        let mut detail = row_to_detail(&row)?;
        detail.blocked_by = self.blockers_of(tenant, id).await?;
        Ok(detail)
    }

    /// List tickets, evaluating a `current` sprint filter at call time.
    pub async fn list_tickets(
        &self,
        tenant: &TenantId,
        filter: &TicketFilter,
    ) -> Result<Vec<TicketDetail>, DatabaseError> {
        self.list_tickets_at(tenant, filter, Utc::now()).await
    }

    /// List tickets with the sprint window evaluated at `now`.
    ///
    /// Ordered by `created_at`, then insertion order.
    pub async fn list_tickets_at(
        &self,
        tenant: &TenantId,
        filter: &TicketFilter,
        now: DateTime<Utc>,
    ) -> Result<Vec<TicketDetail>, DatabaseError> {
        let mut sql = format!("SELECT {SELECT_COLS} {FROM_JOIN} WHERE t.tenant = ?1");
        let mut params: Vec<libsql::Value> = vec![tenant.as_str().into()];

        if let Some(key) = filter.project.key() {
            params.push(key.into());
            sql.push_str(&format!(" AND p.key = ?{}", params.len()));
        }

        if filter.sprint == SprintFilter::Current {
            let window = self.settings().current_window(now);
            params.push(format_datetime(window.start).into());
            sql.push_str(&format!(" AND t.created_at >= ?{}", params.len()));
            params.push(format_datetime(window.end).into());
            sql.push_str(&format!(" AND t.created_at < ?{}", params.len()));
        }

        sql.push_str(" ORDER BY t.created_at, t.id");

        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;

        let mut tickets = Vec::new();
        while let Some(row) = rows.next().await? {
            tickets.push(row_to_detail(&row)?);
        }
        for detail in &mut tickets {
            detail.blocked_by = self.blockers_of(tenant, detail.ticket.id).await?;
        }
        Ok(tickets)
    }

    /// Edit ticket fields. `state` may jump to any value here.
    ///
    /// # Errors
    ///
    /// `CoreError::NotFound` when the ticket does not exist for the tenant.
    pub async fn update_ticket(
        &self,
        tenant: &TenantId,
        id: i64,
        update: &TicketUpdate,
    ) -> Result<TicketDetail, DatabaseError> {
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1usize;

        if let Some(ref title) = update.title {
            sets.push(format!("title = ?{idx}"));
            params.push(title.clone().into());
            idx += 1;
        }
        if let Some(ref body) = update.body {
            sets.push(format!("body = ?{idx}"));
            params.push(body.clone().into());
            idx += 1;
        }
        if let Some(ref assignee) = update.assignee {
            sets.push(format!("assignee = ?{idx}"));
            params.push(assignee.clone().into());
            idx += 1;
        }
        if let Some(state) = update.state {
            sets.push(format!("state = ?{idx}"));
            params.push(state.as_str().into());
            idx += 1;
        }

        if sets.is_empty() {
            return self.get_ticket(tenant, id).await;
        }

        sets.push(format!("updated_at = ?{idx}"));
        params.push(format_datetime(Utc::now()).into());
        idx += 1;

        params.push(id.into());
        params.push(tenant.as_str().into());
        let sql = format!(
            "UPDATE tickets SET {} WHERE id = ?{idx} AND tenant = ?{}",
            sets.join(", "),
            idx + 1
        );
        let affected = self
            .db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;

        if affected == 0 {
            return Err(CoreError::not_found("ticket", id).into());
        }

        tracing::debug!(%tenant, ticket_id = id, ?update, "ticket updated");
        self.get_ticket(tenant, id).await
    }

    /// Move a ticket one column left or right.
    ///
    /// Reads the current state, computes the neighbour, then writes it, with
    /// no transaction around the sequence. Concurrent movers of the same
    /// ticket race and the last write wins.
    ///
    /// # Errors
    ///
    /// `CoreError::NotFound` for a missing ticket, `CoreError::InvalidMove`
    /// when the step would leave the chain.
    pub async fn move_ticket(
        &self,
        tenant: &TenantId,
        id: i64,
        direction: Direction,
    ) -> Result<TicketState, DatabaseError> {
        let current = self.ticket_state(tenant, id).await?;
        let next = current.step(direction).inspect_err(|error| {
            tracing::warn!(%tenant, ticket_id = id, %current, %direction, %error, "move rejected");
        })?;

        let affected = self
            .db()
            .conn()
            .execute(
                "UPDATE tickets SET state = ?1, updated_at = ?2 WHERE id = ?3 AND tenant = ?4",
                libsql::params![
                    next.as_str(),
                    format_datetime(Utc::now()),
                    id,
                    tenant.as_str()
                ],
            )
            .await?;

        if affected == 0 {
            return Err(CoreError::not_found("ticket", id).into());
        }

        tracing::debug!(%tenant, ticket_id = id, from = %current, to = %next, "ticket moved");
        Ok(next)
    }

    async fn ticket_state(&self, tenant: &TenantId, id: i64) -> Result<TicketState, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT state FROM tickets WHERE id = ?1 AND tenant = ?2",
                libsql::params![id, tenant.as_str()],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| CoreError::not_found("ticket", id))?;
        parse_enum(&row.get::<String>(0)?)
    }
}
