//! Project registry: per-tenant cap, key lookup and cascading delete.

use chrono::Utc;

use pippin_core::PROJECT_LIMIT;
use pippin_core::entities::Project;
use pippin_core::errors::CoreError;
use pippin_core::tenant::TenantId;

use crate::error::DatabaseError;
use crate::helpers::{format_datetime, parse_datetime};
use crate::service::BoardService;

const SELECT_COLS: &str = "id, tenant, key, name, created_at";

fn row_to_project(row: &libsql::Row) -> Result<Project, DatabaseError> {
    Ok(Project {
        id: row.get(0)?,
        tenant: TenantId::new(row.get::<String>(1)?)?,
        key: row.get(2)?,
        name: row.get(3)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

impl BoardService {
    /// Create a project for `tenant`.
    ///
    /// The cap is checked with a separate count before the insert. Key
    /// uniqueness is left to the `UNIQUE (tenant, key)` constraint and
    /// surfaces as a storage error.
    ///
    /// # Errors
    ///
    /// `CoreError::LimitExceeded` when the tenant already owns
    /// [`PROJECT_LIMIT`] projects; `DatabaseError::LibSql` on a duplicate key.
    pub async fn create_project(
        &self,
        tenant: &TenantId,
        key: &str,
        name: &str,
    ) -> Result<Project, DatabaseError> {
        let count = self.count_projects(tenant).await?;
        if count >= PROJECT_LIMIT {
            tracing::warn!(%tenant, key, count, "project limit reached");
            return Err(CoreError::LimitExceeded {
                tenant: tenant.to_string(),
                limit: PROJECT_LIMIT,
            }
            .into());
        }

        let stamp = format_datetime(Utc::now());
        self.db()
            .conn()
            .execute(
                "INSERT INTO projects (tenant, key, name, created_at) VALUES (?1, ?2, ?3, ?4)",
                libsql::params![tenant.as_str(), key, name, stamp.as_str()],
            )
            .await?;
        let id = self.db().conn().last_insert_rowid();

        tracing::debug!(%tenant, project_id = id, key, "project created");

        Ok(Project {
            id,
            tenant: tenant.clone(),
            key: key.to_string(),
            name: name.to_string(),
            created_at: parse_datetime(&stamp)?,
        })
    }

    /// Delete a project by key, together with its tickets and every blocking
    /// edge touching those tickets.
    ///
    /// # Errors
    ///
    /// `CoreError::NotFound` when the tenant has no project with that key.
    pub async fn delete_project(&self, tenant: &TenantId, key: &str) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute(
                "DELETE FROM projects WHERE tenant = ?1 AND key = ?2",
                libsql::params![tenant.as_str(), key],
            )
            .await?;

        if affected == 0 {
            return Err(CoreError::not_found("project", key).into());
        }

        tracing::debug!(%tenant, key, "project deleted");
        Ok(())
    }

    /// All projects of `tenant`, oldest first.
    pub async fn list_projects(&self, tenant: &TenantId) -> Result<Vec<Project>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM projects WHERE tenant = ?1 ORDER BY created_at, id"
                ),
                [tenant.as_str()],
            )
            .await?;

        let mut projects = Vec::new();
        while let Some(row) = rows.next().await? {
            projects.push(row_to_project(&row)?);
        }
        Ok(projects)
    }

    /// Look up a project by key.
    ///
    /// # Errors
    ///
    /// `CoreError::NotFound` when the tenant has no project with that key.
    pub async fn get_project(&self, tenant: &TenantId, key: &str) -> Result<Project, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM projects WHERE tenant = ?1 AND key = ?2"),
                libsql::params![tenant.as_str(), key],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| CoreError::not_found("project", key))?;
        row_to_project(&row)
    }

    async fn count_projects(&self, tenant: &TenantId) -> Result<usize, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query("SELECT COUNT(*) FROM projects WHERE tenant = ?1", [tenant.as_str()])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let count = row.get::<i64>(0)?;
        usize::try_from(count).map_err(|e| DatabaseError::Other(e.into()))
    }
}
