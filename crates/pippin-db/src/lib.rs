//! # pippin-db
//!
//! libSQL persistence and board operations for Pippin.
//!
//! Holds all durable state: projects, tickets (with their comment logs), and
//! blocking edges. Every query filters on the tenant it was handed. Board
//! rules (project cap, lifecycle adjacency) are evaluated here against the
//! stored state, using the pure types from `pippin-core`.
//!
//! Operations do not wrap their read-then-write sequences in transactions:
//! two concurrent moves of the same ticket race and the last writer wins.
//! Cascading project deletion is left to the storage engine's foreign keys.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
pub mod updates;

#[cfg(test)]
pub(crate) mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Database handle for board state.
///
/// Wraps a libSQL database and a single connection with foreign keys enabled.
pub struct BoardDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl BoardDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let board_db = Self { db, conn };
        board_db.run_migrations().await?;
        Ok(board_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_db() -> BoardDb {
        BoardDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;

        for table in ["projects", "tickets", "blocks"] {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [table],
                )
                .await
                .unwrap();
            let row = rows.next().await.unwrap();
            assert!(row.is_some(), "table '{table}' should exist");
        }
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn foreign_keys_are_enforced() {
        let db = test_db().await;
        let mut rows = db.conn().query("PRAGMA foreign_keys", ()).await.unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<i64>(0).unwrap(), 1);
    }

    #[tokio::test]
    async fn project_key_unique_per_tenant() {
        let db = test_db().await;
        let insert = "INSERT INTO projects (tenant, key, name, created_at) VALUES (?1, ?2, 'x', '2025-01-01T00:00:00.000000Z')";

        db.conn().execute(insert, ["demo", "WEB"]).await.unwrap();
        db.conn().execute(insert, ["other", "WEB"]).await.unwrap();
        let duplicate = db.conn().execute(insert, ["demo", "WEB"]).await;
        assert!(duplicate.is_err(), "duplicate key within a tenant should be rejected");
    }

    #[tokio::test]
    async fn on_disk_database_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.db");
        let path = path.to_string_lossy();

        {
            let db = BoardDb::open_local(&path).await.unwrap();
            db.conn()
                .execute(
                    "INSERT INTO projects (tenant, key, name, created_at) VALUES ('demo', 'WEB', 'Web', '2025-01-01T00:00:00.000000Z')",
                    (),
                )
                .await
                .unwrap();
        }

        let db = BoardDb::open_local(&path).await.unwrap();
        let mut rows = db.conn().query("SELECT COUNT(*) FROM projects", ()).await.unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<i64>(0).unwrap(), 1);
    }
}
