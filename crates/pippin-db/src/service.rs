//! Service layer for board operations.
//!
//! `BoardService` wraps `BoardDb` (raw database access) and the injected
//! runtime `Settings`. All repo methods are implemented as
//! `impl BoardService` blocks in `repos/`. Every operation takes the tenant
//! explicitly.

use pippin_core::settings::{Settings, SettingsUpdate};

use crate::BoardDb;
use crate::error::DatabaseError;

/// Board operations over one database connection.
pub struct BoardService {
    db: BoardDb,
    settings: Settings,
}

impl BoardService {
    /// Create a new service over a local database.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    /// * `settings` - Validated start-up settings.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or migrated.
    pub async fn new_local(db_path: &str, settings: Settings) -> Result<Self, DatabaseError> {
        let db = BoardDb::open_local(db_path).await?;
        Ok(Self::from_db(db, settings))
    }

    /// Create from an existing `BoardDb`.
    #[must_use]
    pub const fn from_db(db: BoardDb, settings: Settings) -> Self {
        Self { db, settings }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &BoardDb {
        &self.db
    }

    /// Current runtime settings.
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Apply a partial settings change for the rest of this process.
    ///
    /// Nothing is persisted; a restart returns to the configured values.
    pub fn update_settings(&mut self, update: &SettingsUpdate) -> &Settings {
        self.settings.apply(update);
        tracing::debug!(
            sprint_length_days = self.settings.sprint_length_days.get(),
            sprint_epoch = %self.settings.sprint_epoch,
            theme = %self.settings.theme,
            "settings updated (runtime only)"
        );
        &self.settings
    }
}
