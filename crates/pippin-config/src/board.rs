//! Board configuration: tenant and sprint/theme settings.

use std::num::NonZeroU32;

use chrono::NaiveDate;
use pippin_core::enums::Theme;
use pippin_core::settings::Settings;
use pippin_core::sprint::MAX_SPRINT_LENGTH_DAYS;
use pippin_core::tenant::TenantId;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_account_id() -> String {
    "demo".to_string()
}

const fn default_sprint_length_days() -> i64 {
    7
}

fn default_sprint_epoch() -> String {
    "2025-01-01".to_string()
}

fn default_theme() -> String {
    "warm".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BoardConfig {
    /// Tenant every operation of this process is scoped to.
    #[serde(default = "default_account_id")]
    pub account_id: String,

    /// Sprint length in days, between 1 and 36 500.
    #[serde(default = "default_sprint_length_days")]
    pub sprint_length_days: i64,

    /// First day of sprint zero, `YYYY-MM-DD`.
    #[serde(default = "default_sprint_epoch")]
    pub sprint_epoch: String,

    /// Board theme: `warm` or `forest`.
    #[serde(default = "default_theme")]
    pub theme: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            account_id: default_account_id(),
            sprint_length_days: default_sprint_length_days(),
            sprint_epoch: default_sprint_epoch(),
            theme: default_theme(),
        }
    }
}

impl BoardConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a blank account id.
    pub fn tenant(&self) -> Result<TenantId, ConfigError> {
        TenantId::new(self.account_id.clone()).map_err(|e| invalid("board.account_id", e))
    }

    /// Validate the raw values into runtime [`Settings`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a sprint length outside
    /// `1..=MAX_SPRINT_LENGTH_DAYS`, an unparseable epoch, or an unknown theme.
    pub fn settings(&self) -> Result<Settings, ConfigError> {
        let sprint_length_days = u32::try_from(self.sprint_length_days)
            .ok()
            .filter(|days| *days <= MAX_SPRINT_LENGTH_DAYS)
            .and_then(NonZeroU32::new)
            .ok_or_else(|| {
                invalid(
                    "board.sprint_length_days",
                    format!(
                        "must be between 1 and {MAX_SPRINT_LENGTH_DAYS} days, got {}",
                        self.sprint_length_days
                    ),
                )
            })?;

        let sprint_epoch = NaiveDate::parse_from_str(&self.sprint_epoch, "%Y-%m-%d")
            .map_err(|e| invalid("board.sprint_epoch", format!("'{}': {e}", self.sprint_epoch)))?;

        let theme = self.theme.parse::<Theme>().map_err(|e| invalid("board.theme", e))?;

        Ok(Settings {
            sprint_length_days,
            sprint_epoch,
            theme,
        })
    }
}

fn invalid(field: &str, reason: impl ToString) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
