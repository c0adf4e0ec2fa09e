//! Runtime board settings.
//!
//! Loaded once at start-up and injected into the service. An explicit
//! [`Settings::apply`] call may replace individual fields; nothing is
//! persisted, so a restart returns to the configured values.

use std::num::NonZeroU32;

use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Theme;
use crate::sprint::{MAX_SPRINT_LENGTH_DAYS, SprintWindow, current_window};

const DEFAULT_SPRINT_LENGTH_DAYS: NonZeroU32 = match NonZeroU32::new(7) {
    Some(days) => days,
    None => panic!("default sprint length must be non-zero"),
};

const DEFAULT_SPRINT_EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2025, 1, 1) {
    Some(date) => date,
    None => panic!("default sprint epoch must be a valid date"),
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Settings {
    pub sprint_length_days: NonZeroU32,
    pub sprint_epoch: NaiveDate,
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sprint_length_days: DEFAULT_SPRINT_LENGTH_DAYS,
            sprint_epoch: DEFAULT_SPRINT_EPOCH,
            theme: Theme::default(),
        }
    }
}

impl Settings {
    /// The sprint window enclosing `now` under these settings.
    #[must_use]
    pub fn current_window(&self, now: DateTime<Utc>) -> SprintWindow {
        current_window(now, self.sprint_epoch, self.sprint_length_days)
    }

    /// Overwrite the fields present in `update`. A zero length, or one longer
    /// than [`MAX_SPRINT_LENGTH_DAYS`], is treated as absent.
    pub fn apply(&mut self, update: &SettingsUpdate) {
        if let Some(days) = update
            .sprint_length_days
            .filter(|days| *days <= MAX_SPRINT_LENGTH_DAYS)
            .and_then(NonZeroU32::new)
        {
            self.sprint_length_days = days;
        }
        if let Some(epoch) = update.sprint_epoch {
            self.sprint_epoch = epoch;
        }
        if let Some(theme) = update.theme {
            self.theme = theme;
        }
    }
}

/// A partial settings change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprint_length_days: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprint_epoch: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
}

impl SettingsUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.sprint_length_days.is_none() && self.sprint_epoch.is_none() && self.theme.is_none()
    }
}
