//! Sprint window arithmetic.
//!
//! Sprints are consecutive, day-aligned windows of `length` days anchored at a
//! configured epoch. The window for any instant is derived on demand and never
//! stored. Instants before the epoch fall into earlier windows (floor
//! division), they are not clamped to the first one.

use std::num::NonZeroU32;

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

const SECONDS_PER_DAY: i64 = 86_400;

/// Longest accepted sprint, one hundred years.
pub const MAX_SPRINT_LENGTH_DAYS: u32 = 36_500;

/// A half-open `[start, end)` sprint window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SprintWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl SprintWindow {
    /// Whether `at` lies inside `[start, end)`.
    #[must_use]
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at < self.end
    }

    /// The window immediately after this one.
    #[must_use]
    pub fn next(&self) -> Self {
        let length = self.end - self.start;
        Self {
            start: self.end,
            end: self.end.checked_add_signed(length).unwrap_or(DateTime::<Utc>::MAX_UTC),
        }
    }
}

/// Compute the sprint window enclosing `now`.
///
/// Bounds that fall outside chrono's representable range saturate to
/// `MIN_UTC` / `MAX_UTC`.
#[must_use]
pub fn current_window(now: DateTime<Utc>, epoch: NaiveDate, length_days: NonZeroU32) -> SprintWindow {
    let epoch_start = epoch.and_time(NaiveTime::MIN).and_utc();
    // `timestamp()` floors sub-second parts, so this is an exact floor.
    let elapsed_secs = now.timestamp() - epoch_start.timestamp();
    let days_since_epoch = elapsed_secs.div_euclid(SECONDS_PER_DAY);

    let length = i64::from(length_days.get());
    let window_index = days_since_epoch.div_euclid(length);

    let start = TimeDelta::try_days(window_index * length)
        .and_then(|offset| epoch_start.checked_add_signed(offset))
        .unwrap_or(DateTime::<Utc>::MIN_UTC);
    let end = TimeDelta::try_days(length)
        .and_then(|span| start.checked_add_signed(span))
        .unwrap_or(DateTime::<Utc>::MAX_UTC);
    SprintWindow { start, end }
}
