//! Trailing time window over joined records.

use chrono::{DateTime, Months, Utc};

use super::records::JoinedRecord;
use crate::error::DigestError;

/// How many months of history to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryWindow {
    months: u32,
}

impl HistoryWindow {
    pub const MIN_MONTHS: u32 = 1;
    pub const MAX_MONTHS: u32 = 36;
    pub const DEFAULT_MONTHS: u32 = 12;

    /// Create a window, rejecting values outside 1-36 months.
    pub fn new(months: u32) -> Result<Self, DigestError> {
        if (Self::MIN_MONTHS..=Self::MAX_MONTHS).contains(&months) {
            Ok(Self { months })
        } else {
            Err(DigestError::InvalidWindow { months })
        }
    }

    pub fn months(&self) -> u32 {
        self.months
    }

    /// Earliest retained instant: `now` minus the window in calendar months.
    ///
    /// The day of month is clamped to the target month's last day
    /// (31 March minus one month is the end of February).
    pub fn cutoff(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now.checked_sub_months(Months::new(self.months))
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    /// Keep records at or after the cutoff, sorted by time, exercise, set index.
    pub fn apply(&self, records: Vec<JoinedRecord>, now: DateTime<Utc>) -> Vec<JoinedRecord> {
        let cutoff = self.cutoff(now);
        let mut recent: Vec<JoinedRecord> = records
            .into_iter()
            .filter(|r| r.performed_at >= cutoff)
            .collect();

        recent.sort_by(|a, b| {
            a.performed_at
                .cmp(&b.performed_at)
                .then_with(|| a.exercise.cmp(&b.exercise))
                .then_with(|| a.set_index.cmp(&b.set_index))
        });
        recent
    }
}

impl Default for HistoryWindow {
    fn default() -> Self {
        Self {
            months: Self::DEFAULT_MONTHS,
        }
    }
}
