//! Run summary reported at the end of a watcher pass.

use chrono::{DateTime, Utc};

/// Outcome of one watcher pass.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Records matched on the page after deduplication
    pub extracted: usize,
    /// Records whose identifier was not in the seen set
    pub new: usize,
    /// Notifications accepted by the messaging API
    pub delivered: usize,
    /// Notifications that failed and were skipped
    pub failed: usize,
    /// Whether the seen store was rewritten
    pub persisted: bool,
}

impl RunSummary {
    pub fn started() -> Self {
        let now = Utc::now();
        Self {
            start_time: now,
            end_time: now,
            extracted: 0,
            new: 0,
            delivered: 0,
            failed: 0,
            persisted: false,
        }
    }

    /// Stamp the end time.
    pub fn finish(mut self) -> Self {
        self.end_time = Utc::now();
        self
    }

    /// Wall-clock duration in milliseconds.
    pub fn elapsed_ms(&self) -> i64 {
        (self.end_time - self.start_time).num_milliseconds()
    }
}
