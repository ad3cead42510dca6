// ============================================================
// WORK INTERVAL
// ============================================================
// Closed time interval of one employee's tenure on a project

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Closed interval `[start, end]` in UTC, `start <= end` always holds.
/// Serialize-only: deserialization would bypass the constructor check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkInterval {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl WorkInterval {
    /// Build an interval, rejecting `end < start`
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Option<Self> {
        if end < start {
            return None;
        }
        Some(Self { start, end })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Closed-interval test: touching at a single boundary instant counts
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Shared sub-interval, `None` when the intervals are disjoint
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if !self.overlaps(other) {
            return None;
        }
        Self::new(self.start.max(other.start), self.end.min(other.end))
    }

    /// Whole calendar days spanned by the interval.
    ///
    /// Both endpoints are truncated to the start of their UTC calendar day
    /// before subtracting, so a span inside one day counts as 0 and a span
    /// crossing one midnight counts as 1.
    pub fn whole_days(&self) -> u64 {
        let days = self
            .end
            .date_naive()
            .signed_duration_since(self.start.date_naive())
            .num_days();
        u64::try_from(days).unwrap_or_default()
    }
}
