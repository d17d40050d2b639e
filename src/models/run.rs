//! Production run model.
//!
//! A production run is the smallest plannable unit: a day-granular interval
//! defined by a start instant and a duration in whole days. Runs are value
//! types — constructed once from input, never mutated. The planner only
//! reorders, selects, or rejects them.
//!
//! # Day Model
//!
//! A run of duration 1 occupies exactly its start day, so the derived end
//! instant is `start + (duration_days - 1)` days. Both boundary days belong
//! to the run: a run ending the day another starts clashes with it.
//!
//! # Ordering
//!
//! Runs order by end instant ascending, then start instant ascending.
//! Cluster partitioning and greedy selection both depend on this finish-time
//! key; sorting by any other key breaks them.
//!
//! # Reference
//! Kleinberg & Tardos (2006), "Algorithm Design", Ch. 4.1 (Interval Scheduling)

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A candidate production run: a closed day-granular interval.
///
/// Equality is by value: two runs are equal iff their start instants and
/// durations are both equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductionRun {
    /// First day of the run.
    #[serde(rename = "startingDay")]
    pub start: DateTime<Utc>,
    /// Length in days, inclusive of the start day.
    #[serde(rename = "duration")]
    pub duration_days: i64,
}

impl ProductionRun {
    /// Creates a new run.
    pub fn new(start: DateTime<Utc>, duration_days: i64) -> Self {
        Self {
            start,
            duration_days,
        }
    }

    /// Last day of the run: `start + (duration_days - 1)` days.
    ///
    /// Equals `start` for a one-day run. Meaningless for non-positive
    /// durations; the validity filter rejects those before any algorithm
    /// sees them.
    #[inline]
    pub fn end(&self) -> DateTime<Utc> {
        self.start + Duration::days(self.duration_days - 1)
    }

    /// Whether this run overlaps another, boundary days included.
    ///
    /// Two runs clash iff they share at least one calendar day. The closed
    /// ranges `[start, end]` are compared, so full containment, partial
    /// overlap, and a shared boundary day all count. Symmetric:
    /// `a.clashes_with(&b) == b.clashes_with(&a)`.
    #[inline]
    pub fn clashes_with(&self, other: &Self) -> bool {
        self.start <= other.end() && other.start <= self.end()
    }
}

/// Total order by end ascending, then start ascending.
///
/// Consistent with value equality: equal `(end, start)` pairs imply equal
/// `(start, duration_days)` pairs.
impl Ord for ProductionRun {
    fn cmp(&self, other: &Self) -> Ordering {
        self.end()
            .cmp(&other.end())
            .then_with(|| self.start.cmp(&other.start))
    }
}

impl PartialOrd for ProductionRun {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ProductionRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} +{}d",
            self.start.format("%Y-%m-%d"),
            self.duration_days
        )
    }
}
