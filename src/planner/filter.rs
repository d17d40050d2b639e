//! Validity filter.
//!
//! Removes runs that can never be planned: runs whose start is not strictly
//! after the reference "now" (a run that has already begun cannot be
//! scheduled), and runs whose duration falls outside the configured bounds.
//!
//! Dropping is silent by design. This is a filtering step, not a validation
//! step — the caller gets a smaller list, never an error. The dropped count
//! is logged for observability only.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::config::PlannerLimits;
use crate::models::ProductionRun;

/// Returns the subset of `runs` eligible for planning.
///
/// A run survives iff its start is strictly after `now` and its duration
/// lies in `(0, limits.max_run_duration)`, both bounds exclusive.
pub fn filter_schedulable(
    runs: Vec<ProductionRun>,
    now: DateTime<Utc>,
    limits: &PlannerLimits,
) -> Vec<ProductionRun> {
    let before = runs.len();
    let schedulable: Vec<ProductionRun> = runs
        .into_iter()
        .filter(|run| {
            run.start > now
                && run.duration_days > 0
                && run.duration_days < limits.max_run_duration
        })
        .collect();

    let dropped = before - schedulable.len();
    if dropped > 0 {
        debug!(dropped, kept = schedulable.len(), "filtered unschedulable runs");
    }

    schedulable
}
