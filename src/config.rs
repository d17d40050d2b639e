//! Planner limits configuration.
//!
//! Two externally supplied numeric limits bound what the planner accepts:
//! the longest duration a single run may have and the largest number of
//! candidate runs a single planning call may receive. Limits are read-only
//! once constructed; the planner never mutates them.

use serde::{Deserialize, Serialize};

/// Externally configured numeric limits for a planning call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerLimits {
    /// Exclusive upper bound on `duration_days`. Runs with a duration
    /// outside `(0, max_run_duration)` are filtered out.
    #[serde(default = "default_max_run_duration")]
    pub max_run_duration: i64,
    /// Exclusive upper bound on input size. A planning call with
    /// `max_quantity_of_runs` or more candidates is rejected outright.
    #[serde(default = "default_max_quantity_of_runs")]
    pub max_quantity_of_runs: usize,
}

fn default_max_run_duration() -> i64 {
    100_000
}

fn default_max_quantity_of_runs() -> usize {
    1000
}

impl PlannerLimits {
    /// Creates limits with the default bounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the exclusive upper bound on run duration.
    pub fn with_max_run_duration(mut self, max_run_duration: i64) -> Self {
        self.max_run_duration = max_run_duration;
        self
    }

    /// Sets the exclusive upper bound on input size.
    pub fn with_max_quantity_of_runs(mut self, max_quantity_of_runs: usize) -> Self {
        self.max_quantity_of_runs = max_quantity_of_runs;
        self
    }
}

impl Default for PlannerLimits {
    fn default() -> Self {
        Self {
            max_run_duration: default_max_run_duration(),
            max_quantity_of_runs: default_max_quantity_of_runs(),
        }
    }
}
