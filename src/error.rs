//! Planner error taxonomy.
//!
//! Only two conditions are errors: an oversized input collection
//! (a caller-side precondition, never silently truncated) and a malformed
//! run-list document. Individual runs that fail validity checks are not
//! errors — the filter drops them silently.

use thiserror::Error;

/// Result alias for planner operations.
pub type PlannerResult<T> = Result<T, PlannerError>;

/// Errors a planning call can return.
#[derive(Debug, Error)]
pub enum PlannerError {
    /// The input collection is not strictly smaller than the configured
    /// maximum. The call must not proceed; callers are expected to bound
    /// input size up front.
    #[error("too many runs: got {count}, input must be smaller than {max}")]
    TooManyRuns { count: usize, max: usize },

    /// The run-list document could not be deserialized.
    #[error("malformed run list: {0}")]
    Parse(#[from] serde_json::Error),
}
