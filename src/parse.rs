//! Run-list deserialization.
//!
//! Turns a textual JSON list of runs into `Vec<ProductionRun>`. The wire
//! format is an array of objects with a `startingDay` timestamp and an
//! integer `duration` day count:
//!
//! ```json
//! [ { "startingDay": "2018-01-02T00:00:00.000Z", "duration": 5 } ]
//! ```
//!
//! The planning algorithms never see this layer — they receive well-typed
//! runs and do not care where they came from.

use crate::error::PlannerResult;
use crate::models::ProductionRun;

/// Parses a JSON array of production runs.
///
/// A malformed document yields [`PlannerError::Parse`](crate::error::PlannerError);
/// individual run validity (duration bounds, past starts) is not checked
/// here — that is the filter's job.
pub fn parse_runs(json: &str) -> PlannerResult<Vec<ProductionRun>> {
    Ok(serde_json::from_str(json)?)
}
