//! End-to-end planning engine.
//!
//! Composes the pipeline: validity filter → cluster partitioner → greedy
//! maximizer → aggregation. Each stage hands a plain collection to the
//! next; nothing here depends on logging or the wire format.
//!
//! Clusters are disjoint in time by construction, so concatenating the
//! per-cluster selections can never introduce a cross-cluster clash. That
//! independence is what makes solving cluster-by-cluster correct, not just
//! fast.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::config::PlannerLimits;
use crate::error::{PlannerError, PlannerResult};
use crate::models::ProductionRun;
use crate::parse::parse_runs;
use crate::planner::filter::filter_schedulable;
use crate::planner::maximize::maximize_cluster;
use crate::planner::partition::partition_into_clusters;

/// Maximum-cardinality run planner.
///
/// Stateless apart from its read-only limits; every call is a pure,
/// deterministic function of the input runs and the reference instant.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use run_planner::models::ProductionRun;
/// use run_planner::planner::Planner;
///
/// let runs = vec![
///     ProductionRun::new(Utc.with_ymd_and_hms(2018, 1, 2, 0, 0, 0).unwrap(), 5),
///     ProductionRun::new(Utc.with_ymd_and_hms(2018, 1, 9, 0, 0, 0).unwrap(), 3),
/// ];
/// let now = Utc.with_ymd_and_hms(2018, 1, 1, 0, 0, 0).unwrap();
///
/// let planner = Planner::new();
/// let selected = planner.maximize_non_clashing_runs(runs, now).unwrap();
/// assert_eq!(selected.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Planner {
    limits: PlannerLimits,
}

impl Planner {
    /// Creates a planner with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a planner with the given limits.
    pub fn with_limits(limits: PlannerLimits) -> Self {
        Self { limits }
    }

    /// Selects the largest possible set of pairwise non-clashing runs.
    ///
    /// Runs that have already started relative to `now`, or whose duration
    /// is out of bounds, are silently dropped before selection. The result
    /// is a subset of the input with no run appearing twice.
    ///
    /// # Errors
    ///
    /// [`PlannerError::TooManyRuns`] if the input is not strictly smaller
    /// than the configured `max_quantity_of_runs`. The size bound is a
    /// precondition: the planner never truncates an oversized input.
    pub fn maximize_non_clashing_runs(
        &self,
        runs: Vec<ProductionRun>,
        now: DateTime<Utc>,
    ) -> PlannerResult<Vec<ProductionRun>> {
        if runs.len() >= self.limits.max_quantity_of_runs {
            return Err(PlannerError::TooManyRuns {
                count: runs.len(),
                max: self.limits.max_quantity_of_runs,
            });
        }

        let schedulable = filter_schedulable(runs, now, &self.limits);

        let selected: Vec<ProductionRun> = partition_into_clusters(schedulable)
            .iter()
            .flat_map(maximize_cluster)
            .collect();

        info!(selected = selected.len(), "planned non-clashing runs");
        Ok(selected)
    }

    /// Parses a JSON run list and plans it in one call.
    ///
    /// # Errors
    ///
    /// [`PlannerError::Parse`] for a malformed document, or
    /// [`PlannerError::TooManyRuns`] as for
    /// [`maximize_non_clashing_runs`](Self::maximize_non_clashing_runs).
    pub fn maximize_from_json(
        &self,
        json: &str,
        now: DateTime<Utc>,
    ) -> PlannerResult<Vec<ProductionRun>> {
        let runs = parse_runs(json)?;
        self.maximize_non_clashing_runs(runs, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn run(day: u32, duration_days: i64) -> ProductionRun {
        ProductionRun::new(
            Utc.with_ymd_and_hms(2018, 1, day, 0, 0, 0).unwrap(),
            duration_days,
        )
    }

    fn jan(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2018, 1, day, 0, 0, 0).unwrap()
    }

    /// `count` runs of 5 days separated by 3-day gaps, none clashing.
    fn non_clashing_runs(count: usize, from: DateTime<Utc>) -> Vec<ProductionRun> {
        (0..count)
            .map(|i| ProductionRun::new(from + chrono::Duration::days(8 * i as i64), 5))
            .collect()
    }

    #[test]
    fn test_scenario_one_selects_three() {
        let runs = vec![run(2, 5), run(9, 7), run(15, 6), run(9, 3)];
        let selected = Planner::new()
            .maximize_non_clashing_runs(runs, jan(1))
            .unwrap();
        assert_eq!(selected.len(), 3);
    }

    #[test]
    fn test_scenario_two_selects_four() {
        let runs = vec![run(3, 5), run(9, 2), run(24, 5), run(16, 9), run(11, 6)];
        let selected = Planner::new()
            .maximize_non_clashing_runs(runs, jan(1))
            .unwrap();
        assert_eq!(selected.len(), 4);
    }

    #[test]
    fn test_now_after_all_starts_selects_nothing() {
        let runs = vec![run(2, 5), run(9, 7), run(15, 6), run(9, 3)];
        let now = Utc.with_ymd_and_hms(2018, 1, 15, 0, 1, 0).unwrap();
        let selected = Planner::new().maximize_non_clashing_runs(runs, now).unwrap();
        assert!(selected.is_empty());
    }

    #[test]
    fn test_non_clashing_runs_all_kept_regardless_of_order() {
        let runs = non_clashing_runs(6, jan(2));
        let expected: usize = runs.len();

        let mut reversed = runs.clone();
        reversed.reverse();
        let mut rotated = runs.clone();
        rotated.rotate_left(3);

        for input in [runs, reversed, rotated] {
            let mut selected = Planner::new()
                .maximize_non_clashing_runs(input, jan(1))
                .unwrap();
            selected.sort();
            assert_eq!(selected.len(), expected);
            assert_eq!(selected, non_clashing_runs(6, jan(2)));
        }
    }

    #[test]
    fn test_result_is_disjoint_subset_of_input() {
        let runs = vec![run(2, 5), run(9, 7), run(15, 6), run(9, 3)];
        let selected = Planner::new()
            .maximize_non_clashing_runs(runs.clone(), jan(1))
            .unwrap();

        for (i, a) in selected.iter().enumerate() {
            assert!(runs.contains(a));
            for b in selected.iter().skip(i + 1) {
                assert!(!a.clashes_with(b));
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_replanning_own_output_is_stable() {
        let runs = vec![run(3, 5), run(9, 2), run(24, 5), run(16, 9), run(11, 6)];
        let planner = Planner::new();
        let first = planner.maximize_non_clashing_runs(runs, jan(1)).unwrap();
        let mut second = planner
            .maximize_non_clashing_runs(first.clone(), jan(1))
            .unwrap();
        let mut first_sorted = first;
        first_sorted.sort();
        second.sort();
        assert_eq!(second, first_sorted);
    }

    #[test]
    fn test_too_many_runs_is_an_error() {
        let planner = Planner::with_limits(PlannerLimits::new().with_max_quantity_of_runs(3));
        let runs = non_clashing_runs(3, jan(2));
        let err = planner
            .maximize_non_clashing_runs(runs, jan(1))
            .unwrap_err();
        assert!(matches!(
            err,
            PlannerError::TooManyRuns { count: 3, max: 3 }
        ));
    }

    #[test]
    fn test_input_just_under_limit_is_accepted() {
        let planner = Planner::with_limits(PlannerLimits::new().with_max_quantity_of_runs(3));
        let runs = non_clashing_runs(2, jan(2));
        assert!(planner.maximize_non_clashing_runs(runs, jan(1)).is_ok());
    }

    #[test]
    fn test_empty_input() {
        let selected = Planner::new()
            .maximize_non_clashing_runs(vec![], jan(1))
            .unwrap();
        assert!(selected.is_empty());
    }

    #[test]
    fn test_maximize_from_json() {
        let json = r#"[
            { "startingDay": "2018-01-02T00:00:00.000Z", "duration": 5 },
            { "startingDay": "2018-01-09T00:00:00.000Z", "duration": 7 },
            { "startingDay": "2018-01-15T00:00:00.000Z", "duration": 6 },
            { "startingDay": "2018-01-09T00:00:00.000Z", "duration": 3 }
        ]"#;
        let selected = Planner::new().maximize_from_json(json, jan(1)).unwrap();
        assert_eq!(selected.len(), 3);
    }

    #[test]
    fn test_maximize_from_json_malformed() {
        let err = Planner::new()
            .maximize_from_json("not json", jan(1))
            .unwrap_err();
        assert!(matches!(err, PlannerError::Parse(_)));
    }
}
