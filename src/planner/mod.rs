//! Run planning pipeline.
//!
//! Maximizes the number of pairwise non-overlapping production runs in four
//! stages, each a pure function of its input:
//!
//! 1. **Filter** ([`filter::filter_schedulable`]): drop runs that already
//!    started or carry an out-of-bounds duration.
//! 2. **Partition** ([`partition::partition_into_clusters`]): sort by finish
//!    time and split into independent clash clusters.
//! 3. **Maximize** ([`maximize::maximize_cluster`]): earliest-finish-time
//!    greedy selection within each cluster.
//! 4. **Aggregate** ([`Planner`]): concatenate the per-cluster selections.
//!
//! The greedy stage is optimal for unweighted interval scheduling, so no
//! subset enumeration is ever performed.
//!
//! # References
//!
//! - Kleinberg & Tardos (2006), "Algorithm Design", Ch. 4.1
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 16.1 (Activity Selection)

pub mod filter;
pub mod maximize;
pub mod partition;

mod engine;

pub use engine::Planner;

use crate::models::ProductionRun;

/// Whether two runs overlap, boundary days included.
///
/// Standalone form of [`ProductionRun::clashes_with`] for callers that need
/// an ad-hoc overlap check. Symmetric in its arguments.
pub fn is_clash(a: &ProductionRun, b: &ProductionRun) -> bool {
    a.clashes_with(b)
}
