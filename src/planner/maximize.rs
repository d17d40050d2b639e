//! Greedy maximizer.
//!
//! Selects the maximum-cardinality subset of non-overlapping runs within a
//! single clash cluster using earliest-finish-time greedy selection: walk
//! the runs in finish-time order and accept each one that clashes with no
//! run accepted so far.
//!
//! # Why greedy is enough
//!
//! The feasible run that finishes earliest is always part of some optimal
//! solution (exchange argument), so taking it and recursing on the rest
//! maximizes the count. No subset enumeration is needed; a singleton is
//! always feasible, so the result is never empty for a non-empty cluster.
//!
//! # Reference
//! Kleinberg & Tardos (2006), "Algorithm Design", Ch. 4.1 (Interval Scheduling)

use crate::models::{ClashCluster, ProductionRun};

/// Selects the largest non-clashing subset of a cluster's runs.
///
/// The cluster arrives pre-sorted from partitioning, but the sort is
/// re-asserted so the contract holds for standalone callers. Rejected runs
/// are discarded permanently, never reconsidered.
pub fn maximize_cluster(cluster: &ClashCluster) -> Vec<ProductionRun> {
    let mut runs = cluster.runs().to_vec();
    runs.sort();

    let mut selected: Vec<ProductionRun> = Vec::new();
    for run in runs {
        if selected.iter().all(|kept| !kept.clashes_with(&run)) {
            selected.push(run);
        }
    }

    selected
}
