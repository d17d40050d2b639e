//! Cluster partitioner.
//!
//! Sorts valid runs by finish time and splits the sorted sequence into
//! clash clusters: maximal groups connected by a chain of pairwise
//! overlaps. Runs in different clusters never clash, so each cluster can
//! be maximized on its own.
//!
//! # Algorithm
//!
//! One sort, one linear scan. Each run is compared against the immediately
//! preceding sorted run only: a clash extends the current cluster, a gap
//! closes it and opens a new one. The adjacent-pair check is sufficient
//! only because the sequence is sorted by finish time ascending — with any
//! other sort key the scan would miss transitive overlaps.
//!
//! # Complexity
//! O(n log n) sort + O(n) scan.

use tracing::debug;

use crate::models::{ClashCluster, ProductionRun};

/// Partitions runs into clash clusters.
///
/// Every input run lands in exactly one cluster, clusters come out in
/// finish-time order, and runs in different clusters are guaranteed not to
/// clash. An empty input yields no clusters.
pub fn partition_into_clusters(mut runs: Vec<ProductionRun>) -> Vec<ClashCluster> {
    runs.sort();

    let mut clusters: Vec<ClashCluster> = Vec::new();
    let mut iter = runs.into_iter();

    let Some(first) = iter.next() else {
        return clusters;
    };
    let mut current = ClashCluster::new(first);

    for run in iter {
        if run.clashes_with(current.last()) {
            current.push(run);
        } else {
            clusters.push(current);
            current = ClashCluster::new(run);
        }
    }
    clusters.push(current);

    for cluster in clusters.iter().filter(|c| c.len() > 1) {
        debug!(size = cluster.len(), "clash cluster");
    }

    clusters
}
