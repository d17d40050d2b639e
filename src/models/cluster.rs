//! Clash cluster model.
//!
//! A cluster is a maximal group of runs connected by a chain of pairwise
//! overlaps after finish-time sorting. Runs in different clusters can never
//! conflict, so the planner maximizes each cluster independently and
//! concatenates the results.
//!
//! Clusters partition the filtered input: every run belongs to exactly one
//! cluster, and clusters are never merged or split after construction.

use crate::models::ProductionRun;

/// An ordered group of mutually reachable overlapping runs.
///
/// Runs appear in finish-time sort order; each run after the first clashes
/// with the run immediately before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClashCluster {
    runs: Vec<ProductionRun>,
}

impl ClashCluster {
    /// Creates a cluster seeded with its first run.
    pub fn new(first: ProductionRun) -> Self {
        Self { runs: vec![first] }
    }

    /// Appends a run that clashes with the current last run.
    pub fn push(&mut self, run: ProductionRun) {
        self.runs.push(run);
    }

    /// The runs in this cluster, in finish-time order.
    pub fn runs(&self) -> &[ProductionRun] {
        &self.runs
    }

    /// The most recently appended run.
    pub fn last(&self) -> &ProductionRun {
        // Invariant: a cluster is never empty
        self.runs.last().unwrap()
    }

    /// Number of runs in this cluster.
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    /// Whether the cluster is empty. Never true for a constructed cluster.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}
