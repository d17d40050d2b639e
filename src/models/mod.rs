//! Planning domain models.
//!
//! Provides the value types the planner operates on: the `ProductionRun`
//! interval and the `ClashCluster` grouping produced by partitioning.
//! Runs are immutable after construction; algorithms only reorder or
//! select them.

mod cluster;
mod run;

pub use cluster::ClashCluster;
pub use run::ProductionRun;
