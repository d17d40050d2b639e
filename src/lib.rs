//! Production-run planner.
//!
//! Computes the largest possible set of day-granular production runs such
//! that no two selected runs overlap — the classical interval-scheduling
//! problem, generalized to first partition the input into independent
//! clash clusters and then greedily maximize each cluster.
//!
//! # Modules
//!
//! - **`models`**: Value types — `ProductionRun`, `ClashCluster`
//! - **`planner`**: The pipeline — validity filter, cluster partitioner,
//!   greedy maximizer, and the composing `Planner`
//! - **`config`**: Externally supplied numeric limits (`PlannerLimits`)
//! - **`parse`**: JSON run-list deserialization
//! - **`error`**: `PlannerError` — oversized input, malformed document
//!
//! # Pipeline
//!
//! Data flows strictly left to right: filter → partition → maximize →
//! aggregate. The whole computation is synchronous, single-threaded, and
//! deterministic; there is no shared mutable state across calls.
//!
//! # References
//!
//! - Kleinberg & Tardos (2006), "Algorithm Design", Ch. 4.1 (Interval Scheduling)
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 16.1 (Activity Selection)

pub mod config;
pub mod error;
pub mod models;
pub mod parse;
pub mod planner;
