//! # graph-partitioner
//!
//! Partitions a labeled, directed graph into a user-specified number of
//! vertex-disjoint partitions for downstream distributed graph-learning
//! workloads.
//!
//! The core is two tightly coupled algorithms: [`partitioner::broadcast`]
//! (a concurrent multi-source K-hop BFS that claims every reachable vertex
//! for the first role-labeled source to reach it) and
//! [`partitioner::assign`] (a greedy, score-maximizing placement of the
//! resulting blocks into partitions). Everything else — tabular I/O, CLI
//! parsing, directory creation — lives alongside it in [`partitioner`].

pub mod config;
pub mod error;
pub mod partitioner;

pub use error::{PartitionError, Result};
