//! Weighted undirected graph derived from an ontology
//!
//! Provides:
//! - `Graph` with node kinds cached at insertion time
//! - `GraphBuilder` translating object property assertions into edges
//! - restricted breadth-first distance queries used by the heuristics

pub mod bfs;
pub mod builder;
pub mod types;

pub use bfs::{bfs_distances, reachable_sample, NodeFilter};
pub use builder::{build_graph, GraphBuilder};
pub use types::{Graph, NodeKind};
