//! Shelfpath Core Library
//!
//! Turns an ontology of library individuals (people, loans, books and
//! categories) into a weighted undirected graph and finds least-cost paths
//! over it with A* guided by taxonomy-aware heuristics.

pub mod config;
pub mod error;
pub mod experiment;
pub mod format;
pub mod graph;
pub mod heuristic;
pub mod logging;
pub mod ontology;
pub mod search;

pub use graph::{build_graph, Graph, GraphBuilder, NodeKind};
pub use heuristic::{select_heuristic, Heuristic, HeuristicKind};
pub use ontology::OntologyProvider;
pub use search::{a_star, GraphProblem, SearchOutcome, SearchProblem};
