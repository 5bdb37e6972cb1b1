//! Informed best-first search
//!
//! - `problem`: the initial state / goal test / successor abstraction
//! - `node`: per-run arena of search nodes linked to their parents
//! - `astar`: A* with lazy deletion and insertion-order tie-breaking

pub mod astar;
pub mod node;
pub mod problem;

pub use astar::{a_star, SearchOutcome};
pub use node::{NodeArena, NodeId, SearchNode};
pub use problem::{GraphProblem, SearchProblem, Successors};
