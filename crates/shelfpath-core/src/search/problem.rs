use std::collections::HashSet;

use crate::graph::Graph;

/// Lazily produced `(neighbor, edge_cost)` pairs
pub type Successors<'a> = Box<dyn Iterator<Item = (String, f64)> + 'a>;

/// Trait describing a search problem independently of where its states come from
pub trait SearchProblem {
    fn initial_state(&self) -> String;
    fn is_goal(&self, state: &str) -> bool;
    /// Neighbors of `state` with edge costs; empty for states with no exits
    fn successors(&self, state: &str) -> Successors<'_>;
}

/// Path-finding problem over a `Graph`
#[derive(Debug, Clone)]
pub struct GraphProblem<'g> {
    graph: &'g Graph,
    start: String,
    goals: HashSet<String>,
}

impl<'g> GraphProblem<'g> {
    pub fn new<S: ToString>(
        graph: &'g Graph,
        start: impl ToString,
        goals: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            graph,
            start: start.to_string(),
            goals: goals.into_iter().map(|g| g.to_string()).collect(),
        }
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn goals(&self) -> &HashSet<String> {
        &self.goals
    }
}

impl SearchProblem for GraphProblem<'_> {
    fn initial_state(&self) -> String {
        self.start.clone()
    }

    fn is_goal(&self, state: &str) -> bool {
        self.goals.contains(state)
    }

    fn successors(&self, state: &str) -> Successors<'_> {
        Box::new(
            self.graph
                .neighbor_iter(state)
                .map(|(neighbor, cost)| (neighbor.to_string(), cost)),
        )
    }
}
