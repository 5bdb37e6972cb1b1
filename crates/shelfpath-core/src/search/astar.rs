use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};
use std::time::Instant;

use serde::Serialize;

use crate::search::node::{NodeArena, NodeId};
use crate::search::problem::SearchProblem;


/// Frontier entry ordered by `f = g + h`, then by insertion order
#[derive(Debug, Clone, Copy)]
pub struct HeapEntry {
    pub priority: f64,
    pub sequence: u64,
    pub node: NodeId,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

/// Result of one A* run
///
/// `path` and `cost` are both `None` when no goal is reachable; `expansions`
/// counts the non-goal nodes popped and processed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
    pub path: Option<Vec<String>>,
    pub cost: Option<f64>,
    pub expansions: usize,
}

impl SearchOutcome {
    fn not_found(expansions: usize) -> Self {
        Self {
            path: None,
            cost: None,
            expansions,
        }
    }

    pub fn found(&self) -> bool {
        self.path.is_some()
    }

    /// Number of states on the path, including both endpoints
    pub fn path_length(&self) -> Option<usize> {
        self.path.as_ref().map(Vec::len)
    }

    pub fn into_parts(self) -> (Option<Vec<String>>, Option<f64>, usize) {
        (self.path, self.cost, self.expansions)
    }
}

/// A* search from the problem's initial state to any goal state
///
/// The best known cost of each state only ever decreases; frontier entries
/// made stale by a later improvement are skipped when popped. Equal `f`
/// values pop in insertion order, so repeated runs on the same input
/// produce the same path.
#[tracing::instrument(skip(problem, heuristic))]
pub fn a_star<P, H>(problem: &P, mut heuristic: H) -> SearchOutcome
where
    P: SearchProblem + ?Sized,
    H: FnMut(&str) -> f64,
{
    let start_time = Instant::now();
    let start = problem.initial_state();

    let mut arena = NodeArena::new();
    let mut frontier: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();
    let mut best_costs: HashMap<String, f64> = HashMap::new();
    let mut sequence: u64 = 0;
    let mut expansions: usize = 0;

    let root_priority = heuristic(&start);
    best_costs.insert(start.clone(), 0.0);
    let root = arena.push(start, None, 0.0);
    frontier.push(Reverse(HeapEntry {
        priority: root_priority,
        sequence,
        node: root,
    }));

    while let Some(Reverse(entry)) = frontier.pop() {
        let node = arena.get(entry.node);
        let current_cost = node.cost;

        if best_costs
            .get(&node.state)
            .is_some_and(|&known| current_cost > known)
        {
            continue;
        }

        if problem.is_goal(&node.state) {
            let path = arena.path_to(entry.node);
            tracing::debug!(
                goal = %node.state,
                cost = current_cost,
                expansions,
                generated = arena.len(),
                "goal reached"
            );
            crate::trace_time!(start_time, "a_star", expansions = expansions);
            return SearchOutcome {
                path: Some(path),
                cost: Some(current_cost),
                expansions,
            };
        }

        expansions += 1;
        tracing::trace!(state = %node.state, g = current_cost, f = entry.priority, "expand");

        for (successor, edge_cost) in problem.successors(&node.state) {
            let candidate = current_cost + edge_cost;
            let improves = best_costs
                .get(&successor)
                .is_none_or(|&known| candidate < known);
            if !improves {
                continue;
            }

            best_costs.insert(successor.clone(), candidate);
            sequence += 1;
            let priority = candidate + heuristic(&successor);
            let child = arena.push(successor, Some(entry.node), candidate);
            frontier.push(Reverse(HeapEntry {
                priority,
                sequence,
                node: child,
            }));
        }
    }

    tracing::debug!(expansions, generated = arena.len(), "frontier exhausted");
    crate::trace_time!(start_time, "a_star", expansions = expansions);
    SearchOutcome::not_found(expansions)
}
