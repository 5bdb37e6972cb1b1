//! Breadth-first distance queries
//!
//! Distances count edges, not weights. A filter restricts both the sources
//! and every node the traversal may pass through.


use std::collections::{HashMap, HashSet, VecDeque};

use crate::graph::Graph;

/// Predicate deciding whether a node may be visited
pub type NodeFilter<'a> = &'a dyn Fn(&str) -> bool;

/// Multi-source breadth-first search bounded by `max_hops`
///
/// Returns the hop distance of every node reached. Sources rejected by the
/// filter are dropped; nodes at `max_hops` are recorded but not expanded.
/// The first distance recorded for a node is final.
pub fn bfs_distances<'s>(
    graph: &Graph,
    sources: impl IntoIterator<Item = &'s str>,
    max_hops: u32,
    filter: Option<NodeFilter<'_>>,
) -> HashMap<String, u32> {
    let passes = |id: &str| filter.is_none_or(|accept| accept(id));

    let mut distances: HashMap<String, u32> = HashMap::new();
    let mut queue: VecDeque<(String, u32)> = VecDeque::new();

    for source in sources {
        if !passes(source) || distances.contains_key(source) {
            continue;
        }
        distances.insert(source.to_string(), 0);
        queue.push_back((source.to_string(), 0));
    }

    while let Some((current, hops)) = queue.pop_front() {
        if hops >= max_hops {
            continue;
        }

        for (neighbor, _) in graph.neighbor_iter(&current) {
            if !passes(neighbor) || distances.contains_key(neighbor) {
                continue;
            }
            distances.insert(neighbor.to_string(), hops + 1);
            queue.push_back((neighbor.to_string(), hops + 1));
        }
    }

    distances
}

/// Sample of nodes reachable from `start`, sorted by name
///
/// Traversal stops once `limit` nodes (the start included) have been seen;
/// the start itself is not part of the result.
pub fn reachable_sample(graph: &Graph, start: &str, limit: usize) -> Vec<String> {
    let mut visited: HashSet<&str> = HashSet::from([start]);
    let mut queue: VecDeque<&str> = VecDeque::from([start]);

    'outer: while let Some(current) = queue.pop_front() {
        if visited.len() >= limit {
            break;
        }

        for (neighbor, _) in graph.neighbor_iter(current) {
            if visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
            if visited.len() >= limit {
                break 'outer;
            }
        }
    }

    visited.remove(start);
    let mut sample: Vec<String> = visited.into_iter().map(str::to_string).collect();
    sample.sort();
    sample
}
