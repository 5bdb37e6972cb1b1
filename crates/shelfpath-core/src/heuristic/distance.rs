//! Precomputed hop-distance estimate used by experiment batches

use std::collections::HashMap;
use std::time::Instant;

use crate::graph::{bfs_distances, Graph};

/// Unbounded, unfiltered BFS hop counts from a fixed set of source nodes
#[derive(Debug, Clone, Default)]
pub struct DistanceTable {
    distances: HashMap<String, HashMap<String, u32>>,
}

impl DistanceTable {
    /// Run one breadth-first search per node of interest
    pub fn build<'a>(graph: &Graph, interest: impl IntoIterator<Item = &'a str>) -> Self {
        let start = Instant::now();
        let mut distances: HashMap<String, HashMap<String, u32>> = HashMap::new();

        for source in interest {
            if distances.contains_key(source) {
                continue;
            }
            let reached = bfs_distances(graph, [source], u32::MAX, None);
            distances.insert(source.to_string(), reached);
        }

        tracing::debug!(sources = distances.len(), "distance table built");
        crate::trace_time!(start, "distance_table");

        Self { distances }
    }

    /// Hop count from a precomputed source to `to`
    pub fn hops(&self, from: &str, to: &str) -> Option<u32> {
        self.distances.get(from)?.get(to).copied()
    }

    /// 0 at the goal, the recorded hop count when `state` is a source that
    /// reaches `goal`, 1.0 otherwise
    pub fn estimate(&self, state: &str, goal: &str) -> f64 {
        if state == goal {
            return 0.0;
        }
        self.hops(state, goal).map_or(1.0, f64::from)
    }

    pub fn is_source(&self, id: &str) -> bool {
        self.distances.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}
