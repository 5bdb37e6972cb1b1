//! Heuristic estimators for the library graph
//!
//! Every estimator is a total function `(state, goal) -> f64` that never
//! returns a negative value:
//! - `null`: always 0, turning A* into uniform-cost search
//! - `base`: 0 at the goal, 1 elsewhere
//! - `taxonomy`: bounded lookahead along person, loan, book and category links
//! - `distance`: hop counts precomputed from a fixed set of nodes

pub mod distance;
pub mod taxonomy;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ShelfpathError;
use crate::graph::{Graph, NodeKind};

pub use distance::DistanceTable;
pub use taxonomy::taxonomy_estimate;

/// Heuristic selectable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeuristicKind {
    Null,
    Base,
    Taxonomy,
    Distance,
}

impl HeuristicKind {
    pub const ALL: [HeuristicKind; 4] = [
        HeuristicKind::Null,
        HeuristicKind::Base,
        HeuristicKind::Taxonomy,
        HeuristicKind::Distance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HeuristicKind::Null => "null",
            HeuristicKind::Base => "base",
            HeuristicKind::Taxonomy => "taxonomy",
            HeuristicKind::Distance => "distance",
        }
    }
}

impl FromStr for HeuristicKind {
    type Err = ShelfpathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "null" => Ok(HeuristicKind::Null),
            "base" => Ok(HeuristicKind::Base),
            "taxonomy" => Ok(HeuristicKind::Taxonomy),
            "distance" => Ok(HeuristicKind::Distance),
            other => Err(ShelfpathError::UnknownHeuristic(other.to_string())),
        }
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn null_heuristic(_state: &str, _goal: &str) -> f64 {
    0.0
}

pub fn base_heuristic(state: &str, goal: &str) -> f64 {
    if state == goal {
        0.0
    } else {
        1.0
    }
}

/// A selected estimator together with the data it reads
#[derive(Debug, Clone, Copy)]
pub enum Heuristic<'g> {
    Null,
    Base,
    Taxonomy(&'g Graph),
    Distance(&'g DistanceTable),
}

impl<'g> Heuristic<'g> {
    pub fn kind(&self) -> HeuristicKind {
        match self {
            Heuristic::Null => HeuristicKind::Null,
            Heuristic::Base => HeuristicKind::Base,
            Heuristic::Taxonomy(_) => HeuristicKind::Taxonomy,
            Heuristic::Distance(_) => HeuristicKind::Distance,
        }
    }

    pub fn estimate(&self, state: &str, goal: &str) -> f64 {
        match self {
            Heuristic::Null => null_heuristic(state, goal),
            Heuristic::Base => base_heuristic(state, goal),
            Heuristic::Taxonomy(graph) => taxonomy_estimate(graph, state, goal),
            Heuristic::Distance(table) => table.estimate(state, goal),
        }
    }

    /// Fix the goal, producing the single-argument form `a_star` expects
    pub fn toward<'a>(&'a self, goal: &'a str) -> impl Fn(&str) -> f64 + 'a {
        move |state: &str| self.estimate(state, goal)
    }
}

/// Resolve a heuristic name into an estimator for `goal`
///
/// The taxonomy estimator only applies to category goals; for any other
/// goal the base heuristic is substituted. The distance estimator needs a
/// precomputed table and also degrades to base without one. Callers can
/// inspect `Heuristic::kind` to see which estimator was actually chosen.
pub fn select_heuristic<'g>(
    kind: HeuristicKind,
    graph: &'g Graph,
    goal: &str,
    table: Option<&'g DistanceTable>,
) -> Heuristic<'g> {
    match kind {
        HeuristicKind::Null => Heuristic::Null,
        HeuristicKind::Base => Heuristic::Base,
        HeuristicKind::Taxonomy => {
            if graph.kind(goal) == NodeKind::Category {
                Heuristic::Taxonomy(graph)
            } else {
                tracing::warn!(goal, "goal is not a category, using base heuristic");
                Heuristic::Base
            }
        }
        HeuristicKind::Distance => match table {
            Some(table) => Heuristic::Distance(table),
            None => {
                tracing::warn!(goal, "no distance table available, using base heuristic");
                Heuristic::Base
            }
        },
    }
}
