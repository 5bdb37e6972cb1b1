use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::Serialize;

/// Kind of a library individual, inferred from its name prefix
///
/// Prefixes are matched case-insensitively: `cat_` is a category, `libro` a
/// book, `prestito` a loan; every other name is a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Category,
    Book,
    Loan,
    Person,
}

impl NodeKind {
    pub const CATEGORY_PREFIX: &'static str = "cat_";
    pub const BOOK_PREFIX: &'static str = "libro";
    pub const LOAN_PREFIX: &'static str = "prestito";

    /// Classify a node identifier by its prefix
    pub fn classify(name: &str) -> Self {
        let lower = name.to_lowercase();
        if lower.starts_with(Self::CATEGORY_PREFIX) {
            NodeKind::Category
        } else if lower.starts_with(Self::BOOK_PREFIX) {
            NodeKind::Book
        } else if lower.starts_with(Self::LOAN_PREFIX) {
            NodeKind::Loan
        } else {
            NodeKind::Person
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Category => "category",
            NodeKind::Book => "book",
            NodeKind::Loan => "loan",
            NodeKind::Person => "person",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weighted undirected adjacency graph
///
/// Every edge is stored in both directions with the same weight; when the
/// same pair is connected more than once the lowest weight wins. Adjacency
/// maps are ordered so neighbor iteration is deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    adjacency: BTreeMap<String, BTreeMap<String, f64>>,
    kinds: HashMap<String, NodeKind>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from undirected `(a, b, weight)` triples
    pub fn from_edges<'a>(edges: impl IntoIterator<Item = (&'a str, &'a str, f64)>) -> Self {
        let mut graph = Self::new();
        for (a, b, weight) in edges {
            graph.connect(a, b, weight);
        }
        graph
    }

    /// Ensure a node exists, caching its kind on first insertion
    pub fn add_node(&mut self, id: &str) {
        if !self.adjacency.contains_key(id) {
            self.adjacency.insert(id.to_string(), BTreeMap::new());
            self.kinds.insert(id.to_string(), NodeKind::classify(id));
        }
    }

    /// Connect two nodes in both directions, keeping the minimum weight
    pub fn connect(&mut self, a: &str, b: &str, weight: f64) {
        self.add_arc(a, b, weight);
        self.add_arc(b, a, weight);
    }

    fn add_arc(&mut self, from: &str, to: &str, weight: f64) {
        self.add_node(from);
        self.add_node(to);

        if let Some(neighbors) = self.adjacency.get_mut(from) {
            let slot = neighbors.entry(to.to_string()).or_insert(weight);
            if weight < *slot {
                *slot = weight;
            }
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Adjacency of a node, `None` if the node is unknown
    pub fn neighbors(&self, id: &str) -> Option<&BTreeMap<String, f64>> {
        self.adjacency.get(id)
    }

    /// Neighbors with weights; empty for unknown nodes
    pub fn neighbor_iter<'a>(&'a self, id: &str) -> impl Iterator<Item = (&'a str, f64)> + 'a {
        self.adjacency
            .get(id)
            .into_iter()
            .flat_map(|neighbors| neighbors.iter().map(|(n, w)| (n.as_str(), *w)))
    }

    pub fn edge_weight(&self, from: &str, to: &str) -> Option<f64> {
        self.adjacency.get(from)?.get(to).copied()
    }

    /// Kind of a node: cached for graph members, classified on the fly otherwise
    pub fn kind(&self, id: &str) -> NodeKind {
        self.kinds
            .get(id)
            .copied()
            .unwrap_or_else(|| NodeKind::classify(id))
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// Directed view of every stored arc
    pub fn arcs(&self) -> impl Iterator<Item = (&str, &str, f64)> {
        self.adjacency.iter().flat_map(|(from, neighbors)| {
            neighbors
                .iter()
                .map(move |(to, w)| (from.as_str(), to.as_str(), *w))
        })
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges (each connected pair counted once)
    pub fn edge_count(&self) -> usize {
        self.arcs().filter(|(from, to, _)| from <= to).count()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}
