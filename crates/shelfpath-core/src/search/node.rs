//! Search nodes and their per-run arena
//!
//! A node refers to its parent by index into the arena that owns it, so the
//! ancestry chain of any node stays valid for the whole search run even
//! after the frontier has discarded the entries pointing at it.

/// Index of a node inside its `NodeArena`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Immutable search tree node
#[derive(Debug, Clone, PartialEq)]
pub struct SearchNode {
    pub state: String,
    pub parent: Option<NodeId>,
    /// Accumulated cost from the root
    pub cost: f64,
}

/// Owner of every node created during one search run
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, state: String, parent: Option<NodeId>, cost: f64) -> NodeId {
        self.nodes.push(SearchNode {
            state,
            parent,
            cost,
        });
        NodeId(self.nodes.len() - 1)
    }

    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// States from the root down to `id`
    pub fn path_to(&self, id: NodeId) -> Vec<String> {
        let mut path = Vec::new();
        let mut current = Some(id);

        while let Some(node_id) = current {
            let node = self.get(node_id);
            path.push(node.state.clone());
            current = node.parent;
        }

        path.reverse();
        path
    }
}
