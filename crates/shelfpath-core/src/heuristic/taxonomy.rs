//! Taxonomy-aware estimate toward a category goal
//!
//! The estimate follows the shape of the library data: a person reaches a
//! loan, a loan reaches a book, a book reaches a category, and categories
//! are linked by the subcategory relation. Each step is a breadth-first hop
//! count over the node kinds that step may cross.
//!
//! The fallback constants are tie-breakers rather than proven lower bounds,
//! so the estimate is not admissible on every topology.

use crate::graph::{bfs_distances, Graph, NodeKind};

/// Hop cap when walking the category taxonomy
pub const CATEGORY_HOPS: u32 = 30;
/// Hop cap from a book to the categories it belongs to
pub const BOOK_HOPS: u32 = 3;
/// Hop cap from a loan to the books it concerns
pub const LOAN_HOPS: u32 = 4;
/// Hop cap from a person to their loans
pub const PERSON_HOPS: u32 = 3;

pub const CATEGORY_FALLBACK: f64 = 2.0;
pub const BOOK_FALLBACK: f64 = 2.0;
pub const LOAN_FALLBACK: f64 = 3.0;
pub const PERSON_FALLBACK: f64 = 4.0;
/// Returned when the goal is not a category
pub const NON_CATEGORY_GOAL: f64 = 1.0;

/// Estimate the cost from `state` to the category `goal`
pub fn taxonomy_estimate(graph: &Graph, state: &str, goal: &str) -> f64 {
    if state == goal {
        return 0.0;
    }
    if graph.kind(goal) != NodeKind::Category {
        return NON_CATEGORY_GOAL;
    }

    match graph.kind(state) {
        NodeKind::Category => {
            category_hops(graph, state, goal).map_or(CATEGORY_FALLBACK, f64::from)
        }
        NodeKind::Book => from_book(graph, state, goal),
        NodeKind::Loan => from_loan(graph, state, goal),
        NodeKind::Person => from_person(graph, state, goal),
    }
}

/// Hops from one category to another through categories only
fn category_hops(graph: &Graph, from: &str, goal: &str) -> Option<u32> {
    let is_category = |id: &str| graph.kind(id) == NodeKind::Category;
    bfs_distances(graph, [from], CATEGORY_HOPS, Some(&is_category))
        .get(goal)
        .copied()
}

fn from_book(graph: &Graph, book: &str, goal: &str) -> f64 {
    let passable = |id: &str| matches!(graph.kind(id), NodeKind::Book | NodeKind::Category);
    let reached = bfs_distances(graph, [book], BOOK_HOPS, Some(&passable));

    reached
        .iter()
        .filter(|(id, _)| graph.kind(id) == NodeKind::Category)
        .filter_map(|(category, &hops)| {
            category_hops(graph, category, goal).map(|rest| f64::from(hops + rest))
        })
        .min_by(f64::total_cmp)
        .unwrap_or(BOOK_FALLBACK)
}

fn from_loan(graph: &Graph, loan: &str, goal: &str) -> f64 {
    let passable = |id: &str| {
        matches!(
            graph.kind(id),
            NodeKind::Loan | NodeKind::Book | NodeKind::Category
        )
    };
    let reached = bfs_distances(graph, [loan], LOAN_HOPS, Some(&passable));

    reached
        .iter()
        .filter(|(id, _)| graph.kind(id) == NodeKind::Book)
        .map(|(book, &hops)| f64::from(hops) + taxonomy_estimate(graph, book, goal))
        .min_by(f64::total_cmp)
        .unwrap_or(LOAN_FALLBACK)
}

fn from_person(graph: &Graph, person: &str, goal: &str) -> f64 {
    let passable = |id: &str| matches!(graph.kind(id), NodeKind::Person | NodeKind::Loan);
    let reached = bfs_distances(graph, [person], PERSON_HOPS, Some(&passable));

    reached
        .iter()
        .filter(|(id, _)| graph.kind(id) == NodeKind::Loan)
        .map(|(loan, &hops)| f64::from(hops) + taxonomy_estimate(graph, loan, goal))
        .min_by(f64::total_cmp)
        .unwrap_or(PERSON_FALLBACK)
}
