//! Ontology access for graph building
//!
//! The graph builder only needs three questions answered: which individuals
//! exist, which object properties exist, and which individuals a given
//! individual is related to through a property. Providers answer the last
//! one with "result or empty": an unknown individual or property is simply
//! unrelated to anything.

pub mod document;
pub mod memory;

use serde::Serialize;

use crate::graph::NodeKind;

pub use document::{load_ontology, OntologyDocument};
pub use memory::MemoryOntology;

/// Trait for providing ontology individuals and object property assertions
pub trait OntologyProvider {
    fn individuals(&self) -> Vec<String>;
    fn object_properties(&self) -> Vec<String>;
    fn related(&self, individual: &str, property: &str) -> Vec<String>;
}

/// Individuals grouped by kind, each group sorted by name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NodeGroups {
    pub persons: Vec<String>,
    pub books: Vec<String>,
    pub categories: Vec<String>,
    pub loans: Vec<String>,
}

impl NodeGroups {
    /// Iterate groups in display order with their labels
    pub fn labeled(&self) -> [(&'static str, &[String]); 4] {
        [
            ("Persons", self.persons.as_slice()),
            ("Books", self.books.as_slice()),
            ("Categories", self.categories.as_slice()),
            ("Loans", self.loans.as_slice()),
        ]
    }

    pub fn len(&self) -> usize {
        self.persons.len() + self.books.len() + self.categories.len() + self.loans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Group the ontology's individuals by their kind
pub fn group_by_kind(ontology: &dyn OntologyProvider) -> NodeGroups {
    let mut groups = NodeGroups::default();

    for name in ontology.individuals() {
        let bucket = match NodeKind::classify(&name) {
            NodeKind::Person => &mut groups.persons,
            NodeKind::Book => &mut groups.books,
            NodeKind::Category => &mut groups.categories,
            NodeKind::Loan => &mut groups.loans,
        };
        bucket.push(name);
    }

    for group in [
        &mut groups.persons,
        &mut groups.books,
        &mut groups.categories,
        &mut groups.loans,
    ] {
        group.sort();
        group.dedup();
    }

    groups
}
