//! In-memory ontology

use std::collections::{HashMap, HashSet};

use super::OntologyProvider;

/// Ontology held entirely in memory
///
/// Individuals and properties keep their insertion order. Assertions may
/// use properties that were never declared; such assertions are stored but
/// are invisible to anyone enumerating `object_properties()`.
#[derive(Debug, Clone, Default)]
pub struct MemoryOntology {
    individuals: Vec<String>,
    known_individuals: HashSet<String>,
    properties: Vec<String>,
    assertions: HashMap<(String, String), Vec<String>>,
}

impl MemoryOntology {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an individual (no-op if already present)
    pub fn add_individual(&mut self, name: impl Into<String>) -> &mut Self {
        let name = name.into();
        if self.known_individuals.insert(name.clone()) {
            self.individuals.push(name);
        }
        self
    }

    /// Declare an object property (no-op if already declared)
    pub fn add_property(&mut self, name: impl Into<String>) -> &mut Self {
        let name = name.into();
        if !self.properties.contains(&name) {
            self.properties.push(name);
        }
        self
    }

    /// Record `subject property object`, registering both individuals
    pub fn assert_relation(
        &mut self,
        subject: impl Into<String>,
        property: impl Into<String>,
        object: impl Into<String>,
    ) -> &mut Self {
        let subject = subject.into();
        let object = object.into();
        self.add_individual(subject.clone());
        self.add_individual(object.clone());
        self.assertions
            .entry((subject, property.into()))
            .or_default()
            .push(object);
        self
    }

    pub fn is_declared(&self, property: &str) -> bool {
        self.properties.iter().any(|p| p == property)
    }

    /// Properties used in assertions but never declared, sorted
    pub fn undeclared_properties(&self) -> Vec<String> {
        let mut undeclared: Vec<String> = self
            .assertions
            .keys()
            .map(|(_, property)| property)
            .filter(|property| !self.is_declared(property))
            .cloned()
            .collect();
        undeclared.sort();
        undeclared.dedup();
        undeclared
    }
}

impl OntologyProvider for MemoryOntology {
    fn individuals(&self) -> Vec<String> {
        self.individuals.clone()
    }

    fn object_properties(&self) -> Vec<String> {
        self.properties.clone()
    }

    fn related(&self, individual: &str, property: &str) -> Vec<String> {
        self.assertions
            .get(&(individual.to_string(), property.to_string()))
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_registers_individuals_once() {
        let mut ontology = MemoryOntology::new();
        ontology
            .add_property("haPrestito")
            .assert_relation("Anna", "haPrestito", "Prestito1")
            .assert_relation("Anna", "haPrestito", "Prestito2");

        assert_eq!(
            ontology.individuals(),
            vec!["Anna", "Prestito1", "Prestito2"]
        );
        assert_eq!(
            ontology.related("Anna", "haPrestito"),
            vec!["Prestito1", "Prestito2"]
        );
    }

    #[test]
    fn test_related_unknown_is_empty() {
        let mut ontology = MemoryOntology::new();
        ontology.add_property("haPrestito");
        assert!(ontology.related("Nobody", "haPrestito").is_empty());
        assert!(ontology.related("Anna", "nonEsiste").is_empty());
    }

    #[test]
    fn test_undeclared_properties() {
        let mut ontology = MemoryOntology::new();
        ontology
            .add_property("haPrestito")
            .add_property("haPrestito")
            .assert_relation("Anna", "haPrestito", "Prestito1")
            .assert_relation("LibroAI", "scrittoDa", "Turing");

        assert_eq!(ontology.object_properties(), vec!["haPrestito"]);
        assert_eq!(ontology.undeclared_properties(), vec!["scrittoDa"]);
        assert!(!ontology.is_declared("scrittoDa"));
    }
}
