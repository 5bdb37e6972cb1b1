//! Ontology to graph translation

use std::time::Instant;

use crate::config::GraphConfig;
use crate::graph::Graph;
use crate::ontology::OntologyProvider;

/// Builds a `Graph` from an ontology using configured relation weights
pub struct GraphBuilder<'a> {
    config: &'a GraphConfig,
}

impl<'a> GraphBuilder<'a> {
    pub fn new(config: &'a GraphConfig) -> Self {
        Self { config }
    }

    /// Translate every `(individual, property, related)` assertion into an
    /// undirected edge weighted by the property's configured cost.
    ///
    /// Nodes enter the graph only as edge endpoints, so an ontology without
    /// assertions yields an empty graph. Lookups that yield nothing are
    /// skipped.
    #[tracing::instrument(skip(self, ontology))]
    pub fn build(&self, ontology: &dyn OntologyProvider) -> Graph {
        let start = Instant::now();
        let properties = ontology.object_properties();
        let mut graph = Graph::new();

        for subject in ontology.individuals() {
            for property in &properties {
                let related = ontology.related(&subject, property);
                if related.is_empty() {
                    continue;
                }

                let cost = self.config.relation_cost(property);
                for object in related {
                    graph.connect(&subject, &object, cost);
                }
            }
        }

        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            properties = properties.len(),
            "graph built"
        );
        crate::trace_time!(start, "build_graph");

        graph
    }
}

/// Build a graph with the default weights (0.5 for the taxonomy relation, 1.0 otherwise)
pub fn build_graph(ontology: &dyn OntologyProvider) -> Graph {
    GraphBuilder::new(&GraphConfig::default()).build(ontology)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ontology::MemoryOntology;

    fn library() -> MemoryOntology {
        let mut ontology = MemoryOntology::new();
        ontology
            .add_property("haPrestito")
            .add_property("riguardaLibro")
            .add_property("appartieneA")
            .add_property("sottoCategoriaDi")
            .assert_relation("Anna", "haPrestito", "Prestito1")
            .assert_relation("Prestito1", "riguardaLibro", "LibroAI")
            .assert_relation("LibroAI", "appartieneA", "cat_IntelligenzaArtificiale")
            .assert_relation("cat_IntelligenzaArtificiale", "sottoCategoriaDi", "cat_Informatica")
            .assert_relation("cat_Informatica", "sottoCategoriaDi", "cat_Scienze");
        ontology.add_individual("Isolato");
        ontology
    }

    #[test]
    fn test_build_graph_edges_are_symmetric() {
        let graph = build_graph(&library());

        for (from, to, weight) in graph.arcs() {
            assert_eq!(
                graph.edge_weight(to, from),
                Some(weight),
                "missing reverse of {from} -> {to}"
            );
        }
    }

    #[test]
    fn test_build_graph_weights_by_relation() {
        let graph = build_graph(&library());

        assert_eq!(graph.edge_weight("Anna", "Prestito1"), Some(1.0));
        assert_eq!(graph.edge_weight("LibroAI", "cat_IntelligenzaArtificiale"), Some(1.0));
        assert_eq!(
            graph.edge_weight("cat_IntelligenzaArtificiale", "cat_Informatica"),
            Some(0.5)
        );
        assert_eq!(graph.edge_weight("cat_Scienze", "cat_Informatica"), Some(0.5));
        assert_eq!(graph.edge_count(), 5);
    }

    #[test]
    fn test_build_graph_skips_unrelated_individuals() {
        let graph = build_graph(&library());
        assert!(!graph.contains("Isolato"));
        assert_eq!(graph.node_count(), 6);
    }

    #[test]
    fn test_reciprocal_relations_keep_minimum() {
        let mut ontology = MemoryOntology::new();
        ontology
            .add_property("correlata")
            .add_property("sottoCategoriaDi")
            .assert_relation("cat_A", "correlata", "cat_B")
            .assert_relation("cat_B", "sottoCategoriaDi", "cat_A");

        let graph = build_graph(&ontology);
        assert_eq!(graph.edge_weight("cat_A", "cat_B"), Some(0.5));
        assert_eq!(graph.edge_weight("cat_B", "cat_A"), Some(0.5));
    }

    #[test]
    fn test_undeclared_properties_generate_no_edges() {
        let mut ontology = MemoryOntology::new();
        ontology.assert_relation("LibroAI", "scrittoDa", "Turing");

        let graph = build_graph(&ontology);
        assert!(graph.is_empty());
    }

    #[test]
    fn test_empty_ontology_gives_empty_graph() {
        let graph = build_graph(&MemoryOntology::new());
        assert!(graph.is_empty());
    }

    #[test]
    fn test_no_properties_gives_empty_graph() {
        let mut ontology = MemoryOntology::new();
        ontology.add_individual("Anna").add_individual("LibroAI");

        assert!(build_graph(&ontology).is_empty());
    }

    #[test]
    fn test_configured_relation_costs() {
        let mut config = GraphConfig::default();
        config.set_relation_cost("haPrestito", 2.5);

        let graph = GraphBuilder::new(&config).build(&library());
        assert_eq!(graph.edge_weight("Prestito1", "Anna"), Some(2.5));
        assert_eq!(graph.edge_weight("cat_Informatica", "cat_Scienze"), Some(0.5));
    }
}
