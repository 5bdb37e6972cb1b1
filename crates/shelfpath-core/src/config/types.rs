//! Configuration type definitions

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Relation that encodes the category taxonomy in library ontologies
pub const TAXONOMY_RELATION: &str = "sottoCategoriaDi";

/// Search configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Graph building configuration
    #[serde(default)]
    pub graph: GraphConfig,

    /// Batch experiment configuration
    #[serde(default)]
    pub experiment: ExperimentConfig,
}

/// Configuration for translating ontology relations into edge weights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Name of the subcategory relation
    #[serde(default = "default_taxonomy_relation")]
    pub taxonomy_relation: String,

    /// Edge weight for the subcategory relation (default 0.5)
    #[serde(default = "default_taxonomy_cost")]
    pub taxonomy_cost: f64,

    /// Edge weight for every other relation (default 1.0)
    #[serde(default = "default_relation_cost")]
    pub default_cost: f64,

    /// Per-relation overrides
    #[serde(default)]
    pub relations: HashMap<String, RelationConfig>,
}

/// Configuration for a single relation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationConfig {
    /// Edge weight for this relation
    #[serde(default = "default_relation_cost")]
    pub cost: f64,
}

/// Configuration for the experiment runner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Runs per (case, heuristic) pair
    #[serde(default = "default_repetitions")]
    pub repetitions: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            taxonomy_relation: default_taxonomy_relation(),
            taxonomy_cost: default_taxonomy_cost(),
            default_cost: default_relation_cost(),
            relations: HashMap::new(),
        }
    }
}

impl Default for RelationConfig {
    fn default() -> Self {
        Self {
            cost: default_relation_cost(),
        }
    }
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            repetitions: default_repetitions(),
        }
    }
}

fn default_taxonomy_relation() -> String {
    TAXONOMY_RELATION.to_string()
}

fn default_taxonomy_cost() -> f64 {
    0.5
}

fn default_relation_cost() -> f64 {
    1.0
}

fn default_repetitions() -> usize {
    6
}
