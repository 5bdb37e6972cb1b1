//! Serialized ontology documents
//!
//! An ontology document lists the declared object properties and, for each
//! individual, the individuals it relates to through each property:
//!
//! ```json
//! {
//!   "object_properties": ["haPrestito", "sottoCategoriaDi"],
//!   "individuals": {
//!     "Anna": { "haPrestito": ["Prestito1"] },
//!     "cat_Fiabe": {}
//!   }
//! }
//! ```
//!
//! The same shape is accepted as JSON, YAML or TOML, chosen by file extension.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::MemoryOntology;
use crate::error::{Result, ShelfpathError};

const SUPPORTED_EXTENSIONS: &str = "json, yaml, yml, toml";

/// On-disk ontology layout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OntologyDocument {
    /// Declared object properties
    #[serde(default)]
    pub object_properties: Vec<String>,

    /// individual -> property -> related individuals
    #[serde(default)]
    pub individuals: BTreeMap<String, BTreeMap<String, Vec<String>>>,
}

impl OntologyDocument {
    /// Read and parse a document, choosing the parser by extension
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ShelfpathError::OntologyNotFound {
                path: path.to_path_buf(),
            });
        }

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .unwrap_or_default();

        let content = fs::read_to_string(path)
            .map_err(|e| ShelfpathError::io_operation("read ontology", path.display(), e))?;

        let parsed = match extension.as_str() {
            "json" => Self::from_json(&content),
            "yaml" | "yml" => Self::from_yaml(&content),
            "toml" => Self::from_toml(&content),
            other => crate::bail_unsupported!("ontology format", other, SUPPORTED_EXTENSIONS),
        };

        parsed.map_err(|e| ShelfpathError::InvalidOntology {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Build the in-memory ontology described by this document
    ///
    /// Related individuals that have no entry of their own are still
    /// registered as individuals.
    pub fn into_ontology(self) -> MemoryOntology {
        let mut ontology = MemoryOntology::new();

        for property in self.object_properties {
            ontology.add_property(property);
        }

        for (subject, relations) in self.individuals {
            ontology.add_individual(subject.clone());
            for (property, objects) in relations {
                for object in objects {
                    ontology.assert_relation(subject.clone(), property.clone(), object);
                }
            }
        }

        for property in ontology.undeclared_properties() {
            tracing::warn!(
                property = %property,
                "property is not declared as an object property; its assertions are ignored"
            );
        }

        ontology
    }
}

/// Load an ontology file straight into memory
pub fn load_ontology(path: &Path) -> Result<MemoryOntology> {
    Ok(OntologyDocument::load(path)?.into_ontology())
}
