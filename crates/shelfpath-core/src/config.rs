//! Search configuration for shelfpath
//!
//! Configuration is read from an explicit TOML file, or from
//! `~/.config/shelfpath/config.toml` when present. Every field has a
//! default, so an empty file is a valid configuration.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ShelfpathError};

pub use types::{ExperimentConfig, GraphConfig, RelationConfig, SearchConfig, TAXONOMY_RELATION};

const CONFIG_DIR: &str = "shelfpath";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "SHELFPATH_CONFIG_DIR";

impl GraphConfig {
    /// Get the edge weight for a relation
    /// Returns the per-relation override, or the taxonomy cost, or the default cost
    pub fn relation_cost(&self, relation: &str) -> f64 {
        if let Some(relation_config) = self.relations.get(relation) {
            return relation_config.cost;
        }

        if relation == self.taxonomy_relation {
            return self.taxonomy_cost;
        }

        self.default_cost
    }

    /// Set a custom weight for a relation
    pub fn set_relation_cost(&mut self, relation: &str, cost: f64) {
        self.relations
            .entry(relation.to_string())
            .or_default()
            .cost = cost;
    }

    /// Reject weights the search cannot work with
    pub fn validate(&self) -> Result<()> {
        let named = self
            .relations
            .iter()
            .map(|(name, relation)| (name.as_str(), relation.cost));
        let builtin: [(&str, f64); 2] = [
            ("taxonomy_cost", self.taxonomy_cost),
            ("default_cost", self.default_cost),
        ];

        for (name, cost) in builtin.into_iter().chain(named) {
            if !cost.is_finite() || cost < 0.0 {
                crate::bail_invalid!("relation cost", format!("{name} = {cost}"));
            }
        }
        Ok(())
    }
}

impl SearchConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| ShelfpathError::io_operation("read config", path.display(), e))?;
        let config: SearchConfig = toml::from_str(&content)?;
        config.graph.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ShelfpathError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Resolve configuration: explicit path, then the user config file, then defaults
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::user_config_path() {
            Some(path) if path.exists() => {
                tracing::debug!(path = %path.display(), "loading user config");
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    fn user_config_path() -> Option<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = match std::env::var(CONFIG_DIR_ENV_VAR) {
            Ok(env_dir) => PathBuf::from(env_dir),
            Err(_) => dirs::config_dir()?.join(CONFIG_DIR),
        };
        Some(config_dir.join(CONFIG_FILE))
    }
}
