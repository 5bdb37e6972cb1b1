//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::Cli;
use shelfpath_core::config::SearchConfig;
use shelfpath_core::error::{Result, ShelfpathError};
use shelfpath_core::ontology::{load_ontology, MemoryOntology, OntologyProvider};
use shelfpath_core::{Graph, GraphBuilder};

/// Ontology, configuration and the graph built from them
pub struct Library {
    pub config: SearchConfig,
    pub ontology: MemoryOntology,
    pub graph: Graph,
}

impl Library {
    /// Fail with a data error unless `id` names an individual or graph node
    pub fn require_node(&self, id: &str) -> Result<()> {
        if self.graph.contains(id) || self.ontology.individuals().iter().any(|i| i == id) {
            Ok(())
        } else {
            Err(ShelfpathError::NodeNotFound { id: id.to_string() })
        }
    }
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    pub fn load_ontology(&self) -> Result<MemoryOntology> {
        let Some(path) = &self.cli.ontology else {
            shelfpath_core::bail_usage!(
                "no ontology given (use --ontology or set SHELFPATH_ONTOLOGY)"
            );
        };
        let ontology = load_ontology(path)?;
        tracing::debug!(elapsed = ?self.start.elapsed(), "load_ontology");
        Ok(ontology)
    }

    /// Load config and ontology, then build the graph
    pub fn load_library(&self) -> Result<Library> {
        let config = SearchConfig::resolve(self.cli.config.as_deref())?;
        let ontology = self.load_ontology()?;
        let graph = GraphBuilder::new(&config.graph).build(&ontology);
        tracing::debug!(elapsed = ?self.start.elapsed(), "build_graph");

        Ok(Library {
            config,
            ontology,
            graph,
        })
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("shelfpath {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Least-cost paths through a library knowledge graph.");
        println!();
        println!("Run `shelfpath --help` for usage information.");
        Ok(())
    }
}
