//! CLI argument parsing for shelfpath
//!
//! Global flags: --ontology, --config, --format, --quiet, --verbose,
//! --log-level, --log-json

pub mod args;
pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use shelfpath_core::format::OutputFormat;

pub use args::{ExperimentArgs, PathArgs, ReachableArgs};
use parse::parse_format;

/// Shelfpath - least-cost paths through a library knowledge graph
#[derive(Parser, Debug)]
#[command(name = "shelfpath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Ontology document (.json, .yaml, .yml or .toml)
    #[arg(long, global = true, env = "SHELFPATH_ONTOLOGY")]
    pub ontology: Option<PathBuf>,

    /// Configuration file (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directives (e.g. "debug", "shelfpath_core=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find a least-cost path between two individuals
    Path(PathArgs),

    /// List individuals grouped by kind
    Nodes,

    /// Show a breadth-first sample of nodes reachable from a start node
    Reachable(ReachableArgs),

    /// Run timed searches over several cases and heuristics
    Experiment(ExperimentArgs),
}
