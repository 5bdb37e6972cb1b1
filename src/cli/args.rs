//! Command argument structures

use std::path::PathBuf;

use clap::Args;

use shelfpath_core::experiment::ExperimentCase;
use shelfpath_core::heuristic::HeuristicKind;

use crate::cli::parse::{parse_case, parse_heuristic};

/// Arguments for the path command.
#[derive(Args, Debug)]
pub struct PathArgs {
    /// Start individual
    pub start: String,

    /// Goal individual
    pub goal: String,

    /// Heuristic: null, base, taxonomy or distance
    #[arg(long, short = 'H', default_value = "taxonomy", value_parser = parse_heuristic)]
    pub heuristic: HeuristicKind,
}

/// Arguments for the reachable command.
#[derive(Args, Debug)]
pub struct ReachableArgs {
    /// Start individual
    pub start: String,

    /// Maximum number of nodes visited, the start included
    #[arg(long, default_value_t = 15)]
    pub limit: usize,
}

/// Arguments for the experiment command.
#[derive(Args, Debug)]
pub struct ExperimentArgs {
    /// Case to run, as START:GOAL (can be specified multiple times)
    #[arg(long = "case", required = true, value_parser = parse_case)]
    pub cases: Vec<ExperimentCase>,

    /// Heuristic to compare (can be specified multiple times; default: all)
    #[arg(long = "heuristic", short = 'H', value_parser = parse_heuristic)]
    pub heuristics: Vec<HeuristicKind>,

    /// Runs per case and heuristic (default from config)
    #[arg(long)]
    pub repetitions: Option<usize>,

    /// Write the JSON report to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}
