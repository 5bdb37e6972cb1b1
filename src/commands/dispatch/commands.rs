//! Command implementations for all shelfpath commands

use crate::cli::{Commands, ExperimentArgs, PathArgs, ReachableArgs};
use crate::commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use shelfpath_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Path(args) => execute_path(ctx, args),
            Commands::Nodes => execute_nodes(ctx),
            Commands::Reachable(args) => execute_reachable(ctx, args),
            Commands::Experiment(args) => execute_experiment(ctx, args),
        }
    }
}

fn execute_path(ctx: &CommandContext, args: &PathArgs) -> Result<()> {
    let library = ctx.load_library()?;
    commands::path::execute(ctx.cli, &library, args)
}

fn execute_nodes(ctx: &CommandContext) -> Result<()> {
    let ontology = ctx.load_ontology()?;
    commands::nodes::execute(ctx.cli, &ontology)
}

fn execute_reachable(ctx: &CommandContext, args: &ReachableArgs) -> Result<()> {
    let library = ctx.load_library()?;
    commands::reachable::execute(ctx.cli, &library, args)
}

fn execute_experiment(ctx: &CommandContext, args: &ExperimentArgs) -> Result<()> {
    let library = ctx.load_library()?;
    commands::experiment::execute(ctx.cli, &library, args)
}
