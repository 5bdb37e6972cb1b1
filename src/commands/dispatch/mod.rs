//! Command dispatch logic for shelfpath

use std::time::Instant;

use crate::cli::Cli;
use shelfpath_core::error::Result;

mod command;
mod commands;

pub use command::Library;
use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
