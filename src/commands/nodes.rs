//! `shelfpath nodes` command - individuals grouped by kind

use crate::cli::Cli;
use shelfpath_core::error::Result;
use shelfpath_core::format::OutputFormat;
use shelfpath_core::ontology::{group_by_kind, MemoryOntology};

/// Execute the nodes command
pub fn execute(cli: &Cli, ontology: &MemoryOntology) -> Result<()> {
    let groups = group_by_kind(ontology);

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&groups)?);
        }
        OutputFormat::Human => {
            if groups.is_empty() {
                if !cli.quiet {
                    println!("No individuals found");
                }
                return Ok(());
            }

            let mut first = true;
            for (label, names) in groups.labeled() {
                if names.is_empty() {
                    continue;
                }
                if !first {
                    println!();
                }
                first = false;

                println!("{}:", label);
                for name in names {
                    println!("  {}", name);
                }
            }
        }
    }

    Ok(())
}
