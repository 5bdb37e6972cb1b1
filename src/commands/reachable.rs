//! `shelfpath reachable` command - breadth-first sample around a node

use crate::cli::{Cli, ReachableArgs};
use crate::commands::dispatch::Library;
use shelfpath_core::error::Result;
use shelfpath_core::format::OutputFormat;
use shelfpath_core::graph::reachable_sample;

/// Execute the reachable command
pub fn execute(cli: &Cli, library: &Library, args: &ReachableArgs) -> Result<()> {
    library.require_node(&args.start)?;
    if args.limit == 0 {
        shelfpath_core::bail_invalid!("limit", args.limit);
    }

    let nodes = reachable_sample(&library.graph, &args.start, args.limit);

    match cli.format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "start": args.start,
                "limit": args.limit,
                "nodes": nodes,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Human => {
            if nodes.is_empty() {
                if !cli.quiet {
                    println!("No nodes reachable from {}", args.start);
                }
                return Ok(());
            }
            for node in &nodes {
                println!("{} ({})", node, library.graph.kind(node));
            }
        }
    }

    Ok(())
}
