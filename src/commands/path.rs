//! `shelfpath path` command - least-cost path between two individuals
//!
//! When no path exists, a breadth-first sample of the nodes reachable from
//! the start is shown instead.

use crate::cli::{Cli, PathArgs};
use crate::commands::dispatch::Library;
use shelfpath_core::error::Result;
use shelfpath_core::experiment::PATH_SEPARATOR;
use shelfpath_core::format::OutputFormat;
use shelfpath_core::graph::reachable_sample;
use shelfpath_core::heuristic::{DistanceTable, HeuristicKind};
use shelfpath_core::{a_star, select_heuristic, GraphProblem, SearchOutcome};

/// Nodes visited when suggesting alternatives for an unreachable goal
pub const REACHABLE_SAMPLE: usize = 15;

/// Execute the path command
pub fn execute(cli: &Cli, library: &Library, args: &PathArgs) -> Result<()> {
    library.require_node(&args.start)?;
    library.require_node(&args.goal)?;

    let graph = &library.graph;
    let table = (args.heuristic == HeuristicKind::Distance)
        .then(|| DistanceTable::build(graph, [args.start.as_str(), args.goal.as_str()]));
    let heuristic = select_heuristic(args.heuristic, graph, &args.goal, table.as_ref());

    let problem = GraphProblem::new(graph, &args.start, [&args.goal]);
    let outcome = a_star(&problem, heuristic.toward(&args.goal));

    let reachable = if outcome.found() {
        Vec::new()
    } else {
        reachable_sample(graph, &args.start, REACHABLE_SAMPLE)
    };

    match cli.format {
        OutputFormat::Json => output_json(args, heuristic.kind(), &outcome, &reachable)?,
        OutputFormat::Human => output_human(cli, args, heuristic.kind(), &outcome, &reachable),
    }

    Ok(())
}

fn output_json(
    args: &PathArgs,
    effective: HeuristicKind,
    outcome: &SearchOutcome,
    reachable: &[String],
) -> Result<()> {
    let mut json = serde_json::json!({
        "start": args.start,
        "goal": args.goal,
        "heuristic": effective,
        "requested_heuristic": args.heuristic,
        "found": outcome.found(),
        "path": outcome.path,
        "cost": outcome.cost,
        "expansions": outcome.expansions,
    });

    if !outcome.found() {
        if let Some(obj) = json.as_object_mut() {
            obj.insert("reachable".to_string(), serde_json::json!(reachable));
        }
    }

    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

fn output_human(
    cli: &Cli,
    args: &PathArgs,
    effective: HeuristicKind,
    outcome: &SearchOutcome,
    reachable: &[String],
) {
    let (Some(path), Some(cost)) = (&outcome.path, outcome.cost) else {
        println!("No path from {} to {}", args.start, args.goal);
        if cli.quiet {
            return;
        }
        println!("Expansions: {}", outcome.expansions);
        if !reachable.is_empty() {
            println!();
            println!("Reachable from {}:", args.start);
            for node in reachable {
                println!("  - {}", node);
            }
        }
        return;
    };

    if cli.quiet {
        println!("{}", path.join(PATH_SEPARATOR));
        return;
    }

    println!(
        "Path from {} to {} (heuristic: {})",
        args.start, args.goal, effective
    );
    println!();
    for (i, node) in path.iter().enumerate() {
        println!("  {}. {}", i + 1, node);
    }
    println!();
    println!("{}", path.join(PATH_SEPARATOR));
    println!("Cost: {}", cost);
    println!("Expansions: {}", outcome.expansions);
}
