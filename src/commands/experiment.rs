//! `shelfpath experiment` command - timed batch of searches
//!
//! Runs every case with every requested heuristic, then prints or writes a
//! JSON report with per-run records and per-group summary statistics.
//! Ctrl-C stops the batch between runs.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::cli::{Cli, ExperimentArgs};
use crate::commands::dispatch::Library;
use shelfpath_core::error::Result;
use shelfpath_core::experiment::{run_experiments_until, ExperimentReport, SummaryRow};
use shelfpath_core::format::OutputFormat;
use shelfpath_core::heuristic::HeuristicKind;

/// Execute the experiment command
pub fn execute(cli: &Cli, library: &Library, args: &ExperimentArgs) -> Result<()> {
    for case in &args.cases {
        library.require_node(&case.start)?;
        library.require_node(&case.goal)?;
    }

    let repetitions = args
        .repetitions
        .unwrap_or(library.config.experiment.repetitions);
    if repetitions == 0 {
        shelfpath_core::bail_invalid!("repetitions", repetitions);
    }

    let heuristics: Vec<HeuristicKind> = if args.heuristics.is_empty() {
        HeuristicKind::ALL.to_vec()
    } else {
        args.heuristics.clone()
    };

    let interrupted = Arc::new(AtomicBool::new(false));
    let interrupted_clone = Arc::clone(&interrupted);
    let _ = ctrlc::set_handler(move || {
        interrupted_clone.store(true, Ordering::SeqCst);
    });

    tracing::info!(
        cases = args.cases.len(),
        heuristics = heuristics.len(),
        repetitions,
        "starting experiment"
    );

    let records = run_experiments_until(
        &library.graph,
        &args.cases,
        &heuristics,
        repetitions,
        || interrupted.load(Ordering::SeqCst),
    )?;
    let report = ExperimentReport::new(records, repetitions);

    if let Some(path) = &args.output {
        report.write(path)?;
    }

    match (cli.format, &args.output) {
        (OutputFormat::Json, None) => println!("{}", report.to_json()?),
        (OutputFormat::Json, Some(path)) => {
            let json = serde_json::json!({
                "output": path.display().to_string(),
                "runs": report.records.len(),
                "groups": report.summary.len(),
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        (OutputFormat::Human, output) => {
            output_summary(&report.summary);
            if let (Some(path), false) = (output, cli.quiet) {
                println!();
                println!(
                    "{} runs written to {}",
                    report.records.len(),
                    path.display()
                );
            }
        }
    }

    Ok(())
}

fn output_summary(summary: &[SummaryRow]) {
    for row in summary {
        let cost = match row.cost_mean {
            Some(mean) => format!("{:.2} ± {:.2}", mean, row.cost_std),
            None => "-".to_string(),
        };
        println!(
            "{}{}{} ({}): runs={} success={:.0}% expansions={:.1} ± {:.1} time={:.3} ± {:.3} ms cost={}",
            row.start,
            shelfpath_core::experiment::PATH_SEPARATOR,
            row.goal,
            row.heuristic,
            row.n_runs,
            row.success_pct,
            row.expansions_mean,
            row.expansions_std,
            row.elapsed_mean_ms,
            row.elapsed_std_ms,
            cost
        );
    }
}
