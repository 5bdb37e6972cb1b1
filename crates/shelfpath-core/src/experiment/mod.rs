//! Batch experiments: repeated timed searches over a grid of cases and heuristics

mod summary;

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ShelfpathError};
use crate::graph::Graph;
use crate::heuristic::{select_heuristic, DistanceTable, HeuristicKind};
use crate::search::{a_star, GraphProblem};

pub use summary::{summarize, SummaryRow};

/// Separator used when a path is flattened into one string
pub const PATH_SEPARATOR: &str = " -> ";

/// A start/goal pair, written `START:GOAL` on the command line
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExperimentCase {
    pub start: String,
    pub goal: String,
}

impl ExperimentCase {
    pub fn new(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
        }
    }
}

impl FromStr for ExperimentCase {
    type Err = ShelfpathError;

    fn from_str(s: &str) -> Result<Self> {
        let Some((start, goal)) = s.split_once(':') else {
            crate::bail_invalid!("case (expected START:GOAL)", s);
        };
        let (start, goal) = (start.trim(), goal.trim());
        if start.is_empty() || goal.is_empty() {
            crate::bail_invalid!("case (expected START:GOAL)", s);
        }
        Ok(Self::new(start, goal))
    }
}

impl fmt::Display for ExperimentCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.goal)
    }
}

/// Outcome of a single timed search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentRecord {
    pub id: usize,
    pub start: String,
    pub goal: String,
    pub heuristic: HeuristicKind,
    pub found: bool,
    pub cost: Option<f64>,
    pub path_length: Option<usize>,
    pub elapsed_ms: f64,
    pub expansions: usize,
    pub path: Option<String>,
}

/// Run and time one search; the returned record has id 0
///
/// Heuristic selection happens before the clock starts.
pub fn run_case(
    graph: &Graph,
    case: &ExperimentCase,
    kind: HeuristicKind,
    table: Option<&DistanceTable>,
) -> ExperimentRecord {
    let heuristic = select_heuristic(kind, graph, &case.goal, table);
    let problem = GraphProblem::new(graph, &case.start, [&case.goal]);

    let started = Instant::now();
    let outcome = a_star(&problem, heuristic.toward(&case.goal));
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

    ExperimentRecord {
        id: 0,
        start: case.start.clone(),
        goal: case.goal.clone(),
        heuristic: kind,
        found: outcome.found(),
        cost: outcome.cost,
        path_length: outcome.path_length(),
        elapsed_ms,
        expansions: outcome.expansions,
        path: outcome.path.map(|path| path.join(PATH_SEPARATOR)),
    }
}

/// Every start and goal named by the cases, in first-seen order
pub fn interest_nodes(cases: &[ExperimentCase]) -> Vec<&str> {
    let mut nodes: Vec<&str> = Vec::new();
    for case in cases {
        for node in [case.start.as_str(), case.goal.as_str()] {
            if !nodes.contains(&node) {
                nodes.push(node);
            }
        }
    }
    nodes
}

/// Run every case with every heuristic `repetitions` times
///
/// Records are numbered from 1 in execution order: cases outermost, then
/// heuristics, then repetitions.
pub fn run_experiments(
    graph: &Graph,
    cases: &[ExperimentCase],
    heuristics: &[HeuristicKind],
    repetitions: usize,
) -> Vec<ExperimentRecord> {
    let mut records = Vec::new();
    run_grid(graph, cases, heuristics, repetitions, &mut records, || false);
    records
}

/// Like `run_experiments`, checking `should_stop` before every run
///
/// Returns `Interrupted` with the number of completed runs when stopped.
pub fn run_experiments_until(
    graph: &Graph,
    cases: &[ExperimentCase],
    heuristics: &[HeuristicKind],
    repetitions: usize,
    should_stop: impl FnMut() -> bool,
) -> Result<Vec<ExperimentRecord>> {
    let mut records = Vec::new();
    if run_grid(graph, cases, heuristics, repetitions, &mut records, should_stop) {
        return Err(ShelfpathError::Interrupted {
            completed: records.len(),
        });
    }
    Ok(records)
}

/// Returns true when stopped early
#[tracing::instrument(skip_all, fields(cases = cases.len(), heuristics = heuristics.len(), repetitions = repetitions))]
fn run_grid(
    graph: &Graph,
    cases: &[ExperimentCase],
    heuristics: &[HeuristicKind],
    repetitions: usize,
    records: &mut Vec<ExperimentRecord>,
    mut should_stop: impl FnMut() -> bool,
) -> bool {
    let start = Instant::now();
    let table = heuristics
        .contains(&HeuristicKind::Distance)
        .then(|| DistanceTable::build(graph, interest_nodes(cases)));

    for case in cases {
        for &kind in heuristics {
            for _ in 0..repetitions {
                if should_stop() {
                    tracing::warn!(completed = records.len(), "experiment stopped");
                    return true;
                }

                let mut record = run_case(graph, case, kind, table.as_ref());
                record.id = records.len() + 1;
                tracing::trace!(
                    id = record.id,
                    case = %case,
                    heuristic = %kind,
                    expansions = record.expansions,
                    "run finished"
                );
                records.push(record);
            }
        }
    }

    crate::trace_time!(start, "run_experiments", runs = records.len());
    false
}

/// Persisted result of an experiment batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentReport {
    pub generated_at: DateTime<Utc>,
    pub repetitions: usize,
    pub records: Vec<ExperimentRecord>,
    pub summary: Vec<SummaryRow>,
}

impl ExperimentReport {
    pub fn new(records: Vec<ExperimentRecord>, repetitions: usize) -> Self {
        let summary = summarize(&records);
        Self {
            generated_at: Utc::now(),
            repetitions,
            records,
            summary,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the report as pretty JSON
    pub fn write(&self, path: &Path) -> Result<()> {
        let content = self.to_json()?;
        fs::write(path, content)
            .map_err(|e| ShelfpathError::io_operation("write report", path.display(), e))?;
        tracing::debug!(path = %path.display(), runs = self.records.len(), "report written");
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| ShelfpathError::io_operation("read report", path.display(), e))?;
        Ok(serde_json::from_str(&content)?)
    }
}
