use serde::{Deserialize, Serialize};

use super::ExperimentRecord;
use crate::heuristic::HeuristicKind;

/// Aggregate statistics for one (start, goal, heuristic) group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub start: String,
    pub goal: String,
    pub heuristic: HeuristicKind,
    pub n_runs: usize,
    pub success_pct: f64,
    pub elapsed_mean_ms: f64,
    pub elapsed_std_ms: f64,
    pub expansions_mean: f64,
    pub expansions_std: f64,
    /// `None` when no run in the group found a path
    pub cost_mean: Option<f64>,
    pub cost_std: f64,
}

/// Group records by (start, goal, heuristic) in first-seen order
///
/// Standard deviations use the sample (n - 1) formula and are 0 for groups
/// with fewer than two values. Cost statistics only consider found runs.
pub fn summarize(records: &[ExperimentRecord]) -> Vec<SummaryRow> {
    let mut groups: Vec<Vec<&ExperimentRecord>> = Vec::new();

    for record in records {
        let existing = groups.iter_mut().find(|group| {
            let first = group[0];
            first.start == record.start
                && first.goal == record.goal
                && first.heuristic == record.heuristic
        });
        match existing {
            Some(group) => group.push(record),
            None => groups.push(vec![record]),
        }
    }

    groups.iter().map(|group| summarize_group(group)).collect()
}

fn summarize_group(group: &[&ExperimentRecord]) -> SummaryRow {
    let first = group[0];
    let n_runs = group.len();
    let found = group.iter().filter(|r| r.found).count();

    let elapsed: Vec<f64> = group.iter().map(|r| r.elapsed_ms).collect();
    let expansions: Vec<f64> = group.iter().map(|r| r.expansions as f64).collect();
    let costs: Vec<f64> = group.iter().filter_map(|r| r.cost).collect();

    SummaryRow {
        start: first.start.clone(),
        goal: first.goal.clone(),
        heuristic: first.heuristic,
        n_runs,
        success_pct: 100.0 * found as f64 / n_runs as f64,
        elapsed_mean_ms: mean(&elapsed).unwrap_or(0.0),
        elapsed_std_ms: sample_std(&elapsed),
        expansions_mean: mean(&expansions).unwrap_or(0.0),
        expansions_std: sample_std(&expansions),
        cost_mean: mean(&costs),
        cost_std: sample_std(&costs),
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

fn sample_std(values: &[f64]) -> f64 {
    let Some(mean) = mean(values) else {
        return 0.0;
    };
    if values.len() < 2 {
        return 0.0;
    }
    let squares: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    (squares / (values.len() - 1) as f64).sqrt()
}
