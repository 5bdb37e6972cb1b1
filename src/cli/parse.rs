use shelfpath_core::experiment::ExperimentCase;
use shelfpath_core::format::OutputFormat;
use shelfpath_core::heuristic::HeuristicKind;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse heuristic name from string
pub fn parse_heuristic(s: &str) -> std::result::Result<HeuristicKind, String> {
    s.parse::<HeuristicKind>().map_err(|e| e.to_string())
}

/// Parse an experiment case written as START:GOAL
pub fn parse_case(s: &str) -> std::result::Result<ExperimentCase, String> {
    s.parse::<ExperimentCase>().map_err(|e| e.to_string())
}
