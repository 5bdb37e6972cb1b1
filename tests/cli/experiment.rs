use crate::support::{run_json, shelfpath_library};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_experiment_json_report() {
    let json = run_json(&[
        "experiment",
        "--case",
        "Anna:LibroGaribaldi",
        "--case",
        "Marco:cat_AlgebraLineare",
        "-H",
        "null",
        "-H",
        "taxonomy",
        "--repetitions",
        "2",
    ]);

    assert_eq!(json["repetitions"], 2);
    assert!(json["generated_at"].is_string());

    let records = json["records"].as_array().unwrap();
    assert_eq!(records.len(), 8);
    let ids: Vec<u64> = records.iter().map(|r| r["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, (1..=8).collect::<Vec<u64>>());
    assert!(records.iter().all(|r| r["found"] == true));

    let marco = records
        .iter()
        .find(|r| r["start"] == "Marco" && r["heuristic"] == "taxonomy")
        .unwrap();
    assert_eq!(marco["cost"], 5.0);
    assert_eq!(marco["path_length"], 8);
    assert!(marco["path"]
        .as_str()
        .unwrap()
        .starts_with("Marco -> Prestito2 -> LibroAI"));

    let summary = json["summary"].as_array().unwrap();
    assert_eq!(summary.len(), 4);
    for row in summary {
        assert_eq!(row["n_runs"], 2);
        assert_eq!(row["success_pct"], 100.0);
    }
}

#[test]
fn test_experiment_unreachable_case_has_no_cost() {
    let json = run_json(&[
        "experiment",
        "--case",
        "LibroAI:cat_Fiabe",
        "-H",
        "base",
        "--repetitions",
        "1",
    ]);

    let record = &json["records"][0];
    assert_eq!(record["found"], false);
    assert!(record["cost"].is_null());
    assert!(record["path"].is_null());

    let row = &json["summary"][0];
    assert_eq!(row["success_pct"], 0.0);
    assert!(row["cost_mean"].is_null());
}

#[test]
fn test_experiment_defaults_to_every_heuristic() {
    let json = run_json(&[
        "experiment",
        "--case",
        "Anna:cat_Storia",
        "--repetitions",
        "1",
    ]);

    let heuristics: Vec<&str> = json["summary"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["heuristic"].as_str().unwrap())
        .collect();
    assert_eq!(heuristics, vec!["null", "base", "taxonomy", "distance"]);
}

#[test]
fn test_experiment_writes_report_file() {
    let dir = tempdir().unwrap();
    let report = dir.path().join("runs.json");

    shelfpath_library()
        .args([
            "experiment",
            "--case",
            "Anna:LibroGaribaldi",
            "-H",
            "base",
            "--repetitions",
            "3",
            "--output",
        ])
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Anna -> LibroGaribaldi (base): runs=3 success=100%",
        ))
        .stdout(predicate::str::contains("3 runs written to"));

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(written["records"].as_array().unwrap().len(), 3);
    assert_eq!(written["summary"][0]["cost_mean"], 2.0);
    assert_eq!(written["summary"][0]["cost_std"], 0.0);
}

#[test]
fn test_experiment_rejects_zero_repetitions() {
    shelfpath_library()
        .args(["experiment", "--case", "Anna:Prestito1", "--repetitions", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid repetitions: 0"));
}

#[test]
fn test_experiment_rejects_malformed_case() {
    shelfpath_library()
        .args(["experiment", "--case", "Anna"])
        .assert()
        .code(2);
}

#[test]
fn test_experiment_unknown_case_node() {
    shelfpath_library()
        .args(["experiment", "--case", "Anna:Nessuno", "--repetitions", "1"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("node not found: Nessuno"));
}
