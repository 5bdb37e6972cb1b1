use crate::support::{fixtures_dir, run_json, shelfpath, shelfpath_library};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_path_between_person_and_book() {
    shelfpath_library()
        .args(["path", "Anna", "LibroGaribaldi"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Path from Anna to LibroGaribaldi"))
        .stdout(predicate::str::contains("  1. Anna"))
        .stdout(predicate::str::contains("  3. LibroGaribaldi"))
        .stdout(predicate::str::contains(
            "Anna -> Prestito1 -> LibroGaribaldi",
        ))
        .stdout(predicate::str::contains("Cost: 2"));
}

#[test]
fn test_path_json_reports_effective_heuristic() {
    let json = run_json(&["path", "Anna", "LibroGaribaldi"]);

    assert_eq!(json["found"], true);
    assert_eq!(json["cost"], 2.0);
    assert_eq!(json["requested_heuristic"], "taxonomy");
    // the goal is a book, so the taxonomy estimate does not apply
    assert_eq!(json["heuristic"], "base");
    assert_eq!(
        json["path"],
        serde_json::json!(["Anna", "Prestito1", "LibroGaribaldi"])
    );
    assert!(json.get("reachable").is_none());
}

#[test]
fn test_path_through_taxonomy() {
    let json = run_json(&["path", "Marco", "cat_AlgebraLineare"]);

    assert_eq!(json["heuristic"], "taxonomy");
    assert_eq!(json["cost"], 5.0);
    assert_eq!(
        json["path"],
        serde_json::json!([
            "Marco",
            "Prestito2",
            "LibroAI",
            "cat_IntelligenzaArtificiale",
            "cat_Informatica",
            "cat_Scienze",
            "cat_Matematica",
            "cat_AlgebraLineare"
        ])
    );
}

#[test]
fn test_path_cost_is_the_same_for_every_heuristic() {
    for heuristic in ["null", "base", "taxonomy", "distance"] {
        let json = run_json(&["path", "Marco", "cat_AlgebraLineare", "-H", heuristic]);
        assert_eq!(json["found"], true, "heuristic {heuristic}");
        assert_eq!(json["cost"], 5.0, "heuristic {heuristic}");
        assert_eq!(json["requested_heuristic"], heuristic);
    }
}

#[test]
fn test_path_start_is_goal() {
    let json = run_json(&["path", "cat_Scienze", "cat_Scienze"]);

    assert_eq!(json["found"], true);
    assert_eq!(json["cost"], 0.0);
    assert_eq!(json["expansions"], 0);
    assert_eq!(json["path"], serde_json::json!(["cat_Scienze"]));
}

#[test]
fn test_path_unreachable_goal_lists_reachable_nodes() {
    let json = run_json(&["path", "LibroAI", "cat_Fiabe", "-H", "null"]);

    assert_eq!(json["found"], false);
    assert!(json["path"].is_null());
    assert!(json["cost"].is_null());
    // every node of the connected library is expanded once
    assert_eq!(json["expansions"], 17);

    let reachable = json["reachable"].as_array().unwrap();
    assert_eq!(reachable.len(), 14);
    assert!(!reachable.iter().any(|n| n == "LibroAI"));
    assert!(reachable.iter().any(|n| n == "Prestito2"));
}

#[test]
fn test_path_unreachable_human() {
    shelfpath_library()
        .args(["path", "LibroAI", "cat_Fiabe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No path from LibroAI to cat_Fiabe"))
        .stdout(predicate::str::contains("Reachable from LibroAI:"))
        .stdout(predicate::str::contains("  - cat_IntelligenzaArtificiale"));
}

#[test]
fn test_path_quiet_prints_only_the_path() {
    shelfpath_library()
        .args(["--quiet", "path", "Anna", "LibroGaribaldi"])
        .assert()
        .success()
        .stdout("Anna -> Prestito1 -> LibroGaribaldi\n");
}

#[test]
fn test_path_honors_configured_relation_cost() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("costs.toml");
    std::fs::write(&config, "[graph.relations.haPrestito]\ncost = 3.0\n").unwrap();

    let output = shelfpath_library()
        .args(["--format", "json", "--config"])
        .arg(&config)
        .args(["path", "Anna", "LibroGaribaldi"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["cost"], 4.0);
}

#[test]
fn test_path_reads_ontology_from_env() {
    shelfpath()
        .env("SHELFPATH_ONTOLOGY", fixtures_dir().join("library.yaml"))
        .args(["path", "Anna", "cat_Storia"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Anna -> Prestito1 -> LibroGaribaldi -> cat_StoriaItalia -> cat_Storia",
        ))
        .stdout(predicate::str::contains("Cost: 3.5"));
}
