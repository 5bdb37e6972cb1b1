use crate::support::{run_json, shelfpath_library};
use predicates::prelude::*;

#[test]
fn test_reachable_lists_kinds() {
    shelfpath_library()
        .args(["reachable", "Anna", "--limit", "3"])
        .assert()
        .success()
        .stdout("LibroGaribaldi (book)\nPrestito1 (loan)\n");
}

#[test]
fn test_reachable_json() {
    let json = run_json(&["reachable", "cat_Scienze", "--limit", "4"]);

    assert_eq!(json["start"], "cat_Scienze");
    assert_eq!(json["limit"], 4);
    assert_eq!(
        json["nodes"],
        serde_json::json!(["cat_Biblioteca", "cat_Informatica", "cat_Matematica"])
    );
}

#[test]
fn test_reachable_isolated_node() {
    shelfpath_library()
        .args(["reachable", "cat_Fiabe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No nodes reachable from cat_Fiabe"));
}

#[test]
fn test_reachable_zero_limit_is_usage_error() {
    shelfpath_library()
        .args(["reachable", "Anna", "--limit", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid limit: 0"));
}
