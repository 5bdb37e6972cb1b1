use crate::support::{run_json, shelfpath_library};
use predicates::prelude::*;

#[test]
fn test_nodes_grouped_by_kind() {
    shelfpath_library()
        .arg("nodes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Persons:\n  Anna\n  Marco\n  ProfRossi"))
        .stdout(predicate::str::contains(
            "Books:\n  LibroAI\n  LibroAlgebra\n  LibroGaribaldi",
        ))
        .stdout(predicate::str::contains("Loans:\n  Prestito1\n  Prestito2\n  Prestito3"))
        .stdout(predicate::str::contains("  cat_Fiabe"));
}

#[test]
fn test_nodes_json() {
    let json = run_json(&["nodes"]);

    assert_eq!(
        json["persons"],
        serde_json::json!(["Anna", "Marco", "ProfRossi"])
    );
    assert_eq!(json["loans"].as_array().unwrap().len(), 3);
    assert_eq!(json["books"].as_array().unwrap().len(), 3);
    // isolated categories are still individuals
    assert_eq!(json["categories"].as_array().unwrap().len(), 9);
    assert!(json["categories"]
        .as_array()
        .unwrap()
        .iter()
        .any(|c| c == "cat_Fiabe"));
}
