use crate::support::{fixtures_dir, shelfpath, shelfpath_library};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_missing_ontology_argument() {
    shelfpath()
        .args(["path", "Anna", "LibroAI"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no ontology given"));
}

#[test]
fn test_ontology_file_not_found() {
    shelfpath()
        .args(["--ontology"])
        .arg(fixtures_dir().join("missing.json"))
        .args(["nodes"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("ontology not found"));
}

#[test]
fn test_malformed_ontology() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ \"individuals\": [").unwrap();

    shelfpath()
        .arg("--ontology")
        .arg(&path)
        .arg("nodes")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid ontology"));
}

#[test]
fn test_unsupported_ontology_extension() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("library.owl");
    std::fs::write(&path, "<rdf/>").unwrap();

    shelfpath()
        .arg("--ontology")
        .arg(&path)
        .arg("nodes")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unsupported ontology format: owl"));
}

#[test]
fn test_unknown_node() {
    shelfpath_library()
        .args(["path", "Anna", "Nessuno"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("node not found: Nessuno"));
}

#[test]
fn test_unknown_node_json_envelope() {
    let output = shelfpath_library()
        .args(["--format", "json", "path", "Nessuno", "Anna"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "node_not_found");
    assert_eq!(json["error"]["code"], 3);
}

#[test]
fn test_unknown_heuristic() {
    shelfpath_library()
        .args(["path", "Anna", "LibroAI", "-H", "manhattan"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown heuristic: manhattan"));
}

#[test]
fn test_unknown_heuristic_json_envelope() {
    let output = shelfpath_library()
        .args(["--format", "json", "path", "Anna", "LibroAI", "-H", "manhattan"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
}

#[test]
fn test_invalid_config_file() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "[graph]\ndefault_cost = \"heavy\"\n").unwrap();

    shelfpath_library()
        .arg("--config")
        .arg(&config)
        .args(["path", "Anna", "LibroAI"])
        .assert()
        .code(1);
}

#[test]
fn test_quiet_suppresses_error_message() {
    shelfpath_library()
        .args(["--quiet", "path", "Anna", "Nessuno"])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}
