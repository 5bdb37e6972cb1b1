use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::path::PathBuf;
use std::process::Output;

/// Directory holding the test ontologies
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Path to the library fixture ontology
pub fn library_path() -> PathBuf {
    fixtures_dir().join("library.json")
}

/// Get a Command for shelfpath, isolated from the user's environment
///
/// The config directory points at the fixtures, which hold no config file.
pub fn shelfpath() -> Command {
    let mut cmd = cargo_bin_cmd!("shelfpath");
    cmd.env_remove("SHELFPATH_ONTOLOGY")
        .env_remove("SHELFPATH_LOG")
        .env_remove("RUST_LOG")
        .env("SHELFPATH_CONFIG_DIR", fixtures_dir());
    cmd
}

/// shelfpath with `--ontology` already pointing at the library fixture
pub fn shelfpath_library() -> Command {
    let mut cmd = shelfpath();
    cmd.arg("--ontology").arg(library_path());
    cmd
}

/// Parse stdout as JSON
#[allow(dead_code)]
pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not valid JSON")
}

/// Run shelfpath on the library fixture and parse its JSON output
#[allow(dead_code)]
pub fn run_json(args: &[&str]) -> serde_json::Value {
    let output = shelfpath_library()
        .args(["--format", "json"])
        .args(args)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    stdout_json(&output)
}
