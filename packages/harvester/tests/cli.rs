//! Command-line tests for the harvester binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn harvester() -> Command {
    cargo_bin_cmd!("integration-harvester")
}

#[test]
fn test_extract_prints_summary() {
    harvester()
        .arg("extract")
        .arg(fixture_path("ico_export.xml"))
        .arg(fixture_path("trust_chain.pem"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Interfaces:"))
        .stdout(predicate::str::contains("ico_export.xml: Extracted 3 interfaces"))
        .stdout(predicate::str::contains("trust_chain.pem: Extracted 0 interfaces, 0 mappings, 0 partners, 2 certificates"));
}

#[test]
fn test_extract_reports_bad_files_but_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let broken = dir.path().join("broken_ico.xml");
    fs::write(&broken, "<Export>").unwrap();

    harvester()
        .arg("extract")
        .arg(&broken)
        .arg(dir.path().join("unknown.bin"))
        .assert()
        .success()
        .stdout(predicate::str::contains("broken_ico.xml: Malformed XML document"))
        .stdout(predicate::str::contains("Unrecognized file type: 'unknown.bin'"))
        .stdout(predicate::str::contains("Failed files:"));
}

#[test]
fn test_extract_writes_json_report() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("report.json");

    harvester()
        .arg("extract")
        .arg(fixture_path("partners_b2b.xml"))
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved to:"));

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(report["summary"]["partners"], 2);
    assert_eq!(report["partners"][0]["name"], "Acme Supplies");
}

#[test]
fn test_extract_writes_yaml_when_requested() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("report.out");

    harvester()
        .arg("extract")
        .arg(fixture_path("trust_chain.pem"))
        .args(["--format", "yaml", "--output"])
        .arg(&output)
        .assert()
        .success();

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains("alias: pem-0"));
    assert!(text.contains("alias: pem-1"));
}

#[test]
fn test_extract_rejects_missing_output_directory() {
    harvester()
        .arg("extract")
        .arg(fixture_path("trust_chain.pem"))
        .arg("--output")
        .arg("/nonexistent/dir/report.yaml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Output directory does not exist"));
}

#[test]
fn test_classify() {
    harvester()
        .args(["classify", "ico-partner.xml", "maps.tpz", "notes.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("configuration export  ico-partner.xml"))
        .stdout(predicate::str::contains("mapping archive  maps.tpz"))
        .stdout(predicate::str::contains("unrecognized  notes.txt"));
}
