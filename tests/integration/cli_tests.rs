//! CLI integration tests
//!
//! These tests verify that the CLI works correctly with various options.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::path::PathBuf;

/// Get the path to the test fixtures directory
fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn appmanifest() -> Command {
    Command::cargo_bin("appmanifest").expect("binary should be built")
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_cli_help() {
    appmanifest()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("appmanifest"))
        .stdout(predicate::str::contains("--default-locale"))
        .stdout(predicate::str::contains("--parallel"));
}

#[test]
fn test_cli_version() {
    appmanifest()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("appmanifest"));
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_cli_terminal_output() {
    appmanifest()
        .arg(fixtures_path().join("apps"))
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains("swagFirstShippingMethod"))
        .stdout(predicate::str::contains("api.swag-shipping.example"))
        .stdout(predicate::str::contains("2 parsed"));
}

#[test]
fn test_cli_json_output() {
    let output = appmanifest()
        .arg(fixtures_path().join("apps/SwagShipping/manifest.xml"))
        .args(["--format", "json", "--default-locale", "de-DE", "--quiet"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(report["defaultLocale"], "de-DE");
    assert_eq!(report["summary"]["parsed"], 1);

    let method = &report["manifests"][0]["data"]["shippingMethods"][0];
    assert_eq!(method["name"]["de-DE"], "Erste Versandmethode");
    assert_eq!(method["appShippingMethod"]["identifier"], "swagFirstShippingMethod");
}

#[test]
fn test_cli_parallel_matches_sequential() {
    let run = |extra: &[&str]| {
        let output = appmanifest()
            .arg(fixtures_path().join("apps"))
            .args(["--format", "json", "--compact", "--quiet"])
            .args(extra)
            .output()
            .expect("Failed to execute command");
        assert!(output.status.success());
        String::from_utf8_lossy(&output.stdout).to_string()
    };

    assert_eq!(run(&[]), run(&["--parallel"]));
}

#[test]
fn test_cli_reports_failures() {
    appmanifest()
        .arg(fixtures_path().join("broken"))
        .arg("--quiet")
        .assert()
        .failure()
        .stdout(predicate::str::contains("unit must not be empty in <delivery-time>"))
        .stdout(predicate::str::contains("1 failed"));
}

#[test]
fn test_cli_json_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let report_path = dir.path().join("report.json");

    appmanifest()
        .arg(fixtures_path().join("apps"))
        .args(["--format", "json", "--quiet", "--output"])
        .arg(&report_path)
        .assert()
        .success();

    let report: Value =
        serde_json::from_str(&std::fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(report["manifests"].as_array().unwrap().len(), 2);
}

#[test]
fn test_cli_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let app = dir.path().join("SwagShipping");
    std::fs::create_dir_all(&app).unwrap();
    std::fs::copy(
        fixtures_path().join("apps/SwagShipping/manifest.xml"),
        app.join("app.xml"),
    )
    .unwrap();
    std::fs::write(
        dir.path().join("appmanifest.yml"),
        "manifest_names: [app.xml]\nreport:\n  format: json\n",
    )
    .unwrap();

    let output = appmanifest()
        .arg(dir.path())
        .arg("--quiet")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let report: Value = serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(report["summary"]["parsed"], 1);
}

#[test]
fn test_cli_missing_path() {
    appmanifest()
        .arg("/definitely/not/a/real/path")
        .arg("--quiet")
        .assert()
        .failure();
}
