//! Integration tests for the ligne CLI
//!
//! These tests run the ligne binary and verify printed output and
//! exit codes.

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;

/// Get a Command for ligne
fn ligne() -> Command {
    cargo_bin_cmd!("ligne")
}

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    ligne()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: ligne"))
        .stdout(predicate::str::contains("SOURCE"))
        .stdout(predicate::str::contains("DESTINATION"));
}

#[test]
fn test_version_flag() {
    ligne()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ligne"));
}

// ============================================================================
// Route planning
// ============================================================================

#[test]
fn test_route_direct_connection() {
    ligne()
        .args(["1", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Estimated time: 40.00 minutes"))
        .stdout(predicate::str::contains("Route: 1 2"));
}

#[test]
fn test_route_same_station() {
    ligne()
        .args(["3", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Estimated time: 0.00 minutes"))
        .stdout(predicate::str::contains("Route: 3"));
}

#[test]
fn test_route_with_line_change() {
    ligne()
        .args(["1", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Estimated time: 84.00 minutes"))
        .stdout(predicate::str::contains("Route: 1 2 9"));
}

#[test]
fn test_route_across_three_lines() {
    ligne()
        .args(["1", "14"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Estimated time: 164.00 minutes"))
        .stdout(predicate::str::contains("Route: 1 2 3 13 14"));
}

#[test]
fn test_repeated_runs_are_identical() {
    let first = ligne().args(["1", "14"]).output().unwrap();
    let second = ligne().args(["1", "14"]).output().unwrap();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

// ============================================================================
// JSON output
// ============================================================================

#[test]
fn test_json_format() {
    let output = ligne()
        .args(["--format", "json", "1", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let itinerary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(itinerary["source"], 1);
    assert_eq!(itinerary["destination"], 2);
    assert_eq!(itinerary["route"], serde_json::json!([1, 2]));

    let minutes = itinerary["minutes"].as_f64().unwrap();
    assert!((minutes - 40.0).abs() < 0.01);
}

#[test]
fn test_json_error_envelope() {
    ligne()
        .args(["--format", "json", "0", "2"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("\"type\":\"station_out_of_range\""));
}

#[test]
fn test_json_usage_error_envelope() {
    ligne()
        .args(["--format=json", "1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

// ============================================================================
// Argument validation
// ============================================================================

#[test]
fn test_missing_argument_is_a_usage_error() {
    ligne()
        .arg("1")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage: ligne"));
}

#[test]
fn test_extra_argument_is_a_usage_error() {
    ligne().args(["1", "2", "3"]).assert().failure().code(1);
}

#[test]
fn test_non_numeric_argument_is_a_usage_error() {
    ligne().args(["one", "2"]).assert().failure().code(1);
}

#[test]
fn test_source_below_range() {
    ligne()
        .args(["0", "5"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "source station must be at least 1 and at most 14",
        ));
}

#[test]
fn test_destination_above_range() {
    ligne()
        .args(["1", "15"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "destination station must be at least 1 and at most 14",
        ));
}

#[test]
fn test_unknown_format_is_rejected() {
    ligne()
        .args(["--format", "xml", "1", "2"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn test_quiet_suppresses_error_text() {
    ligne()
        .args(["--quiet", "0", "2"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::is_empty());
}

// ============================================================================
// Diagnostics
// ============================================================================

#[test]
fn test_verbose_traces_the_search() {
    ligne()
        .args(["--verbose", "1", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Route: 1 2"))
        .stderr(predicate::str::contains("expand"));
}
