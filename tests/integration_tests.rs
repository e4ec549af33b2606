//! Integration tests for the printtolcalc CLI
//!
//! These tests exercise the binary end-to-end using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to get a printtolcalc command with a clean environment
fn printtolcalc() -> Command {
    let mut cmd = Command::cargo_bin("printtolcalc").unwrap();
    cmd.env_remove("RUST_LOG").env_remove("PRINTTOL_FORMAT");
    cmd
}

// ============================================================================
// CLI Basic Tests
// ============================================================================

#[test]
fn test_help_displays() {
    printtolcalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--expected"))
        .stdout(predicate::str::contains("--measured"))
        .stdout(predicate::str::contains("All dimensions must be in millimeters"));
}

#[test]
fn test_version_displays() {
    printtolcalc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("printtolcalc"));
}

#[test]
fn test_too_few_values_rejected() {
    printtolcalc()
        .args(["--expected", "20", "20", "--measured", "20", "20", "20"])
        .assert()
        .failure();
}

// ============================================================================
// Report Tests
// ============================================================================

#[test]
fn test_flag_mode_report() {
    printtolcalc()
        .args(["--expected", "20", "20", "20", "--measured", "19.99", "19.95", "20.10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3D Print Tolerance Report:"))
        .stdout(predicate::str::contains("Ideal X dimension (mm): 20.00"))
        .stdout(predicate::str::contains("Measured Z dimension (mm): 20.10"))
        .stdout(predicate::str::contains("X-axis: Signed = -0.050%, Absolute = 0.050%"))
        .stdout(predicate::str::contains("Y-axis: Signed = -0.250%, Absolute = 0.250%"))
        .stdout(predicate::str::contains("Z-axis: Signed = +0.500%, Absolute = 0.500%"))
        .stderr(predicate::str::contains("excess decimal precision").not());
}

#[test]
fn test_identical_dimensions_report_zero() {
    printtolcalc()
        .args(["--expected", "20", "20", "20", "--measured", "20", "20", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("X-axis: Signed = 0.000%, Absolute = 0.000%"));
}

#[test]
fn test_json_format() {
    let output = printtolcalc()
        .args([
            "--expected", "20", "20", "20", "--measured", "19.99", "19.95", "20.10", "--format", "json",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["results"][2]["axis"], "Z");
    let z = report["results"][2]["signed_percent"].as_f64().unwrap();
    assert!((z - 0.5).abs() < 1e-9);
}

#[test]
fn test_format_from_env() {
    printtolcalc()
        .env("PRINTTOL_FORMAT", "json")
        .args(["--expected", "10", "10", "10", "--measured", "10", "10", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"signed_percent\""));
}

// ============================================================================
// Validation Tests
// ============================================================================

#[test]
fn test_zero_measured_fails() {
    printtolcalc()
        .args(["--expected", "10", "10", "10", "--measured", "0", "10", "10"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("measured value for X-axis cannot be zero"));
}

#[test]
fn test_negative_expected_fails() {
    printtolcalc()
        .args(["--expected", "-5", "10", "10", "--measured", "5", "10", "10"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("expected value for X-axis cannot be negative"));
}

#[test]
fn test_nan_and_infinite_fail() {
    printtolcalc()
        .args(["--expected", "10", "NaN", "10", "--measured", "10", "10", "10"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Y-axis cannot be NaN"));

    printtolcalc()
        .args(["--expected", "10", "10", "10", "--measured", "10", "10", "inf"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Z-axis cannot be infinite"));
}

// ============================================================================
// Precision Advisory Tests
// ============================================================================

#[test]
fn test_precision_advisory_does_not_block() {
    printtolcalc()
        .args(["--expected", "20.123", "20", "20", "--measured", "20", "20", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("X-axis: Signed = -0.611%, Absolute = 0.611%"))
        .stderr(predicate::str::contains("excess decimal precision"))
        .stderr(predicate::str::contains("axis=X"))
        .stderr(predicate::str::contains("role=expected"));
}

#[test]
fn test_quiet_suppresses_advisory() {
    printtolcalc()
        .args(["-q", "--expected", "20.123", "20", "20", "--measured", "20", "20", "20"])
        .assert()
        .success()
        .stderr(predicate::str::contains("excess decimal precision").not());
}

#[test]
fn test_json_includes_advisory() {
    let output = printtolcalc()
        .args([
            "--expected", "20.123", "20", "20", "--measured", "20", "20", "20", "-f", "json",
        ])
        .output()
        .unwrap();

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["warnings"][0]["axis"], "X");
    assert_eq!(report["warnings"][0]["role"], "expected");
    assert_eq!(report["warnings"][0]["decimals"], 3);
}

// ============================================================================
// Prompt Tests
// ============================================================================

#[test]
fn test_prompts_for_both_triples_from_stdin() {
    printtolcalc()
        .write_stdin("20\n20\n20\n19.99\n19.95\n20.10\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Enter expected dimensions (in mm):"))
        .stderr(predicate::str::contains("Enter measured dimensions (in mm):"))
        .stdout(predicate::str::contains("Z-axis: Signed = +0.500%, Absolute = 0.500%"));
}

#[test]
fn test_prompts_only_for_missing_triple() {
    printtolcalc()
        .args(["--expected", "20", "20", "20"])
        .write_stdin("19.99\n19.95\n20.10\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Enter expected dimensions").not())
        .stderr(predicate::str::contains("Enter measured dimensions (in mm):"))
        .stdout(predicate::str::contains("Y-axis: Signed = -0.250%, Absolute = 0.250%"));
}

#[test]
fn test_prompt_rejects_non_numeric() {
    printtolcalc()
        .args(["--measured", "20", "20", "20"])
        .write_stdin("20\ntwenty\n20\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("could not parse expected Y dimension"));
}

#[test]
fn test_prompt_truncated_input() {
    printtolcalc()
        .write_stdin("20\n20\n20\n19\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("input ended before the measured Y dimension"));
}
