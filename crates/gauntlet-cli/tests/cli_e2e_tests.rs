//! End-to-end tests for the `gauntlet` demo binary
//!
//! These drive the real binary over its demo registry and verify:
//! - Run/list output shapes
//! - Exit codes for recoverable vs fatal conditions
//! - Subset selection keeping 1-based catalog numbering

use assert_cmd::Command;
use predicates::prelude::*;

fn gauntlet() -> Command {
    let mut cmd = Command::cargo_bin("gauntlet").unwrap();
    cmd.arg("--no-color");
    cmd
}

// ============================================================================
// gauntlet run - full batches
// ============================================================================

#[test]
fn test_run_all_modules() {
    gauntlet()
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Arithmetic Unit Tests"))
        .stdout(predicate::str::contains("Text handling Unit Tests"))
        .stdout(predicate::str::contains("1. integer addition OK"))
        .stdout(predicate::str::contains(
            "known issue: differs on 32-bit targets",
        ))
        .stdout(predicate::str::contains("4. integer division disabled"))
        .stdout(predicate::str::contains("Arithmetic Test Summary"));
}

#[test]
fn test_no_arguments_runs_everything() {
    gauntlet()
        .assert()
        .success()
        .stdout(predicate::str::contains("Arithmetic Unit Tests"))
        .stdout(predicate::str::contains("Text handling Unit Tests"));
}

#[test]
fn test_run_summary_counters() {
    gauntlet()
        .args(["run", "arith"])
        .assert()
        .success()
        .stdout(predicate::str::contains("total:        4"))
        .stdout(predicate::str::contains("passed:       2"))
        .stdout(predicate::str::contains("failed:       0"))
        .stdout(predicate::str::contains("known issues: 1"))
        .stdout(predicate::str::contains("disabled:     1"))
        .stdout(predicate::str::contains("(sample module)"));
}

// ============================================================================
// gauntlet run - subset selection
// ============================================================================

#[test]
fn test_run_single_test_keeps_catalog_number() {
    gauntlet()
        .args(["run", "arith", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2. integer subtraction OK"))
        .stdout(predicate::str::contains("1. integer addition").not())
        .stdout(predicate::str::contains("total:        1"));
}

#[test]
fn test_run_range() {
    gauntlet()
        .args(["run", "text", "--range", "1:2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. uppercase mapping OK"))
        .stdout(predicate::str::contains("2. whitespace split OK"));
}

#[test]
fn test_run_batch_across_modules() {
    gauntlet()
        .args(["run", "arith", "1", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. integer addition OK"))
        .stdout(predicate::str::contains("2. whitespace split OK"));
}

#[test]
fn test_out_of_range_number_is_recoverable() {
    gauntlet()
        .args(["run", "text", "1", "99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. uppercase mapping OK"))
        .stderr(predicate::str::contains(
            "test number 99 out of range for module 'text' (1-2)",
        ));
}

// ============================================================================
// gauntlet run - error dispositions
// ============================================================================

#[test]
fn test_unknown_module_fails_but_batch_continues() {
    gauntlet()
        .args(["run", "bogus", "text"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'bogus' is not a valid module name"))
        .stdout(predicate::str::contains("Text handling Unit Tests"));
}

#[test]
fn test_range_with_numbers_is_incompatible() {
    gauntlet()
        .args(["run", "text", "2", "--range", "1:2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--range requires exactly one"));
}

#[test]
fn test_leading_number_without_module() {
    gauntlet()
        .args(["run", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "test number '3' given before any module name",
        ));
}

// ============================================================================
// gauntlet list
// ============================================================================

#[test]
fn test_list_modules() {
    gauntlet()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("arith"))
        .stdout(predicate::str::contains("Text handling"));
}

#[test]
fn test_list_module_tests() {
    gauntlet()
        .args(["list", "arith"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Arithmetic Unit Tests"))
        .stdout(predicate::str::contains("3. wrapping multiplication"))
        .stdout(predicate::str::contains("(known issue: "))
        .stdout(predicate::str::contains("(disabled)"));
}

#[test]
fn test_list_with_comment() {
    gauntlet()
        .args(["list", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Text handling Unit Tests (string helpers)",
        ));
}

#[test]
fn test_list_unknown_module() {
    gauntlet()
        .args(["list", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'ghost' is not a valid module name"));
}

// ============================================================================
// JSON output
// ============================================================================

#[test]
fn test_run_json_summary() {
    let output = gauntlet()
        .args(["run", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["success"], serde_json::json!(true));
    assert_eq!(value["combined"]["passed"], serde_json::json!(4));
    assert_eq!(value["combined"]["known_issue"], serde_json::json!(1));
    assert_eq!(value["modules"].as_array().unwrap().len(), 2);
}

#[test]
fn test_list_json() {
    let output = gauntlet()
        .args(["list", "arith", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let tests = value["modules"][0]["tests"].as_array().unwrap();
    assert_eq!(tests.len(), 4);
    assert_eq!(tests[0]["index"], serde_json::json!(1));
    assert_eq!(tests[3]["status"], serde_json::json!("disabled"));
}

#[test]
fn test_unknown_module_json_still_fails() {
    gauntlet()
        .args(["run", "ghost", "--json"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"success\":false"));
}
