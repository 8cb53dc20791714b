//! CLI-level tests for the non-interactive flags

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_version_flag() {
    Command::cargo_bin("rpncalc")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rpncalc"));
}

#[test]
fn test_help_flag() {
    Command::cargo_bin("rpncalc")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("RPN calculator"))
        .stdout(predicate::str::contains("--deg"))
        .stdout(predicate::str::contains("--strict"));
}

#[test]
fn test_short_help_flag() {
    Command::cargo_bin("rpncalc")
        .unwrap()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE"));
}
