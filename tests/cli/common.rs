//! Cross-cutting CLI tests (help, version, error handling)

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help() {
    cargo_bin_cmd!("slackfmt")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("slackfmt converts chat message markup"));
}

#[test]
fn test_version() {
    cargo_bin_cmd!("slackfmt")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_subcommand() {
    cargo_bin_cmd!("slackfmt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_invalid_subcommand() {
    cargo_bin_cmd!("slackfmt")
        .arg("invalid")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_format_help() {
    cargo_bin_cmd!("slackfmt")
        .args(["format", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Format a message"));
}
