//! Format subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_format_stdin_to_stdout() {
    cargo_bin_cmd!("slackfmt")
        .arg("format")
        .write_stdin("Hello *world*")
        .assert()
        .success()
        .stdout("Hello <strong>world</strong>\n");
}

#[test]
fn test_format_file() {
    let temp_dir = TempDir::new().unwrap();
    let message = temp_dir.path().join("message.txt");
    fs::write(&message, "one\ntwo").unwrap();

    cargo_bin_cmd!("slackfmt")
        .args(["format", message.to_str().unwrap()])
        .assert()
        .success()
        .stdout("one<br/>two\n");
}

#[test]
fn test_format_with_registries() {
    let temp_dir = TempDir::new().unwrap();
    let users = temp_dir.path().join("users.json");
    let emoji = temp_dir.path().join("emoji.json");
    fs::write(&users, r#"{"U1": {"id": "U1", "name": "Jane"}}"#).unwrap();
    fs::write(&emoji, r#"{"parrot": "https://cdn.example/parrot.gif"}"#).unwrap();

    cargo_bin_cmd!("slackfmt")
        .arg("format")
        .arg("--users")
        .arg(&users)
        .arg("--emoji")
        .arg(&emoji)
        .write_stdin("<@U1> :parrot:")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"<span class="slack-user">Jane</span>"#))
        .stdout(predicate::str::contains("parrot.gif"));
}

#[test]
fn test_format_rejects_non_object_users() {
    let temp_dir = TempDir::new().unwrap();
    let users = temp_dir.path().join("users.json");
    fs::write(&users, r#""not an object""#).unwrap();

    cargo_bin_cmd!("slackfmt")
        .arg("format")
        .arg("--users")
        .arg(&users)
        .write_stdin("<@U1>")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid user registration"));
}

#[test]
fn test_format_rejects_non_utf8_input() {
    cargo_bin_cmd!("slackfmt")
        .arg("format")
        .write_stdin(vec![0xff, 0xfe, 0x00])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be a string"));
}

#[test]
fn test_format_option_override() {
    cargo_bin_cmd!("slackfmt")
        .args(["format", "--option", "userClass=mention", "--option", "unknown=x"])
        .write_stdin("<@U7|Kim>")
        .assert()
        .success()
        .stdout("<span class=\"mention\">Kim</span>\n");
}

#[test]
fn test_format_malformed_option() {
    cargo_bin_cmd!("slackfmt")
        .args(["format", "--option", "userClass"])
        .write_stdin("hi")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expected KEY=VALUE"));
}

#[test]
fn test_format_with_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("custom.toml");
    fs::write(&config, "channel_class = \"room\"\nboundaries = \"enforce\"\n").unwrap();

    cargo_bin_cmd!("slackfmt")
        .arg("--config")
        .arg(&config)
        .arg("format")
        .write_stdin("<#C1|general> snake_case_word")
        .assert()
        .success()
        .stdout("<span class=\"room\">general</span> snake_case_word\n");
}

#[test]
fn test_format_discovers_config_next_to_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("slackfmt.toml"), "preClass = \"pre\"\n").unwrap();
    let message = temp_dir.path().join("message.txt");
    fs::write(&message, "```x```").unwrap();

    cargo_bin_cmd!("slackfmt")
        .args(["format", message.to_str().unwrap()])
        .assert()
        .success()
        .stdout("<code class=\"pre\">x</code>\n");
}

#[test]
fn test_format_offset_replacement() {
    cargo_bin_cmd!("slackfmt")
        .args(["format", "--enforce-boundaries", "--offset-replacement"])
        .write_stdin("x`a` `a`")
        .assert()
        .success()
        .stdout("x`a` <code>a</code>\n");
}
