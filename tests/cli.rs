//! Command-line surface tests
//!
//! Only paths that exit before the terminal is taken over are exercised here.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn typeahead(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("typeahead").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env("XDG_CACHE_HOME", home.path().join(".cache"));
    cmd
}

#[test]
fn test_help_lists_flags() {
    let home = TempDir::new().unwrap();
    typeahead(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--strategy"))
        .stdout(predicate::str::contains("--endpoint"))
        .stdout(predicate::str::contains("--max-visible"));
}

#[test]
fn test_help_lists_strategy_values() {
    let home = TempDir::new().unwrap();
    typeahead(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("live"))
        .stdout(predicate::str::contains("preload"));
}

#[test]
fn test_version() {
    let home = TempDir::new().unwrap();
    typeahead(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_strategy_rejected() {
    let home = TempDir::new().unwrap();
    typeahead(&home)
        .args(["--strategy", "eager"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'eager'"));
}

#[test]
fn test_malformed_config_fails_before_ui() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("broken.toml");
    fs::write(&config, "[source\nstrategy = ").unwrap();

    typeahead(&home)
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config file"));
}

#[test]
fn test_invalid_endpoint_fails_before_ui() {
    let home = TempDir::new().unwrap();
    typeahead(&home)
        .args(["--endpoint", "not a url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid endpoint"));
}

#[test]
fn test_missing_explicit_config_fails_before_ui() {
    let home = TempDir::new().unwrap();
    typeahead(&home)
        .arg("--config")
        .arg(home.path().join("nope.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}
