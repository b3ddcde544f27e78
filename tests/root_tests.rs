//! Integration tests for workspace root resolution

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn bare_cmd() -> Command {
    let mut cmd = Command::cargo_bin("clialgo").unwrap();
    cmd.env_remove("CLIALGO_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_root_from_env() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("heap.txt"), "heap notes").unwrap();

    bare_cmd()
        .env("CLIALGO_ROOT", temp.path())
        .write_stdin("add n/heap t/HEAP\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully added heap into HEAP."));

    assert!(temp.path().join(".clialgo/notes.toml").exists());
}

#[test]
fn test_bad_env_root_is_named_in_error() {
    let temp = TempDir::new().unwrap();

    bare_cmd()
        .env("CLIALGO_ROOT", temp.path().join("missing"))
        .write_stdin("exit\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("CLIALGO_ROOT points to"));
}

#[test]
fn test_root_flag_wins_over_env() {
    let flag_root = TempDir::new().unwrap();
    let env_root = TempDir::new().unwrap();

    bare_cmd()
        .env("CLIALGO_ROOT", env_root.path())
        .arg("--root")
        .arg(flag_root.path())
        .write_stdin("exit\n")
        .assert()
        .success();

    assert!(flag_root.path().join(".clialgo").is_dir());
    assert!(!env_root.path().join(".clialgo").exists());
}

#[test]
fn test_bad_root_flag_is_named_in_error() {
    let temp = TempDir::new().unwrap();

    bare_cmd()
        .arg("--root")
        .arg(temp.path().join("missing"))
        .write_stdin("exit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--root points to"));
}
