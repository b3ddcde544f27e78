//! Integration tests for the interactive session

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::clialgo_cmd;

#[test]
fn test_welcome_and_exit() {
    let temp = TempDir::new().unwrap();

    clialgo_cmd(temp.path())
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello! Welcome to CLIAlgo Notes!"))
        .stdout(predicate::str::contains("Thank you for using CLIAlgo! Study hard!"));
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let temp = TempDir::new().unwrap();

    clialgo_cmd(temp.path())
        .write_stdin("list\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You have no notes!"))
        .stdout(predicate::str::contains("Study hard!"));
}

#[test]
fn test_first_start_creates_config() {
    let temp = TempDir::new().unwrap();

    clialgo_cmd(temp.path()).write_stdin("exit\n").assert().success();

    let config = fs::read_to_string(temp.path().join(".clialgo/config.toml")).unwrap();
    assert!(config.contains("export_dir = \"export\""));
}

#[test]
fn test_add_and_duplicate() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("queue.txt"), "FIFO").unwrap();

    let output = clialgo_cmd(temp.path())
        .write_stdin("add n/queue t/LINKED_LIST\nadd n/queue t/LINKED_LIST\nlist\nexit\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Successfully added queue into LINKED_LIST."));
    assert!(stdout.contains("A note named queue already exists"));
    assert_eq!(stdout.matches("] queue (").count(), 1);
}

#[test]
fn test_add_invalid_topic() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("bit.cpp"), "int tree[100];").unwrap();

    clialgo_cmd(temp.path())
        .write_stdin("add n/bit t/FENWICK_TREE\nlist\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Unsuccessful! FENWICK_TREE is not a topic in CS2040C.",
        ))
        .stdout(predicate::str::contains("You have no notes!"));
}

#[test]
fn test_add_missing_file() {
    let temp = TempDir::new().unwrap();

    clialgo_cmd(temp.path())
        .write_stdin("add n/ghost t/HEAP\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("ghost.txt or ghost.cpp does not exist"));
}

#[test]
fn test_remove() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("queue.txt"), "FIFO").unwrap();

    clialgo_cmd(temp.path())
        .write_stdin("add n/queue t/QUEUE\nremove n/queue\nremove n/queue\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully removed queue."))
        .stdout(predicate::str::contains("Type 'help c/remove' for assistance."));
}

#[test]
fn test_invalid_command_does_not_stop_session() {
    let temp = TempDir::new().unwrap();

    clialgo_cmd(temp.path())
        .write_stdin("fly\nlist extra\nhelp c/list\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid command! Unknown command 'fly'."))
        .stdout(predicate::str::contains("This function lists all stored notes."));
}

#[test]
fn test_help_overview() {
    let temp = TempDir::new().unwrap();

    clialgo_cmd(temp.path())
        .write_stdin("help\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("The available COMMAND_TYPE(s) are:"))
        .stdout(predicate::str::contains("help c/COMMAND_TYPE"));
}

#[test]
fn test_root_must_be_a_directory() {
    let temp = TempDir::new().unwrap();

    clialgo_cmd(&temp.path().join("missing"))
        .write_stdin("exit\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not a directory"));
}
