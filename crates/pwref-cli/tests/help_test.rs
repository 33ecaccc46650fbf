//! Help Surface Tests
//!
//! Verifies the command tree exposes the documented surface.

use assert_cmd::Command;
use predicates::prelude::*;

fn pwref() -> Command {
    Command::cargo_bin("pwref").unwrap()
}

#[test]
fn main_help_lists_every_subcommand() {
    pwref()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("stats"))
        .stdout(predicate::str::contains("compare"))
        .stdout(predicate::str::contains("setup"))
        .stdout(predicate::str::contains("workflow"))
        .stdout(predicate::str::contains("tui"));
}

#[test]
fn workflow_help_lists_list_and_show() {
    pwref()
        .args(["workflow", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("show"));
}

#[test]
fn workflow_show_help_documents_copy_and_protocol() {
    pwref()
        .args(["workflow", "show", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--copy"))
        .stdout(predicate::str::contains("--protocol"))
        .stdout(predicate::str::contains("test-runner"));
}

#[test]
fn version_flag_works() {
    pwref()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pwref"));
}

#[test]
fn bare_invocation_prints_guidance_when_piped() {
    pwref()
        .assert()
        .success()
        .stdout(predicate::str::contains("pwref --help"));
}
