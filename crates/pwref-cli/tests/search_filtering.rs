//! Search & Filtering Tests
//!
//! Exercises the filter/compose pipeline through the CLI surface,
//! asserting against the machine-readable JSON output.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

fn pwref() -> Command {
    Command::cargo_bin("pwref").unwrap()
}

fn json_stdout(args: &[&str]) -> Value {
    let output = pwref().args(args).output().unwrap();
    assert!(output.status.success(), "command failed: {:?}", args);
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn search_click_retains_matching_categories_in_order() {
    let sections = json_stdout(&["search", "click", "--format", "json"]);
    let sections = sections.as_array().unwrap();

    assert!(!sections.is_empty());
    let names: Vec<&str> = sections
        .iter()
        .map(|section| section["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"Interactions"));

    // Survivors appear in original dataset order.
    let dataset_order = [
        "Navigation",
        "Interactions",
        "Capture & Snapshot",
        "Tab Management",
        "DevTools & Debug",
        "Testing & Codegen",
        "Sessions (CLI)",
        "Mouse & Keys (CLI)",
    ];
    let positions: Vec<usize> = names
        .iter()
        .map(|name| dataset_order.iter().position(|n| n == name).unwrap())
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));

    // Every surviving command matches the query somewhere.
    for section in sections {
        for command in section["commands"].as_array().unwrap() {
            let mut haystack = command["action"].as_str().unwrap().to_lowercase();
            for field in ["mcp", "cli", "test"] {
                if let Some(text) = command[field].as_str() {
                    haystack.push(' ');
                    haystack.push_str(&text.to_lowercase());
                }
            }
            assert!(haystack.contains("click"), "unexpected survivor: {}", command);
        }
    }
}

#[test]
fn search_with_no_match_returns_empty_list() {
    let sections = json_stdout(&["search", "ZZZ-no-match", "--format", "json"]);
    assert_eq!(sections.as_array().unwrap().len(), 0);
}

#[test]
fn search_plain_reports_no_match_without_failing() {
    pwref()
        .args(["search", "ZZZ-no-match"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No commands match"));
}

#[test]
fn list_defaults_to_the_first_category() {
    let sections = json_stdout(&["list", "--format", "json"]);
    let sections = sections.as_array().unwrap();

    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0]["name"], "Navigation");
    assert_eq!(sections[0]["commands"].as_array().unwrap().len(), 5);
}

#[test]
fn list_by_category_is_case_insensitive() {
    let sections = json_stdout(&["list", "--category", "interactions", "--format", "json"]);
    let sections = sections.as_array().unwrap();

    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0]["name"], "Interactions");
}

#[test]
fn list_with_unknown_category_fails_and_names_the_valid_ones() {
    pwref()
        .args(["list", "--category", "Nonsense"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown category"))
        .stderr(predicate::str::contains("Navigation"));
}

#[test]
fn list_query_overrides_category_selection() {
    // Searching wins over grouping: a query on a --category listing still
    // sweeps all categories.
    let sections = json_stdout(&[
        "list",
        "--category",
        "Navigation",
        "--query",
        "session-list",
        "--format",
        "json",
    ]);
    let sections = sections.as_array().unwrap();

    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0]["name"], "Sessions (CLI)");
}

#[test]
fn not_applicable_fields_are_omitted_from_json() {
    let sections = json_stdout(&["list", "--category", "Sessions (CLI)", "--format", "json"]);
    let commands = sections[0]["commands"].as_array().unwrap();

    for command in commands {
        assert!(command.get("mcp").is_none());
        assert!(command["cli"].is_string());
    }
}
