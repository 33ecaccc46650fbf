//! External Catalog Tests
//!
//! Teams can point pwref at their own catalog TOML; the whole surface
//! then reflects that dataset instead of the built-in one.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

fn pwref() -> Command {
    Command::cargo_bin("pwref").unwrap()
}

const TINY_CATALOG: &str = r##"
comparisons = []
setup = []

[[categories]]
name = "Smoke"
icon = "🔥"
color = "#ff0000"
accent = "#ffeeee"
tip = "A one-command catalog."

[[categories.commands]]
action = "Only Action"
mcp = "browser_only"
hot = true

[[workflows]]
id = "smoke"
name = "Smoke Workflow"
icon = "🔥"
description = "A minimal workflow"
difficulty = "beginner"
category = "smoke"
expected_result = "It renders"
pro_tip = "Nothing to it"

[workflows.mcp]
description = "mcp side"
code = "browser_only()"

[workflows.cli]
description = "cli side"
code = "playwright only"

[workflows.test_runner]
description = "runner side"
code = "await page.only()"
"##;

#[test]
fn external_catalog_drives_stats_and_listing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.toml");
    std::fs::write(&path, TINY_CATALOG).unwrap();

    let output = pwref()
        .args(["stats", "--format", "json", "--catalog"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stats: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stats["mcp"], 1);
    assert_eq!(stats["cli"], 0);
    assert_eq!(stats["test"], 0);
    assert_eq!(stats["workflows"], 1);

    pwref()
        .args(["list", "--catalog"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Only Action"))
        .stdout(predicate::str::contains("browser_only"));
}

#[test]
fn missing_external_catalog_is_a_hard_error() {
    pwref()
        .args(["stats", "--catalog", "/nonexistent/catalog.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("catalog"));
}

#[test]
fn malformed_external_catalog_reports_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.toml");
    std::fs::write(&path, "categories = \"not a table\"").unwrap();

    pwref()
        .args(["stats", "--catalog"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("catalog.toml"));
}
