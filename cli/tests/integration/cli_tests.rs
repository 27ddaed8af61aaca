//! Integration tests for argument parsing, help, and usage errors

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

pub fn claude_kit(dir: &std::path::Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("claude-kit"));
    cmd.current_dir(dir).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

// --- Help and version tests ---

#[test]
fn test_help_flag_shows_usage() {
    let dir = tempfile::tempdir().expect("tempdir");
    claude_kit(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("claude-kit <target> add <name>"))
        .stdout(predicate::str::contains("--source"));
}

#[test]
fn test_version_flag_shows_version() {
    let dir = tempfile::tempdir().expect("tempdir");
    claude_kit(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("claude-kit"));
}

// --- Usage errors ---

#[test]
fn test_no_args_is_unknown_target_with_usage() {
    let dir = tempfile::tempdir().expect("tempdir");
    claude_kit(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: unknown target \"\""))
        .stderr(predicate::str::contains("Usage: claude-kit <target> add <name>"))
        .stderr(predicate::str::contains("Profiles (install a curated bundle"));
}

#[test]
fn test_unknown_target_exits_one_with_usage() {
    let dir = tempfile::tempdir().expect("tempdir");
    claude_kit(dir.path())
        .args(["agents", "add", "x"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: unknown target \"agents\""))
        .stderr(predicate::str::contains("Targets:"));
    assert!(!dir.path().join(".claude").exists());
}

#[test]
fn test_unknown_action_exits_one_with_usage() {
    let dir = tempfile::tempdir().expect("tempdir");
    claude_kit(dir.path())
        .args(["commands", "remove", "commit"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: unknown action \"remove\". Only \"add\" is supported.",
        ))
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_extra_argument_exits_one() {
    let dir = tempfile::tempdir().expect("tempdir");
    claude_kit(dir.path())
        .args(["commands", "add", "commit", "again"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unexpected argument(s): again"))
        .stderr(predicate::str::contains("Usage:"));
    assert!(!dir.path().join(".claude").exists());
}

#[test]
fn test_unknown_flag_exits_one_not_two() {
    let dir = tempfile::tempdir().expect("tempdir");
    claude_kit(dir.path())
        .args(["--force", "commands", "add", "commit"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("Usage: claude-kit"));
}

#[test]
fn test_json_error_object() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = claude_kit(dir.path())
        .args(["--json", "rules", "add", "python"])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&out).expect("valid JSON");
    assert_eq!(value["error"], true);
    assert_eq!(value["code"], "unknown_name");
}

// --- NO_COLOR handling ---

#[test]
fn test_no_color_env_values_do_not_break_installs() {
    for value in ["1", "", "true", "yes"] {
        let dir = tempfile::tempdir().expect("tempdir");
        claude_kit(dir.path())
            .env("NO_COLOR", value)
            .args(["rules", "add", "security"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\x1b[").not());
        assert!(
            dir.path().join(".claude/rules/security.md").is_file(),
            "NO_COLOR={value:?} should still install"
        );
    }
}

#[test]
fn test_no_color_flag_is_accepted() {
    let dir = tempfile::tempdir().expect("tempdir");
    claude_kit(dir.path())
        .env_remove("NO_COLOR")
        .args(["--no-color", "commands", "add", "commit"])
        .assert()
        .success();
}
