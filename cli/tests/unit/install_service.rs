//! Tests for the `install` application service.
//!
//! Verifies copy order, directory creation, reporting, and that a failing
//! copy stops the run without undoing earlier copies.

#![allow(clippy::expect_used)]

use std::path::{Path, PathBuf};

use claude_kit::application::services::install::execute;
use claude_kit::domain::{Invocation, resolve};
use claude_kit_common::Registry;

use crate::helpers::{
    FsCall, MemoryTemplates, RecordingReporter, RecordingWriter, builtin_templates,
};

fn plan(args: &[&str]) -> claude_kit::domain::InstallPlan {
    let inv = Invocation::from_args(args).expect("args");
    resolve(&Registry::builtin(), inv, Path::new("/proj")).expect("valid plan")
}

#[test]
fn single_item_creates_dir_then_writes_template_bytes() {
    let templates = MemoryTemplates::default().with("commands/commit.md", "# commit body\n");
    let writer = RecordingWriter::default();
    let reporter = RecordingReporter::default();

    let report = execute(&plan(&["commands", "add", "commit"]), &templates, &writer, &reporter)
        .expect("install");

    let dest = PathBuf::from("/proj/.claude/commands/commit.md");
    assert_eq!(
        *writer.calls.borrow(),
        vec![
            FsCall::CreateDir(PathBuf::from("/proj/.claude/commands")),
            FsCall::Write(dest.clone(), b"# commit body\n".to_vec()),
        ]
    );
    assert_eq!(report.profile, None);
    assert_eq!(report.installed.len(), 1);
    assert_eq!(
        *reporter.lines.borrow(),
        vec![format!("ok: Installed commands/commit → {}", dest.display())]
    );
}

#[test]
fn profile_writes_rules_then_commands_in_listed_order() {
    let writer = RecordingWriter::default();
    let reporter = RecordingReporter::default();

    let report = execute(
        &plan(&["profile", "add", "typescript"]),
        &builtin_templates(),
        &writer,
        &reporter,
    )
    .expect("install");

    let expected: Vec<PathBuf> = [
        "rules/typescript.md",
        "rules/security.md",
        "commands/commit.md",
        "commands/organize-imports.md",
        "commands/check-memoization.md",
        "commands/plan-phases.md",
        "commands/start-interviewing.md",
    ]
    .iter()
    .map(|p| Path::new("/proj/.claude").join(p))
    .collect();
    assert_eq!(writer.written(), expected);
    assert_eq!(report.profile.as_deref(), Some("typescript"));
    assert_eq!(report.installed.len(), 7);

    let lines = reporter.lines.borrow();
    assert_eq!(lines.first().map(String::as_str), Some("step: Installing profile \"typescript\"..."));
    assert_eq!(
        lines.last().map(String::as_str),
        Some("done: Profile \"typescript\" installed successfully.")
    );
    assert_eq!(lines.len(), 9);
    assert!(
        lines[1..8].iter().all(|l| l.starts_with("item: Installed ")),
        "profile items are nested under the step: {lines:?}"
    );
}

#[test]
fn missing_template_stops_run_and_keeps_earlier_copies() {
    // Drop one command template from an otherwise complete bundle.
    let mut templates = MemoryTemplates::default();
    for (rel, body) in [
        ("rules/typescript.md", "ts"),
        ("rules/security.md", "sec"),
        ("commands/commit.md", "commit"),
    ] {
        templates = templates.with(rel, body);
    }
    let writer = RecordingWriter::default();
    let reporter = RecordingReporter::default();

    let err = execute(&plan(&["profile", "add", "typescript"]), &templates, &writer, &reporter)
        .unwrap_err();

    let msg = format!("{err:#}");
    assert!(msg.contains("organize-imports.md"), "error should name the template: {msg}");
    assert_eq!(writer.written().len(), 3, "earlier copies are not rolled back");
    assert!(
        !reporter.lines.borrow().iter().any(|l| l.contains("installed successfully")),
        "no completion line after a failure"
    );
}

#[test]
fn write_failure_propagates_with_path() {
    let dest = PathBuf::from("/proj/.claude/rules/security.md");
    let writer = RecordingWriter::failing_on(&dest);
    let reporter = RecordingReporter::default();

    let err = execute(
        &plan(&["rules", "add", "security"]),
        &builtin_templates(),
        &writer,
        &reporter,
    )
    .unwrap_err();

    assert!(err.to_string().contains("security.md"));
    assert!(writer.written().is_empty());
    assert!(reporter.lines.borrow().is_empty());
}

#[test]
fn rerunning_produces_identical_writes() {
    let templates = builtin_templates();
    let first = RecordingWriter::default();
    let second = RecordingWriter::default();
    let reporter = RecordingReporter::default();
    let p = plan(&["rules", "add", "typescript"]);

    execute(&p, &templates, &first, &reporter).expect("first run");
    execute(&p, &templates, &second, &reporter).expect("second run");

    assert_eq!(*first.calls.borrow(), *second.calls.borrow());
}
