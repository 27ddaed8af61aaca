//! `add` command: `<target> add <name>` and `profile add <profile>`.

use std::path::Path;

use anyhow::{Context, Result};
use claude_kit_common::Registry;

use crate::application::services::install;
use crate::domain::{Invocation, resolve};
use crate::infra::{DirTemplates, EmbeddedTemplates, LocalFs};
use crate::output::OutputContext;
use crate::output::json;
use crate::output::reporter::TerminalReporter;

/// Resolve `args` against `registry` and copy the resulting files into the
/// current working directory.
///
/// Every argument is validated before anything is written. Templates come
/// from `source` when given, otherwise from the bundle compiled into the
/// binary.
///
/// # Errors
///
/// Returns a [`crate::domain::ResolveError`] for bad arguments, or an I/O
/// error with path context if a copy fails.
pub fn run(
    ctx: &OutputContext,
    registry: &Registry,
    args: &[String],
    source: Option<&Path>,
    json_output: bool,
) -> Result<()> {
    registry
        .validate()
        .inspect_err(|e| tracing::warn!(error = %e, "catalog failed validation"))
        .context("built-in catalog is inconsistent")?;

    let inv = Invocation::from_args(args)?;
    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let plan = resolve(registry, inv, &cwd)?;

    let reporter = TerminalReporter::new(ctx);
    let report = match source {
        Some(dir) => install::execute(&plan, &DirTemplates::new(dir), &LocalFs, &reporter)?,
        None => install::execute(&plan, &EmbeddedTemplates, &LocalFs, &reporter)?,
    };

    if json_output {
        println!("{}", json::format_report(&report)?);
    }
    Ok(())
}
