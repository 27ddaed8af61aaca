//! CLI argument parsing with clap derive

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use claude_kit_common::Registry;

use crate::commands;
use crate::domain::ResolveError;
use crate::output::OutputContext;
use crate::output::human::HumanRenderer;
use crate::output::json;

/// Install curated commands and rules into this project's .claude directory
#[derive(Parser)]
#[command(
    name = "claude-kit",
    version,
    override_usage = "claude-kit <target> add <name>\n       claude-kit profile add <profile>"
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Read templates from DIR instead of the bundled copies
    #[arg(long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// <target> add <name>, or profile add <profile>
    #[arg(value_name = "ARGS")]
    pub args: Vec<String>,
}

impl Cli {
    /// Execute the invocation and map the outcome to a process exit code.
    #[must_use]
    pub fn run(self) -> ExitCode {
        let ctx = OutputContext::new(self.no_color, self.quiet || self.json);
        let registry = Registry::builtin();
        match commands::add::run(
            &ctx,
            &registry,
            &self.args,
            self.source.as_deref(),
            self.json,
        ) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                report_failure(&ctx, &registry, self.json, &e);
                ExitCode::FAILURE
            }
        }
    }
}

/// Handle a clap parse error that is not `--help`/`--version`: argument shape
/// problems are usage errors and exit 1 like every other bad invocation.
#[must_use]
pub fn usage_failure(err: &clap::Error) -> ExitCode {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    let message = first.strip_prefix("error: ").unwrap_or(first).to_string();

    let ctx = OutputContext::new(false, false);
    let registry = Registry::builtin();
    let err = anyhow::Error::new(ResolveError::Usage(message));
    HumanRenderer::new(&ctx).render_failure(&registry, &err);
    ExitCode::FAILURE
}

fn report_failure(ctx: &OutputContext, registry: &Registry, json_output: bool, err: &anyhow::Error) {
    if json_output {
        match json::format_error(&format!("{err:#}"), json::error_code(err)) {
            Ok(obj) => {
                println!("{obj}");
                return;
            }
            Err(e) => tracing::warn!(error = %e, "cannot render JSON error"),
        }
    }
    HumanRenderer::new(ctx).render_failure(registry, err);
}
