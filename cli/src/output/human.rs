//! Human-readable terminal renderer for failures.

use claude_kit_common::Registry;

use crate::domain::ResolveError;
use crate::output::{OutputContext, usage};

/// Renders errors as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Print a failed run to stderr.
    ///
    /// Argument errors get their hint line and, for shape errors, the usage
    /// block. Anything else is printed with its full context chain.
    pub fn render_failure(&self, registry: &Registry, err: &anyhow::Error) {
        let Some(resolve) = err.downcast_ref::<ResolveError>() else {
            self.ctx.error(&format!("{err:#}"));
            return;
        };
        self.ctx.error(&resolve.to_string());
        if let Some(hint) = resolve.hint() {
            eprintln!("{hint}");
        }
        if resolve.shows_usage() {
            eprintln!();
            eprint!("{}", usage::render(registry));
        }
    }
}
