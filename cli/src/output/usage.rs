//! The usage block printed after argument errors.

use claude_kit_common::Registry;

/// Name shown in usage text.
pub const BIN_NAME: &str = "claude-kit";

/// Render the usage block for `registry`: invocation shape, every target with
/// its available names, and every profile with its contents.
#[must_use]
pub fn render(registry: &Registry) -> String {
    let mut out = format!("Usage: {BIN_NAME} <target> add <name>\n\nTargets:\n");
    for t in registry.targets() {
        out.push_str(&format!(
            "  {}    available: {}\n",
            t.id,
            t.available.join(", ")
        ));
    }
    out.push_str("\nProfiles (install a curated bundle with: profile add <name>):\n");
    for p in registry.profiles() {
        out.push_str(&format!("  {}    {}\n", p.id, p.description));
        out.push_str(&format!("             rules:    {}\n", p.rules.join(", ")));
        out.push_str(&format!("             commands: {}\n", p.commands.join(", ")));
    }
    out
}
