//! The catalog that ships with the installer.
//!
//! Every name listed here must have a matching template under the CLI's
//! `templates/` directory; the CLI tests check both directions.

use crate::types::{COMMANDS, Profile, RULES, Target};

/// Slash-command templates installed into `.claude/commands/`.
pub const COMMAND_NAMES: &[&str] = &[
    "commit",
    "organize-imports",
    "check-memoization",
    "start-interviewing",
    "plan-phases",
];

/// Rule templates installed into `.claude/rules/`.
pub const RULE_NAMES: &[&str] = &["security", "typescript"];

/// Built-in targets in display order.
#[must_use]
pub fn targets() -> Vec<Target> {
    vec![
        Target::new(COMMANDS, "commands", ".md", COMMAND_NAMES),
        Target::new(RULES, "rules", ".md", RULE_NAMES),
    ]
}

/// Built-in profiles in display order.
#[must_use]
pub fn profiles() -> Vec<Profile> {
    vec![Profile::new(
        "typescript",
        "TypeScript development: type safety rules + quality commands",
        &["typescript", "security"],
        &[
            "commit",
            "organize-imports",
            "check-memoization",
            "plan-phases",
            "start-interviewing",
        ],
    )]
}
