//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, or `std::fs`. Errors convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Resolution errors ─────────────────────────────────────────────────────────

/// Invalid invocation arguments. Always detected before any file is touched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("{0}")]
    Usage(String),

    #[error("unknown action \"{action}\". Only \"add\" is supported.")]
    UnknownAction { action: String },

    #[error("unknown target \"{target}\"")]
    UnknownTarget { target: String },

    #[error("unknown {target} name \"{name}\"")]
    UnknownName {
        target: String,
        name: String,
        available: Vec<String>,
    },

    #[error("unknown profile \"{name}\"")]
    UnknownProfile { name: String, available: Vec<String> },
}

impl ResolveError {
    /// Whether the usage block should follow the error message.
    #[must_use]
    pub fn shows_usage(&self) -> bool {
        matches!(
            self,
            Self::Usage(_) | Self::UnknownAction { .. } | Self::UnknownTarget { .. }
        )
    }

    /// Follow-up line listing valid choices, if any.
    #[must_use]
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::UnknownName { available, .. } => {
                Some(format!("Available: {}", available.join(", ")))
            }
            Self::UnknownProfile { available, .. } => {
                Some(format!("Available profiles: {}", available.join(", ")))
            }
            _ => None,
        }
    }

    /// Stable machine-readable code used in JSON error objects.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Usage(_) => "usage",
            Self::UnknownAction { .. } => "unknown_action",
            Self::UnknownTarget { .. } => "unknown_target",
            Self::UnknownName { .. } => "unknown_name",
            Self::UnknownProfile { .. } => "unknown_profile",
        }
    }
}
