//! JSON output helpers for `--json`.

use anyhow::{Context, Result};

use claude_kit_common::RegistryError;

use crate::application::services::install::InstallReport;
use crate::domain::ResolveError;

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Format a completed install as pretty JSON.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_report(report: &InstallReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("JSON serialization failed")
}

/// Machine-readable code for a failed run.
#[must_use]
pub fn error_code(err: &anyhow::Error) -> &'static str {
    if let Some(resolve) = err.downcast_ref::<ResolveError>() {
        resolve.code()
    } else if err.downcast_ref::<RegistryError>().is_some() {
        "internal"
    } else {
        "filesystem"
    }
}
