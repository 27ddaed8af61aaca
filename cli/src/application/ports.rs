//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::borrow::Cow;
use std::path::Path;

use anyhow::Result;

// ── Template Port ─────────────────────────────────────────────────────────────

/// Read access to the bundled templates (the package root).
pub trait TemplateSource {
    /// Return the bytes of the template at `relative` (e.g. `commands/commit.md`).
    ///
    /// # Errors
    ///
    /// Returns an error if the template is missing or unreadable.
    fn read(&self, relative: &Path) -> Result<Cow<'static, [u8]>>;

    /// Human-readable location of the package root, for diagnostics.
    fn describe(&self) -> String;
}

// ── Filesystem Port ───────────────────────────────────────────────────────────

/// Writes installed files into the project.
pub trait InstallWriter {
    /// Create `path` and all missing parents.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Write `contents` to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn write(&self, path: &Path, contents: &[u8]) -> Result<()>;
}

// ── Progress Reporter Port ────────────────────────────────────────────────────

/// Receives progress events from application services so they never print
/// directly.
pub trait ProgressReporter {
    /// Open a group of related events, e.g. a profile install.
    fn step(&self, message: &str);
    /// Emit a success event nested under the current step.
    fn item(&self, message: &str);
    /// Close the current step with a success message.
    fn finish(&self, message: &str);
    /// Emit a standalone success message.
    fn success(&self, message: &str);
}
