//! Application service — copy the files of a resolved plan into the project.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::application::ports::{InstallWriter, ProgressReporter, TemplateSource};
use crate::domain::plan::{InstallOp, InstallPlan};

/// Outcome of a completed install, in plan order.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InstallReport {
    pub profile: Option<String>,
    pub installed: Vec<InstallOp>,
}

/// Copy every operation of `plan`, in order.
///
/// Each destination directory is created on demand and existing files are
/// overwritten. Copies are not transactional: if one fails, the ones before
/// it stay in place and the rest are not attempted.
///
/// # Errors
///
/// Returns an error naming the failing path if a template cannot be read or
/// a destination cannot be written.
pub fn execute(
    plan: &InstallPlan,
    templates: &impl TemplateSource,
    writer: &impl InstallWriter,
    reporter: &impl ProgressReporter,
) -> Result<InstallReport> {
    let profile = plan.profile();
    if let Some(name) = profile {
        reporter.step(&format!("Installing profile \"{name}\"..."));
    }

    let mut installed = Vec::with_capacity(plan.ops.len());
    for op in &plan.ops {
        copy_one(op, templates, writer)?;
        let message = format!("Installed {} → {}", op.label(), op.destination.display());
        if profile.is_some() {
            reporter.item(&message);
        } else {
            reporter.success(&message);
        }
        installed.push(op.clone());
    }

    if let Some(name) = profile {
        reporter.finish(&format!("Profile \"{name}\" installed successfully."));
    }

    Ok(InstallReport {
        profile: profile.map(ToString::to_string),
        installed,
    })
}

fn copy_one(
    op: &InstallOp,
    templates: &impl TemplateSource,
    writer: &impl InstallWriter,
) -> Result<()> {
    let contents = templates.read(&op.source).with_context(|| {
        format!(
            "reading template {} from {}",
            op.source.display(),
            templates.describe()
        )
    })?;

    if let Some(dir) = op.destination.parent() {
        writer.create_dir_all(dir)?;
    }
    writer.write(&op.destination, &contents)?;

    tracing::debug!(
        item = %op.label(),
        dest = %op.destination.display(),
        bytes = contents.len(),
        "copied template"
    );
    Ok(())
}
