//! Install plan types produced by the resolver.

use std::path::PathBuf;

use serde::Serialize;

/// One file to copy.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InstallOp {
    /// Target id the item belongs to (`"commands"`, `"rules"`).
    pub item_type: String,
    pub name: String,
    /// Template path relative to the package root.
    pub source: PathBuf,
    /// Absolute destination path under the working directory.
    pub destination: PathBuf,
}

impl InstallOp {
    /// `<item_type>/<name>`, as shown in progress lines.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}/{}", self.item_type, self.name)
    }
}

/// What the invocation asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanKind {
    /// `<target> add <name>`
    Single,
    /// `profile add <name>`
    Profile(String),
}

/// Ordered list of copies for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPlan {
    pub kind: PlanKind,
    pub ops: Vec<InstallOp>,
}

impl InstallPlan {
    /// Profile name when the plan came from `profile add`.
    #[must_use]
    pub fn profile(&self) -> Option<&str> {
        match &self.kind {
            PlanKind::Profile(name) => Some(name.as_str()),
            PlanKind::Single => None,
        }
    }
}
