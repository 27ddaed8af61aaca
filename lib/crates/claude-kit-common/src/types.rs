use std::path::{Path, PathBuf};

use serde::Serialize;

/// Target identifier for slash-command templates.
pub const COMMANDS: &str = "commands";

/// Target identifier for rule templates.
pub const RULES: &str = "rules";

/// Pseudo-target that selects a profile instead of a single item.
pub const PROFILE: &str = "profile";

/// The only supported action keyword.
pub const ADD: &str = "add";

/// Project-local configuration directory that all targets install under.
pub const CONFIG_DIR: &str = ".claude";

/// A category of installable item.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Target {
    pub id: String,
    /// Item names that ship with the installer, in display order.
    pub available: Vec<String>,
    /// Directory under the package root holding the templates.
    pub src_dir: String,
    /// Directory under the working directory receiving the installed files.
    pub dest_dir: PathBuf,
    /// File extension including the leading dot, e.g. `".md"`.
    pub ext: String,
}

impl Target {
    /// Build a target that installs `<src_dir>/<name><ext>` into
    /// `.claude/<src_dir>/`.
    #[must_use]
    pub fn new(id: &str, src_dir: &str, ext: &str, available: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            available: available.iter().map(ToString::to_string).collect(),
            src_dir: src_dir.to_string(),
            dest_dir: Path::new(CONFIG_DIR).join(src_dir),
            ext: ext.to_string(),
        }
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.available.iter().any(|n| n == name)
    }

    /// File name of an item, e.g. `commit.md`.
    #[must_use]
    pub fn file_name(&self, name: &str) -> String {
        format!("{name}{}", self.ext)
    }

    /// Template path relative to the package root.
    #[must_use]
    pub fn source_path(&self, name: &str) -> PathBuf {
        Path::new(&self.src_dir).join(self.file_name(name))
    }

    /// Install path of an item under `cwd`.
    #[must_use]
    pub fn dest_path(&self, cwd: &Path, name: &str) -> PathBuf {
        cwd.join(&self.dest_dir).join(self.file_name(name))
    }
}

/// A named bundle of rules and commands installed together.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Profile {
    pub id: String,
    pub description: String,
    pub rules: Vec<String>,
    pub commands: Vec<String>,
}

impl Profile {
    #[must_use]
    pub fn new(id: &str, description: &str, rules: &[&str], commands: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            description: description.to_string(),
            rules: rules.iter().map(ToString::to_string).collect(),
            commands: commands.iter().map(ToString::to_string).collect(),
        }
    }

    /// `(target id, item name)` pairs in install order: every rule first,
    /// then every command, each in the order listed.
    pub fn items(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.rules
            .iter()
            .map(|n| (RULES, n.as_str()))
            .chain(self.commands.iter().map(|n| (COMMANDS, n.as_str())))
    }

    /// Number of files the profile installs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len() + self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
