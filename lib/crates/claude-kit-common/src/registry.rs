//! Immutable lookup tables for targets and profiles, plus consistency checks.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::catalog;
use crate::types::{PROFILE, Profile, Target};

/// Item names become file names, so they are restricted to lowercase
/// kebab-case slugs and can never contain a path separator or `..`.
static ITEM_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^[a-z0-9]([a-z0-9-]*[a-z0-9])?$").expect("valid regex")
});

/// Returns `true` if `name` is usable as an item or profile identifier.
#[must_use]
pub fn is_valid_item_name(name: &str) -> bool {
    ITEM_NAME_RE.is_match(name)
}

/// Catalog inconsistencies. Any of these is a packaging defect, never a
/// user input problem.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("target '{0}' is defined more than once")]
    DuplicateTarget(String),

    #[error("'profile' is reserved and cannot be used as a target id")]
    ReservedTarget,

    #[error("profile '{0}' is defined more than once")]
    DuplicateProfile(String),

    #[error("invalid {kind} name '{name}': must be lowercase alphanumeric with hyphens")]
    InvalidName { kind: String, name: String },

    #[error("target '{target}' lists '{name}' more than once")]
    DuplicateItem { target: String, name: String },

    #[error("profile '{profile}' references unknown target '{target}'")]
    UnknownProfileTarget { profile: String, target: String },

    #[error("profile '{profile}' references unknown {target} item '{name}'")]
    UnknownProfileItem {
        profile: String,
        target: String,
        name: String,
    },
}

/// The fixed set of targets and profiles known to one installer run.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Registry {
    targets: Vec<Target>,
    profiles: Vec<Profile>,
}

impl Registry {
    /// Assemble a registry. Call [`Registry::validate`] before resolving
    /// against it.
    #[must_use]
    pub fn new(targets: Vec<Target>, profiles: Vec<Profile>) -> Self {
        Self { targets, profiles }
    }

    /// The catalog shipped with the installer.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(catalog::targets(), catalog::profiles())
    }

    #[must_use]
    pub fn target(&self, id: &str) -> Option<&Target> {
        self.targets.iter().find(|t| t.id == id)
    }

    #[must_use]
    pub fn profile(&self, id: &str) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    #[must_use]
    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    /// Profile ids in definition order.
    #[must_use]
    pub fn profile_names(&self) -> Vec<String> {
        self.profiles.iter().map(|p| p.id.clone()).collect()
    }

    /// Check that ids are unique and well-formed and that every profile
    /// entry names an item its target actually ships.
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found.
    pub fn validate(&self) -> Result<(), RegistryError> {
        for (i, target) in self.targets.iter().enumerate() {
            if target.id == PROFILE {
                return Err(RegistryError::ReservedTarget);
            }
            if self.targets[..i].iter().any(|t| t.id == target.id) {
                return Err(RegistryError::DuplicateTarget(target.id.clone()));
            }
            for (j, name) in target.available.iter().enumerate() {
                if !is_valid_item_name(name) {
                    return Err(RegistryError::InvalidName {
                        kind: target.id.clone(),
                        name: name.clone(),
                    });
                }
                if target.available[..j].contains(name) {
                    return Err(RegistryError::DuplicateItem {
                        target: target.id.clone(),
                        name: name.clone(),
                    });
                }
            }
        }

        for (i, profile) in self.profiles.iter().enumerate() {
            if !is_valid_item_name(&profile.id) {
                return Err(RegistryError::InvalidName {
                    kind: PROFILE.to_string(),
                    name: profile.id.clone(),
                });
            }
            if self.profiles[..i].iter().any(|p| p.id == profile.id) {
                return Err(RegistryError::DuplicateProfile(profile.id.clone()));
            }
            for (target_id, name) in profile.items() {
                let Some(target) = self.target(target_id) else {
                    return Err(RegistryError::UnknownProfileTarget {
                        profile: profile.id.clone(),
                        target: target_id.to_string(),
                    });
                };
                if !target.contains(name) {
                    return Err(RegistryError::UnknownProfileItem {
                        profile: profile.id.clone(),
                        target: target_id.to_string(),
                        name: name.to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}
