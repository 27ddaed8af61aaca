//! Shared catalog types for the claude-kit installer.
//!
//! A [`Registry`] holds the installable [`Target`]s (commands, rules) and the
//! curated [`Profile`] bundles. It is an immutable value built once at
//! startup and handed to whoever needs it.

pub mod catalog;
pub mod registry;
pub mod types;

pub use registry::{Registry, RegistryError, is_valid_item_name};
pub use types::*;
