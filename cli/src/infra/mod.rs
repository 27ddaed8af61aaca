//! Infrastructure layer — concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: template lookup and
//! filesystem writes.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod fs;
pub mod templates;

pub use fs::LocalFs;
pub use templates::{DirTemplates, EmbeddedTemplates};
