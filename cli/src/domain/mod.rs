//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, or `std::fs`. All functions are synchronous and
//! take data in, returning data out.

pub mod error;
pub mod plan;
pub mod resolve;

pub use error::ResolveError;
pub use plan::{InstallOp, InstallPlan, PlanKind};
pub use resolve::{Invocation, resolve};
