//! Command implementations

pub mod add;
