//! Shared utilities

pub mod files;
pub mod ids;
