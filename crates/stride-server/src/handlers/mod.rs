//! HTTP request handlers organized by domain
//!
//! Each submodule contains handlers for a specific API area.

pub mod activities;
pub mod insights;

// Re-export all handlers for use in router
pub use activities::*;
pub use insights::*;
