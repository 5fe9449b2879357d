//! Command implementations

mod serve;

pub use serve::cmd_serve;
