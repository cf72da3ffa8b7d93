//! Command handlers. Each one turns parsed arguments into calls on the
//! core and adapter crates, then reports through [`crate::output::OutputManager`].

pub mod completions;
pub mod config;
pub mod generate;
