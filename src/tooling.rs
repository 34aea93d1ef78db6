//! Tooling
//!
//! Command-line host for the tree engine.

pub mod cli;

pub use cli::{Cli, CliContext, Commands};
