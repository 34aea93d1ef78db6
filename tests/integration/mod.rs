//! Integration tests for the canopy tree engine

mod cli_contracts;
mod history_bound;
mod persistence;
mod session_scenarios;
mod support;
mod tree_properties;
