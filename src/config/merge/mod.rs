//! Merge layer: default values and the service that composes sources.

pub mod merge_policy;
pub mod service;
