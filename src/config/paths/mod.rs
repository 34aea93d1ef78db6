//! Platform path resolution.

pub mod xdg_root;

pub use xdg_root as xdg;
