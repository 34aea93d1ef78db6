//! Built-in defaults every merge starts from.

use crate::types::DEFAULT_HISTORY_LIMIT;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Builder seeded with the lowest-precedence defaults.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("history.limit", DEFAULT_HISTORY_LIMIT as u64)?
        .set_default("storage.ephemeral", false)
}
