//! Environment variable source: `CANOPY__SECTION__KEY`
//!
//! The doubled prefix separator keeps the `CANOPY_LOG*` logging variables out
//! of the configuration tree.

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, Environment, Map};

pub const ENV_PREFIX: &str = "CANOPY";

/// Environment source, reading `vars` instead of the process environment when given
pub fn source(vars: Option<Map<String, String>>) -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
        .source(vars)
}

pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    vars: Option<Map<String, String>>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(builder.add_source(source(vars)))
}
