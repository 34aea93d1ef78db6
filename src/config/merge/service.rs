//! MergeService: layers defaults, a config file and the environment into a CanopyConfig.

use crate::config::sources::{environment, global_file};
use crate::config::CanopyConfig;
use config::{ConfigError, File, Map};
use std::path::Path;

use super::merge_policy;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Defaults, then the global file, then the environment.
    pub fn load() -> Result<CanopyConfig, ConfigError> {
        Self::compose(None, None)
    }

    /// Defaults, then `path` in place of the global file, then the environment.
    pub fn load_from_file(path: &Path) -> Result<CanopyConfig, ConfigError> {
        Self::compose(Some(path), None)
    }

    /// Compose every layer; `vars` replaces the process environment when given.
    pub(crate) fn compose(
        file: Option<&Path>,
        vars: Option<Map<String, String>>,
    ) -> Result<CanopyConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = match file {
            Some(path) => builder.add_source(File::from(path)),
            None => global_file::add_to_builder(builder)?,
        };
        let builder = environment::add_to_builder(builder, vars)?;
        builder.build()?.try_deserialize()
    }
}
