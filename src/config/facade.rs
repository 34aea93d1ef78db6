//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::CanopyConfig;
use config::ConfigError;
use std::path::Path;
#[cfg(test)]
use std::path::PathBuf;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Get the XDG config file path (~/.config/canopy/config.toml)
    #[cfg(test)]
    pub(crate) fn xdg_config_path() -> Option<PathBuf> {
        super::xdg::config_home()
            .ok()
            .map(|home| home.join("canopy").join("config.toml"))
    }

    /// Load configuration from the global file and environment.
    pub fn load() -> Result<CanopyConfig, ConfigError> {
        MergeService::load()
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> Result<CanopyConfig, ConfigError> {
        MergeService::load_from_file(path)
    }

    /// Create default configuration.
    pub fn default() -> CanopyConfig {
        CanopyConfig::default()
    }
}
