//! SettingsLoader facade over the settings sources.

use super::sources;
use super::DispatcherSettings;
use config::{Config, ConfigError};
use std::path::Path;

/// Settings loader facade.
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load settings from the global file and environment.
    /// Precedence: global file (lowest) -> environment (highest).
    pub fn load() -> Result<DispatcherSettings, ConfigError> {
        match sources::global_settings_path() {
            Some(path) => Self::load_from_file(&path),
            None => Self::build(Config::builder()),
        }
    }

    /// Load settings from a specific file with environment overlay.
    /// A missing file is not an error.
    pub fn load_from_file(path: &Path) -> Result<DispatcherSettings, ConfigError> {
        Self::build(sources::add_file(Config::builder(), path))
    }

    fn build(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<DispatcherSettings, ConfigError> {
        let builder = sources::add_environment(builder);
        builder.build()?.try_deserialize()
    }
}
