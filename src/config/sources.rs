//! Settings sources: global settings file and NOX__* environment overlay.

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File};
use std::path::{Path, PathBuf};

/// Platform config location of the global settings file.
pub fn global_settings_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "nox", "nox")
        .map(|dirs| dirs.config_dir().join("settings.toml"))
}

/// Add an optional settings file; the extension selects the format.
pub fn add_file(builder: ConfigBuilder<DefaultState>, path: &Path) -> ConfigBuilder<DefaultState> {
    builder.add_source(File::from(path).required(false))
}

/// Add environment variable overlay to builder.
/// Uses NOX prefix and __ as separator for nested keys (NOX__LOGGING__LEVEL).
pub fn add_environment(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("NOX")
            .separator("__")
            .try_parsing(true),
    )
}
