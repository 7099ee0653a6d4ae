//! Dispatcher Configuration
//!
//! Two layers live here: dispatcher settings (agents directory, logging) merged from an
//! optional global file and `NOX__*` environment variables, and the per-agent JSON
//! configuration files resolved from the command line.

pub mod agent_file;
mod facade;
mod sources;

pub use agent_file::{default_agent_path, AgentFile};
pub use facade::SettingsLoader;

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Dispatcher-wide settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DispatcherSettings {
    /// Directory holding `<name>_config.json` agent files.
    #[serde(default)]
    pub agents_dir: Option<PathBuf>,

    #[serde(default)]
    pub logging: LoggingConfig,
}
