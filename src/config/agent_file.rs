//! Agent configuration files (`<name>_config.json`).

use crate::agent::AgentConfig;
use crate::error::ApiError;
use std::path::{Path, PathBuf};

pub const DEFAULT_AGENT_TYPE: &str = "devops";
pub const DEFAULT_AGENT_NAME: &str = "Generic Agent";

/// An agent configuration file with its type and name resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentFile {
    pub path: PathBuf,
    pub agent_type: String,
    pub name: String,
    /// The whole file, `type` and `name` included.
    pub config: AgentConfig,
}

impl AgentFile {
    /// Read an agent file; `type` defaults to "devops", `name` to "Generic Agent".
    pub fn load(path: &Path) -> Result<Self, ApiError> {
        let config = read_agent_config(path)?;
        let agent_type = config.agent_type()?.unwrap_or(DEFAULT_AGENT_TYPE).to_string();
        let name = config.name()?.unwrap_or(DEFAULT_AGENT_NAME).to_string();
        Ok(Self {
            path: path.to_path_buf(),
            agent_type,
            name,
            config,
        })
    }
}

/// Read and parse an agent configuration file.
pub fn read_agent_config(path: &Path) -> Result<AgentConfig, ApiError> {
    let text = std::fs::read_to_string(path).map_err(|source| ApiError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    AgentConfig::from_json_str(&text)
}

/// Conventional location of a named default agent.
pub fn default_agent_path(agents_dir: &Path, agent: &str) -> PathBuf {
    agents_dir.join(format!("{}_config.json", agent.to_lowercase()))
}

/// First existing `config` directory: next to the running executable, then under the
/// working directory. Falls back to the executable-adjacent path so a read error names it.
pub fn default_agents_dir() -> PathBuf {
    let candidates: Vec<PathBuf> = [
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("config"))),
        std::env::current_dir().ok().map(|dir| dir.join("config")),
    ]
    .into_iter()
    .flatten()
    .collect();

    first_existing_dir(&candidates)
        .or_else(|| candidates.first().cloned())
        .unwrap_or_else(|| PathBuf::from("config"))
}

fn first_existing_dir(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates.iter().find(|dir| dir.is_dir()).cloned()
}
