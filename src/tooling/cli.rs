//! CLI Tooling
//!
//! Command-line surface of the dispatcher. Resolves one agent from flags or from a
//! default agent file, runs one message through it and renders the JSON payload.

use crate::agent::{load_agent, Agent, AgentConfig};
use crate::config::agent_file::{default_agents_dir, read_agent_config};
use crate::config::{default_agent_path, AgentFile, DispatcherSettings};
use crate::error::ApiError;
use crate::logging::{LogSink, LoggingConfig};
use clap::Parser;
use serde_json::json;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use tracing::{error, info};

/// Name given to agents built from `--agent-type` without `--agent-name`.
const INLINE_AGENT_NAME: &str = "Agent";

/// NOX agent dispatcher - answer one message with a knowledge-backed agent
#[derive(Parser, Debug, Clone)]
#[command(name = "nox-agent")]
#[command(about = "Answer one message with a keyword-driven, knowledge-backed agent")]
pub struct Cli {
    /// Agent type (devops)
    #[arg(long)]
    pub agent_type: Option<String>,

    /// Agent name (with --agent-type)
    #[arg(long)]
    pub agent_name: Option<String>,

    /// Agent configuration as inline JSON (with --agent-type)
    #[arg(long)]
    pub config: Option<String>,

    /// Agent configuration file (with --agent-type, ignored when --config is given)
    #[arg(long)]
    pub config_file: Option<PathBuf>,

    /// Message to process
    #[arg(long)]
    pub message: String,

    /// Default agent loaded when no --agent-type is given
    #[arg(long, default_value = "nox")]
    pub default_agent: String,

    /// Directory holding <name>_config.json agent files
    #[arg(long)]
    pub agents_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Fold the logging flags over the configured logging section.
    pub fn logging_config(&self, base: &LoggingConfig) -> LoggingConfig {
        let mut config = base.clone();
        if let Some(level) = &self.log_level {
            config.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            config.file = Some(file.clone());
        }
        config
    }
}

/// Success payload written to stdout.
pub fn render_response(response: &str) -> String {
    json!({ "response": response }).to_string()
}

/// Failure payload written to stdout.
pub fn render_error(message: &str) -> String {
    json!({ "error": message }).to_string()
}

/// Everything a single dispatch needs besides the parsed flags.
pub struct CliContext {
    settings: DispatcherSettings,
    log_sink: LogSink,
}

impl CliContext {
    pub fn new(settings: DispatcherSettings, log_sink: LogSink) -> Self {
        Self { settings, log_sink }
    }

    /// Precedence: --agents-dir, settings, then `config` next to the executable.
    pub fn agents_dir(&self, cli: &Cli) -> PathBuf {
        cli.agents_dir
            .clone()
            .or_else(|| self.settings.agents_dir.clone())
            .unwrap_or_else(default_agents_dir)
    }

    /// Build the agent the flags describe.
    pub fn resolve_agent(&self, cli: &Cli) -> Result<Agent, ApiError> {
        if let Some(agent_type) = &cli.agent_type {
            let config = if let Some(inline) = &cli.config {
                AgentConfig::from_json_str(inline)?
            } else if let Some(path) = &cli.config_file {
                read_agent_config(path)?
            } else {
                AgentConfig::new()
            };
            let name = cli.agent_name.as_deref().unwrap_or(INLINE_AGENT_NAME);
            return load_agent(agent_type, name, config, self.log_sink.clone());
        }

        let path = default_agent_path(&self.agents_dir(cli), &cli.default_agent);
        info!(path = %path.display(), "Loading default agent");
        let file = AgentFile::load(&path)?;
        load_agent(&file.agent_type, &file.name, file.config, self.log_sink.clone())
    }

    /// Resolve the agent and answer the message. Returns the stdout payload.
    pub fn execute(&self, cli: &Cli) -> Result<String, ApiError> {
        self.log_sink.in_scope(|| {
            let agent = self.resolve_agent(cli).map_err(|e| {
                error!(error = %e, "Failed to build agent");
                e
            })?;

            let response = panic::catch_unwind(AssertUnwindSafe(|| {
                agent.process_message(&cli.message)
            }))
            .map_err(|payload| {
                let reason = payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unexpected internal error".to_string());
                error!(agent = agent.name(), reason = %reason, "Message processing panicked");
                ApiError::Internal(reason)
            })?;

            Ok(render_response(&response))
        })
    }
}
