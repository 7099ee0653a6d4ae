//! Logging System
//!
//! Structured logging built on `tracing`. The configured subscriber is not installed
//! globally; it is wrapped in a [`LogSink`] that callers hand to the agent and scope
//! around the work they do.

use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Dispatch;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Layer, Registry};

/// Resolve the log file path with precedence: CLI, NOX_LOG_FILE env, config file, default.
pub fn resolve_log_file_path(
    cli_file: Option<PathBuf>,
    config_file: Option<PathBuf>,
) -> Result<PathBuf, ApiError> {
    pick_log_file_path(cli_file, EnvOverrides::from_env().file, config_file)
}

fn pick_log_file_path(
    cli_file: Option<PathBuf>,
    env_file: Option<PathBuf>,
    config_file: Option<PathBuf>,
) -> Result<PathBuf, ApiError> {
    [cli_file, env_file, config_file]
        .into_iter()
        .flatten()
        .find(|p| !p.as_os_str().is_empty())
        .map(Ok)
        .unwrap_or_else(default_log_file_path)
}

fn default_log_file_path() -> Result<PathBuf, ApiError> {
    let project_dirs = directories::ProjectDirs::from("", "nox", "nox").ok_or_else(|| {
        ApiError::Logging("Could not determine platform state directory for log file".to_string())
    })?;
    let dir = project_dirs
        .state_dir()
        .unwrap_or_else(|| project_dirs.data_local_dir());
    Ok(dir.join("nox.log"))
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Whether logging is enabled (default: true)
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stdout, stderr, file, file+stderr, both.
    /// Anything on stdout is interleaved with the JSON response.
    #[serde(default = "default_output")]
    pub output: String,

    /// Log file path when output includes file; None means use runtime default
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Enable colored output (text format only, stdout/stderr only)
    #[serde(default = "default_true")]
    pub color: bool,

    /// Module-specific log levels
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "stderr".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            file: None,
            color: default_true(),
            modules: HashMap::new(),
        }
    }
}

/// Injected logging sink.
///
/// Events emitted inside [`LogSink::in_scope`] go to this sink's subscriber only.
#[derive(Debug, Clone)]
pub struct LogSink {
    dispatch: Dispatch,
}

impl LogSink {
    pub fn new(dispatch: Dispatch) -> Self {
        Self { dispatch }
    }

    /// Sink that drops every event.
    pub fn discard() -> Self {
        Self {
            dispatch: Dispatch::none(),
        }
    }

    /// Run `f` with this sink as the default subscriber for the current thread.
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::discard()
    }
}

/// `NOX_LOG*` overrides, read once per sink.
#[derive(Debug, Clone, Default)]
struct EnvOverrides {
    filter: Option<String>,
    format: Option<String>,
    output: Option<String>,
    file: Option<PathBuf>,
    modules: Option<String>,
}

impl EnvOverrides {
    fn from_env() -> Self {
        Self {
            filter: std::env::var("NOX_LOG").ok(),
            format: std::env::var("NOX_LOG_FORMAT").ok(),
            output: std::env::var("NOX_LOG_OUTPUT").ok(),
            file: std::env::var_os("NOX_LOG_FILE").map(PathBuf::from),
            modules: std::env::var("NOX_LOG_MODULES").ok(),
        }
    }
}

/// Build the logging sink.
///
/// Priority order (highest to lowest):
/// 1. Environment variables (NOX_LOG, NOX_LOG_FORMAT, NOX_LOG_OUTPUT, NOX_LOG_FILE)
/// 2. The given configuration (CLI flags are already folded into it)
/// 3. Defaults
pub fn build_log_sink(config: Option<&LoggingConfig>) -> Result<LogSink, ApiError> {
    build_sink_with(config, &EnvOverrides::from_env())
}

fn build_sink_with(
    config: Option<&LoggingConfig>,
    env: &EnvOverrides,
) -> Result<LogSink, ApiError> {
    let disabled = config.map(|c| !c.enabled).unwrap_or(false);
    if disabled {
        return Ok(LogSink::discard());
    }

    let filter = build_env_filter(config, env)?;
    let format = determine_format(config, env)?;
    let output = determine_output(config, env)?;
    let use_color = config.map(|c| c.color).unwrap_or(true) && !output.file;

    let writer = if output.file {
        let log_file =
            pick_log_file_path(None, env.file.clone(), config.and_then(|c| c.file.clone()))?;
        if let Some(parent) = log_file.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ApiError::Logging(format!("Failed to create log directory: {}", e))
            })?;
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .map_err(|e| {
                ApiError::Logging(format!("Failed to open log file {:?}: {}", log_file, e))
            })?;
        if output.stderr {
            BoxMakeWriter::new(Mutex::new(file).and(std::io::stderr))
        } else {
            BoxMakeWriter::new(Mutex::new(file))
        }
    } else if output.stdout && output.stderr {
        BoxMakeWriter::new(std::io::stdout.and(std::io::stderr))
    } else if output.stdout {
        BoxMakeWriter::new(std::io::stdout)
    } else {
        BoxMakeWriter::new(std::io::stderr)
    };

    let layer: Box<dyn Layer<Registry> + Send + Sync> = if format == "json" {
        fmt::layer()
            .json()
            .with_target(true)
            .with_timer(ChronoUtc::rfc_3339())
            .with_writer(writer)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_timer(ChronoUtc::rfc_3339())
            .with_ansi(use_color)
            .with_writer(writer)
            .boxed()
    };

    let subscriber = Registry::default().with(layer).with(filter);
    Ok(LogSink::new(Dispatch::new(subscriber)))
}

/// Build environment filter from config or environment variables
fn build_env_filter(
    config: Option<&LoggingConfig>,
    env: &EnvOverrides,
) -> Result<EnvFilter, ApiError> {
    if let Some(filter) = env.filter.as_deref().and_then(|f| EnvFilter::try_new(f).ok()) {
        return Ok(filter);
    }

    let level = config.map(|c| c.level.as_str()).unwrap_or("info");

    if level == "off" {
        return Ok(EnvFilter::new("off"));
    }

    let mut filter = EnvFilter::new(level);

    if let Some(config) = config {
        for (module, module_level) in &config.modules {
            let directive = format!("{}={}", module, module_level);
            filter = filter.add_directive(
                directive
                    .parse()
                    .map_err(|e| ApiError::Logging(format!("Invalid log directive: {}", e)))?,
            );
        }
    }

    if let Some(modules_str) = &env.modules {
        for module_spec in modules_str.split(',') {
            let parts: Vec<&str> = module_spec.split('=').collect();
            if parts.len() == 2 {
                let directive = format!("{}={}", parts[0].trim(), parts[1].trim());
                filter = filter.add_directive(directive.parse().map_err(|e| {
                    ApiError::Logging(format!("Invalid log directive from env: {}", e))
                })?);
            }
        }
    }

    Ok(filter)
}

/// Determine output format from config or environment
fn determine_format(
    config: Option<&LoggingConfig>,
    env: &EnvOverrides,
) -> Result<String, ApiError> {
    if let Some(format) = &env.format {
        if format == "json" || format == "text" {
            return Ok(format.clone());
        }
    }

    let format = config.map(|c| c.format.as_str()).unwrap_or("text");

    if format != "json" && format != "text" {
        return Err(ApiError::Logging(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            format
        )));
    }

    Ok(format.to_string())
}

/// Output destinations
struct OutputDestinations {
    stdout: bool,
    stderr: bool,
    file: bool,
}

fn determine_output(
    config: Option<&LoggingConfig>,
    env: &EnvOverrides,
) -> Result<OutputDestinations, ApiError> {
    if let Some(output) = &env.output {
        return parse_output_destinations(output);
    }
    let output = config.map(|c| c.output.as_str()).unwrap_or("stderr");
    parse_output_destinations(output)
}

fn parse_output_destinations(output: &str) -> Result<OutputDestinations, ApiError> {
    match output {
        "stdout" => Ok(OutputDestinations {
            stdout: true,
            stderr: false,
            file: false,
        }),
        "stderr" => Ok(OutputDestinations {
            stdout: false,
            stderr: true,
            file: false,
        }),
        "file" => Ok(OutputDestinations {
            stdout: false,
            stderr: false,
            file: true,
        }),
        "file+stderr" => Ok(OutputDestinations {
            stdout: false,
            stderr: true,
            file: true,
        }),
        "both" => Ok(OutputDestinations {
            stdout: true,
            stderr: true,
            file: false,
        }),
        _ => Err(ApiError::Logging(format!(
            "Invalid log output: {} (must be 'stdout', 'stderr', 'file', 'file+stderr', or 'both')",
            output
        ))),
    }
}
