use std::fs;
use std::path::{Path, PathBuf};

use nox_agents::config::DispatcherSettings;
use nox_agents::logging::LogSink;
use nox_agents::tooling::cli::{Cli, CliContext};

/// Write `<name>_config.json` into `dir`.
pub fn write_agent_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(format!("{}_config.json", name));
    fs::write(&path, contents).unwrap();
    path
}

/// Context with default settings and a discarding log sink.
pub fn quiet_context() -> CliContext {
    CliContext::new(DispatcherSettings::default(), LogSink::discard())
}

pub fn parse(args: &[&str]) -> Cli {
    let mut full = vec!["nox-agent"];
    full.extend_from_slice(args);
    <Cli as clap::Parser>::try_parse_from(full).unwrap()
}

/// Parse a stdout payload as a JSON object.
pub fn payload(output: &str) -> serde_json::Value {
    let parsed: serde_json::Value = serde_json::from_str(output.trim()).unwrap();
    assert!(parsed.is_object(), "payload must be a JSON object: {output}");
    parsed
}
