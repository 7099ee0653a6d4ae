use std::process::Command;

use nox_agents::error::ApiError;
use tempfile::TempDir;

use crate::support::{parse, payload, quiet_context, write_agent_file};

const DEFINITION_PREFIX: &str = "Based on my knowledge base, I can tell you that ";

fn nox_agent(temp_dir: &TempDir) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_nox-agent"));
    command
        .env("HOME", temp_dir.path())
        .env("XDG_CONFIG_HOME", temp_dir.path().join("config"))
        .env("XDG_STATE_HOME", temp_dir.path().join("state"))
        .env("NOX_LOG_OUTPUT", "stderr")
        .env_remove("NOX__AGENTS_DIR");
    command
}

#[test]
fn default_agent_file_drives_the_response() {
    let temp_dir = TempDir::new().unwrap();
    write_agent_file(
        temp_dir.path(),
        "nox",
        r#"{"type": "devops", "name": "NOX", "system_prompt": "You are NOX"}"#,
    );

    let agents_dir = temp_dir.path().to_str().unwrap();
    let cli = parse(&[
        "--agents-dir",
        agents_dir,
        "--message",
        "I have an issue with my kubernetes pods crashing",
    ]);
    let output = quiet_context().execute(&cli).unwrap();

    let parsed = payload(&output);
    let response = parsed.get("response").and_then(|v| v.as_str()).unwrap();
    assert!(response.starts_with(DEFINITION_PREFIX));
    assert!(parsed.get("error").is_none());
}

#[test]
fn default_agent_name_is_lowercased_for_lookup() {
    let temp_dir = TempDir::new().unwrap();
    write_agent_file(temp_dir.path(), "ops", r#"{"name": "Ops"}"#);

    let agents_dir = temp_dir.path().to_str().unwrap();
    let cli = parse(&["--agents-dir", agents_dir, "--default-agent", "OPS", "--message", "hello"]);
    let output = quiet_context().execute(&cli).unwrap();

    let response = payload(&output)["response"].as_str().unwrap().to_string();
    assert!(response.starts_with("I'm NOX, your DevOps specialist."));
}

#[test]
fn missing_default_agent_file_is_read_error() {
    let temp_dir = TempDir::new().unwrap();
    let agents_dir = temp_dir.path().to_str().unwrap();
    let cli = parse(&["--agents-dir", agents_dir, "--message", "hello"]);

    let err = quiet_context().execute(&cli).unwrap_err();
    assert!(matches!(err, ApiError::ConfigRead { .. }));
}

#[test]
fn unknown_agent_type_in_file_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    write_agent_file(temp_dir.path(), "nox", r#"{"type": "marketing"}"#);
    let agents_dir = temp_dir.path().to_str().unwrap();
    let cli = parse(&["--agents-dir", agents_dir, "--message", "hello"]);

    let err = quiet_context().execute(&cli).unwrap_err();
    assert!(matches!(err, ApiError::UnknownAgentType(ref t) if t == "marketing"));
}

#[test]
fn inline_agent_with_invalid_json_is_parse_error() {
    let cli = parse(&["--agent-type", "devops", "--config", "{oops", "--message", "hello"]);
    let err = quiet_context().execute(&cli).unwrap_err();
    assert!(matches!(err, ApiError::ConfigParse(_)));
}

#[test]
fn inline_agent_reads_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_agent_file(
        temp_dir.path(),
        "custom",
        r#"{"system_prompt": "custom prompt"}"#,
    );
    let cli = parse(&[
        "--agent-type",
        "DevOps",
        "--agent-name",
        "Custom",
        "--config-file",
        path.to_str().unwrap(),
        "--message",
        "How should I set up monitoring?",
    ]);
    let context = quiet_context();
    let agent = context.resolve_agent(&cli).unwrap();
    assert_eq!(agent.name(), "Custom");
    assert_eq!(agent.system_prompt(), "custom prompt");

    let output = context.execute(&cli).unwrap();
    let response = payload(&output)["response"].as_str().unwrap().to_string();
    assert!(response.contains("Monitoring and observability"));
}

#[test]
fn binary_prints_response_payload_and_exits_zero() {
    let temp_dir = TempDir::new().unwrap();
    let output = nox_agent(&temp_dir)
        .args(["--agent-type", "devops", "--message", "hello"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let parsed = payload(&stdout);
    assert!(parsed["response"].as_str().unwrap().contains("CI/CD"));
}

#[test]
fn binary_prints_error_payload_and_exits_non_zero() {
    let temp_dir = TempDir::new().unwrap();
    let output = nox_agent(&temp_dir)
        .args(["--agent-type", "quantum", "--message", "hello"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    let parsed = payload(&stdout);
    assert_eq!(parsed["error"].as_str(), Some("Unknown agent type: quantum"));
    assert!(parsed.get("response").is_none());
}

#[test]
fn binary_finds_shipped_agent_from_repository_root() {
    let temp_dir = TempDir::new().unwrap();
    let output = nox_agent(&temp_dir)
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .args(["--message", "hello", "--log-level", "off"])
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(output.status.success(), "unexpected failure: {stdout}");
    let parsed = payload(&stdout);
    assert!(parsed["response"]
        .as_str()
        .unwrap()
        .starts_with("I'm NOX, your DevOps specialist."));
}
