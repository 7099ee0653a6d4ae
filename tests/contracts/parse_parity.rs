use clap::{CommandFactory, Parser};
use nox_agents::tooling::cli::Cli;

#[test]
fn parse_valid_flag_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["nox-agent", "--message", "hi"],
        vec!["nox-agent", "--message", "hi", "--default-agent", "nox"],
        vec!["nox-agent", "--agent-type", "devops", "--message", "hi"],
        vec![
            "nox-agent",
            "--agent-type",
            "devops",
            "--agent-name",
            "NOX",
            "--config",
            "{}",
            "--message",
            "hi",
        ],
        vec![
            "nox-agent",
            "--agent-type",
            "devops",
            "--config-file",
            "./agent.json",
            "--message",
            "hi",
        ],
        vec![
            "nox-agent",
            "--message",
            "hi",
            "--log-level",
            "debug",
            "--log-format",
            "json",
            "--log-output",
            "file",
            "--log-file",
            "/tmp/nox.log",
        ],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn parse_rejects_missing_message() {
    assert!(Cli::try_parse_from(["nox-agent", "--agent-type", "devops"]).is_err());
}

#[test]
fn parse_rejects_unknown_flag() {
    assert!(Cli::try_parse_from(["nox-agent", "--message", "hi", "--verbose"]).is_err());
}

#[test]
fn help_lists_every_flag() {
    let mut command = Cli::command();
    let mut output = Vec::new();
    command.write_long_help(&mut output).unwrap();
    let output = String::from_utf8(output).unwrap();

    for flag in [
        "--agent-type",
        "--agent-name",
        "--config",
        "--config-file",
        "--message",
        "--default-agent",
        "--agents-dir",
        "--log-level",
    ] {
        assert!(output.contains(flag), "help should mention {flag}");
    }
}
