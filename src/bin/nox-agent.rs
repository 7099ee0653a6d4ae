//! NOX Agent Binary
//!
//! Answers one message and prints a single JSON object on stdout.

use clap::Parser;
use nox_agents::config::SettingsLoader;
use nox_agents::error::ApiError;
use nox_agents::logging::build_log_sink;
use nox_agents::tooling::cli::{render_error, Cli, CliContext};
use std::process;

fn main() {
    let cli = Cli::parse();

    // Panics are reported through the JSON error payload instead of the default hook.
    std::panic::set_hook(Box::new(|info| {
        tracing::error!(panic = %info, "Panic during dispatch");
    }));

    match run(&cli) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            println!("{}", render_error(&e.to_string()));
            process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<String, ApiError> {
    let settings = SettingsLoader::load()?;
    let log_sink = build_log_sink(Some(&cli.logging_config(&settings.logging)))?;
    let context = CliContext::new(settings, log_sink);
    context.execute(cli)
}
