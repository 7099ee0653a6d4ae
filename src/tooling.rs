//! Tooling & Integration Layer
//!
//! Command-line entry points around the agent core.

pub mod cli;

pub use cli::{render_error, render_response, Cli, CliContext};
