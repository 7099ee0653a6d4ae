//! Contract tests for the nox-agent command surface.

mod output_contracts;
mod parse_parity;
mod support;
