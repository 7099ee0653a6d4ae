//! NOX: Keyword-Driven Agent Dispatcher
//!
//! Loads a named agent, extracts keywords from a free-text message, looks them up in
//! static knowledge stores and answers with a templated definition or a default text.

pub mod agent;
pub mod config;
pub mod error;
pub mod knowledge;
pub mod logging;
pub mod tooling;
