//! Agents
//!
//! An agent is a named configuration plus an ordered list of knowledge stores. It turns
//! a free-text message into a response by matching a fixed keyword vocabulary, looking
//! the keywords up in its stores and templating the first definition it finds.

mod config;
mod factory;
mod kind;
mod model;
pub mod processor;

pub use config::AgentConfig;
pub use factory::{create_agent, load_agent};
pub use kind::{AgentKind, VariantProfile};
pub use model::{Agent, AgentRecord, MessageContext};
pub use processor::KnowledgeDigest;
