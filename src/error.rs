//! Error types for the dispatcher and the knowledge stores.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving configuration and building an agent.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid agent configuration JSON: {0}")]
    ConfigParse(String),

    #[error("Failed to read configuration file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown agent type: {0}")]
    UnknownAgentType(String),

    #[error(transparent)]
    Knowledge(#[from] KnowledgeError),

    #[error("Settings error: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("Message processing failed: {0}")]
    Internal(String),
}

/// Errors raised by [`crate::knowledge::KnowledgeStore`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KnowledgeError {
    #[error("Topic '{0}' does not exist in the knowledge base")]
    TopicNotFound(String),

    #[error("Subtopic '{subtopic}' does not exist under topic '{topic}'")]
    SubtopicNotFound { topic: String, subtopic: String },

    #[error("Invalid knowledge data in '{store}': {reason}")]
    InvalidShape { store: String, reason: String },
}

impl KnowledgeError {
    /// True for lookup misses, as opposed to malformed data.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            KnowledgeError::TopicNotFound(_) | KnowledgeError::SubtopicNotFound { .. }
        )
    }
}
