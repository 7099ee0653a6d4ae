//! Agent variants.
//!
//! Every variant shares the same processing pipeline and differs only in its keyword
//! vocabulary and response templates, both carried by a [`VariantProfile`].

use crate::error::{ApiError, KnowledgeError};
use crate::knowledge::KnowledgeStore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Keyword vocabulary and templates for one agent variant.
#[derive(Debug)]
pub struct VariantProfile {
    /// Terms searched for in the lowercased message, in priority order.
    pub vocabulary: &'static [&'static str],
    /// Substring that marks a message as a problem report when no term matched.
    pub troubleshooting_marker: &'static str,
    pub troubleshooting_keyword: &'static str,
    /// Keyword used when nothing else matched.
    pub general_keyword: &'static str,
    pub definition_prefix: &'static str,
    pub definition_suffix: &'static str,
    pub default_response: &'static str,
}

impl VariantProfile {
    /// Render the definition template. The definition is trimmed first.
    pub fn render_definition(&self, definition: &str) -> String {
        format!(
            "{}{}{}",
            self.definition_prefix,
            definition.trim(),
            self.definition_suffix
        )
    }
}

static DEVOPS_PROFILE: VariantProfile = VariantProfile {
    vocabulary: &[
        "ci/cd",
        "cicd",
        "ci-cd",
        "pipeline",
        "jenkins",
        "github actions",
        "docker",
        "container",
        "kubernetes",
        "k8s",
        "terraform",
        "ansible",
        "monitoring",
        "prometheus",
        "grafana",
        "elk",
        "cloud",
        "aws",
        "azure",
        "gcp",
        "infrastructure",
        "deployment",
    ],
    troubleshooting_marker: "problème",
    troubleshooting_keyword: "troubleshooting",
    general_keyword: "general",
    definition_prefix: "Based on my knowledge base, I can tell you that ",
    definition_suffix: "\n\nIs there anything specific about this topic you'd like to know?",
    default_response: "I'm NOX, your DevOps specialist. I don't have specific information \
about your request in my current knowledge base, but I can help with a range of DevOps \
topics such as CI/CD, containerization, monitoring, and infrastructure as code. \
Feel free to clarify your question.",
};

/// Closed set of agent variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentKind {
    #[serde(rename = "devops")]
    DevOps,
}

impl AgentKind {
    pub fn all() -> [Self; 1] {
        [AgentKind::DevOps]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AgentKind::DevOps => "devops",
        }
    }

    pub fn profile(&self) -> &'static VariantProfile {
        match self {
            AgentKind::DevOps => &DEVOPS_PROFILE,
        }
    }

    /// Knowledge store every agent of this kind starts with.
    pub fn builtin_knowledge(&self) -> Result<KnowledgeStore, KnowledgeError> {
        match self {
            AgentKind::DevOps => KnowledgeStore::devops(),
        }
    }
}

impl FromStr for AgentKind {
    type Err = ApiError;

    /// Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AgentKind::all()
            .into_iter()
            .find(|kind| kind.as_str() == s.to_lowercase())
            .ok_or_else(|| ApiError::UnknownAgentType(s.to_string()))
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
