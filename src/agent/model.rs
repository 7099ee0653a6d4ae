//! Agent aggregate: identity, configuration and attached knowledge stores.

use super::config::AgentConfig;
use super::kind::AgentKind;
use super::processor::{compose_response, extract_keywords, gather_knowledge, KnowledgeDigest};
use crate::knowledge::{KnowledgeStore, SearchResults};
use crate::logging::LogSink;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Characters of the incoming message echoed into logs.
const MESSAGE_PREVIEW_CHARS: usize = 50;

/// Serializable snapshot of an agent: name and configuration only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentRecord {
    pub name: String,
    pub config: AgentConfig,
}

/// Everything the response step sees for one message.
#[derive(Debug, Clone)]
pub struct MessageContext<'a> {
    pub message: &'a str,
    pub system_prompt: &'a str,
    pub keywords: Vec<&'static str>,
    pub knowledge: KnowledgeDigest<'a>,
}

#[derive(Debug)]
pub struct Agent {
    kind: AgentKind,
    name: String,
    config: AgentConfig,
    knowledge_bases: Vec<Arc<KnowledgeStore>>,
    log_sink: LogSink,
}

impl Agent {
    pub fn new(kind: AgentKind, name: impl Into<String>, config: AgentConfig, log_sink: LogSink) -> Self {
        let agent = Self {
            kind,
            name: name.into(),
            config,
            knowledge_bases: Vec::new(),
            log_sink,
        };
        agent.log_sink.in_scope(|| {
            info!(agent = %agent.name, kind = %agent.kind, "Agent initialized");
            debug!(agent = %agent.name, config = ?agent.config, "Agent configuration");
        });
        agent
    }

    /// Rebuild an agent from [`Agent::to_record`]. Knowledge stores are not part of
    /// the record and must be attached again.
    pub fn from_record(kind: AgentKind, record: AgentRecord, log_sink: LogSink) -> Self {
        Self::new(kind, record.name, record.config, log_sink)
    }

    pub fn to_record(&self) -> AgentRecord {
        AgentRecord {
            name: self.name.clone(),
            config: self.config.clone(),
        }
    }

    pub fn kind(&self) -> AgentKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn system_prompt(&self) -> &str {
        self.config.system_prompt()
    }

    pub fn knowledge_bases(&self) -> &[Arc<KnowledgeStore>] {
        &self.knowledge_bases
    }

    /// Attach a store after the ones already attached.
    pub fn add_knowledge_base(&mut self, store: impl Into<Arc<KnowledgeStore>>) {
        let store = store.into();
        self.log_sink.in_scope(|| {
            info!(
                agent = %self.name,
                store = store.name(),
                topics = store.len(),
                "Knowledge base attached"
            );
        });
        self.knowledge_bases.push(store);
    }

    /// Search every attached store and merge the results into one mapping.
    ///
    /// When two stores share a topic, the later store's match replaces the earlier one
    /// at the earlier one's position.
    pub fn search_knowledge(&self, query: &str) -> SearchResults<'_> {
        self.log_sink.in_scope(|| {
            let mut merged = SearchResults::default();
            for store in &self.knowledge_bases {
                for topic in merged.merge(store.search(query)) {
                    warn!(
                        agent = %self.name,
                        store = store.name(),
                        topic,
                        query,
                        "Topic matched in several knowledge bases; keeping the later one"
                    );
                }
            }
            merged
        })
    }

    /// Extract keywords and gather knowledge for one message.
    pub fn prepare_context<'a>(&'a self, message: &'a str) -> MessageContext<'a> {
        let keywords = extract_keywords(self.kind.profile(), message);
        let knowledge = gather_knowledge(&keywords, |keyword| self.search_knowledge(keyword));
        MessageContext {
            message,
            system_prompt: self.system_prompt(),
            keywords,
            knowledge,
        }
    }

    /// Answer one message. Never fails: unknown input gets the default response.
    pub fn process_message(&self, message: &str) -> String {
        self.log_sink.in_scope(|| {
            let context = self.prepare_context(message);
            let response = compose_response(self.kind.profile(), &context.knowledge);

            let preview: String = message.chars().take(MESSAGE_PREVIEW_CHARS).collect();
            info!(
                agent = %self.name,
                message = %preview,
                keywords = ?context.keywords,
                matched = ?context.knowledge.keywords(),
                "Message processed"
            );
            response
        })
    }
}
