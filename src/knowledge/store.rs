//! Immutable topic dictionary with point lookup and substring search.

use super::record::{Section, TopicRecord};
use super::search::{match_topic, SearchResults};
use crate::error::{ApiError, KnowledgeError};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

const DEVOPS_KNOWLEDGE: &str = include_str!("devops.json");

/// Result of [`KnowledgeStore::lookup`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KnowledgeValue<'a> {
    Topic(&'a TopicRecord),
    Definition(&'a str),
    Section(&'a Section),
}

/// Read-only knowledge base. Topics keep their declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct KnowledgeStore {
    name: String,
    topics: Vec<(String, TopicRecord)>,
}

impl KnowledgeStore {
    pub fn new(name: impl Into<String>, topics: Vec<(String, TopicRecord)>) -> Self {
        Self {
            name: name.into(),
            topics,
        }
    }

    /// Built-in DevOps knowledge base.
    pub fn devops() -> Result<Self, KnowledgeError> {
        Self::from_json_str("devops", DEVOPS_KNOWLEDGE)
    }

    /// Parse a JSON object of topics.
    pub fn from_json_str(name: &str, text: &str) -> Result<Self, KnowledgeError> {
        let value: Value = serde_json::from_str(text).map_err(|e| KnowledgeError::InvalidShape {
            store: name.to_string(),
            reason: e.to_string(),
        })?;
        let Value::Object(entries) = value else {
            return Err(KnowledgeError::InvalidShape {
                store: name.to_string(),
                reason: "top level must be an object of topics".to_string(),
            });
        };

        let topics = entries
            .into_iter()
            .map(|(topic, record)| {
                let record = TopicRecord::from_value(name, &topic, record)?;
                Ok((topic, record))
            })
            .collect::<Result<Vec<_>, KnowledgeError>>()?;

        debug!(store = name, topics = topics.len(), "Knowledge store loaded");
        Ok(Self::new(name, topics))
    }

    /// Load a store from a JSON file; the file stem names the store.
    pub fn from_file(path: &Path) -> Result<Self, ApiError> {
        let text = std::fs::read_to_string(path).map_err(|source| ApiError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::from_json_str(&name, &text)?)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    pub fn topic(&self, key: &str) -> Option<&TopicRecord> {
        self.topics
            .iter()
            .find(|(topic, _)| topic == key)
            .map(|(_, record)| record)
    }

    /// Topic keys in declaration order.
    pub fn list_topics(&self) -> Vec<&str> {
        self.topics.iter().map(|(topic, _)| topic.as_str()).collect()
    }

    /// Point lookup of a topic, or of one of its subtopics when given.
    pub fn lookup(
        &self,
        topic: &str,
        subtopic: Option<&str>,
    ) -> Result<KnowledgeValue<'_>, KnowledgeError> {
        let record = self
            .topic(topic)
            .ok_or_else(|| KnowledgeError::TopicNotFound(topic.to_string()))?;

        let Some(subtopic) = subtopic else {
            return Ok(KnowledgeValue::Topic(record));
        };

        let not_found = || KnowledgeError::SubtopicNotFound {
            topic: topic.to_string(),
            subtopic: subtopic.to_string(),
        };
        if subtopic == "definition" {
            return record
                .definition()
                .map(KnowledgeValue::Definition)
                .ok_or_else(not_found);
        }
        record
            .section(subtopic)
            .map(KnowledgeValue::Section)
            .ok_or_else(not_found)
    }

    /// Case-insensitive substring search. Never fails; an empty result means no match.
    pub fn search(&self, query: &str) -> SearchResults<'_> {
        let query = query.to_lowercase();
        let mut results = SearchResults::default();
        for (topic, record) in &self.topics {
            if let Some(hit) = match_topic(topic, record, &query) {
                results.push(topic, hit);
            }
        }
        results
    }
}
