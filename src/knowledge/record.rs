//! Closed record shapes for knowledge topics.
//!
//! A topic carries an optional definition and an ordered list of named sections.
//! A section is free text, a list of strings, or a one-level table whose leaves are
//! themselves text or lists. Nothing nests deeper than that.

use crate::error::KnowledgeError;
use serde_json::{Map, Value};

/// Leaf value inside a table section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Leaf {
    Text(String),
    List(Vec<String>),
}

impl Leaf {
    /// Case-insensitive containment; `query` must already be lowercase.
    pub(crate) fn contains(&self, query: &str) -> bool {
        match self {
            Leaf::Text(text) => text.to_lowercase().contains(query),
            Leaf::List(items) => items.iter().any(|item| item.to_lowercase().contains(query)),
        }
    }
}

/// Named section under a topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    Text(String),
    List(Vec<String>),
    Table(Vec<(String, Leaf)>),
}

impl Section {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Section::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Section::List(items) => Some(items),
            _ => None,
        }
    }

    /// Look up one entry of a table section.
    pub fn entry(&self, key: &str) -> Option<&Leaf> {
        match self {
            Section::Table(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }
}

/// One topic of a knowledge store.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TopicRecord {
    definition: Option<String>,
    sections: Vec<(String, Section)>,
}

impl TopicRecord {
    pub fn new(definition: Option<String>) -> Self {
        Self {
            definition,
            sections: Vec::new(),
        }
    }

    /// Builder-style section append, mostly for tests and programmatic stores.
    pub fn with_section(mut self, name: impl Into<String>, section: Section) -> Self {
        self.sections.push((name.into(), section));
        self
    }

    pub fn definition(&self) -> Option<&str> {
        self.definition.as_deref()
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, section)| section)
    }

    /// Sections in declaration order.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(name, section)| (name.as_str(), section))
    }

    /// Parse one topic object. `definition` must be a string when present.
    pub(crate) fn from_value(store: &str, topic: &str, value: Value) -> Result<Self, KnowledgeError> {
        let Value::Object(fields) = value else {
            return Err(shape_error(store, format!("topic '{}' must be an object", topic)));
        };

        let mut record = TopicRecord::default();
        for (name, field) in fields {
            if name == "definition" {
                match field {
                    Value::String(text) => record.definition = Some(text),
                    _ => {
                        return Err(shape_error(
                            store,
                            format!("definition of '{}' must be a string", topic),
                        ))
                    }
                }
                continue;
            }
            let path = format!("{}.{}", topic, name);
            let section = match field {
                Value::String(text) => Section::Text(text),
                Value::Array(items) => Section::List(string_list(store, &path, items)?),
                Value::Object(entries) => Section::Table(table_entries(store, &path, entries)?),
                _ => {
                    return Err(shape_error(
                        store,
                        format!("section '{}' must be a string, list or table", path),
                    ))
                }
            };
            record.sections.push((name, section));
        }
        Ok(record)
    }
}

fn table_entries(
    store: &str,
    path: &str,
    entries: Map<String, Value>,
) -> Result<Vec<(String, Leaf)>, KnowledgeError> {
    entries
        .into_iter()
        .map(|(key, value)| {
            let leaf = match value {
                Value::String(text) => Leaf::Text(text),
                Value::Array(items) => {
                    Leaf::List(string_list(store, &format!("{}.{}", path, key), items)?)
                }
                _ => {
                    return Err(shape_error(
                        store,
                        format!("entry '{}.{}' must be a string or a list of strings", path, key),
                    ))
                }
            };
            Ok((key, leaf))
        })
        .collect()
}

fn string_list(store: &str, path: &str, items: Vec<Value>) -> Result<Vec<String>, KnowledgeError> {
    items
        .into_iter()
        .map(|item| match item {
            Value::String(text) => Ok(text),
            _ => Err(shape_error(
                store,
                format!("list '{}' may only contain strings", path),
            )),
        })
        .collect()
}

fn shape_error(store: &str, reason: String) -> KnowledgeError {
    KnowledgeError::InvalidShape {
        store: store.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_all_section_shapes_in_order() {
        let value = json!({
            "definition": "Something",
            "tools": ["a", "b"],
            "notes": "free text",
            "code_examples": {"one": "x", "two": ["y", "z"]}
        });
        let record = TopicRecord::from_value("test", "topic", value).unwrap();
        assert_eq!(record.definition(), Some("Something"));
        let names: Vec<&str> = record.sections().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["tools", "notes", "code_examples"]);
        assert_eq!(
            record.section("code_examples").and_then(|s| s.entry("two")),
            Some(&Leaf::List(vec!["y".to_string(), "z".to_string()]))
        );
    }

    #[test]
    fn rejects_nested_tables() {
        let value = json!({"tools": {"inner": {"too": "deep"}}});
        let err = TopicRecord::from_value("test", "topic", value).unwrap_err();
        assert!(matches!(err, KnowledgeError::InvalidShape { .. }));
    }

    #[test]
    fn rejects_non_string_definition() {
        let err = TopicRecord::from_value("test", "topic", json!({"definition": 3})).unwrap_err();
        assert!(err.to_string().contains("definition"));
    }
}
