//! Agent configuration: an ordered JSON object with a few well-known keys.

use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::PathBuf;

/// Passthrough agent configuration.
///
/// Known keys: `type`, `name`, `system_prompt` and `knowledge_files`. Every other key
/// is kept as-is and survives a round trip through [`crate::agent::AgentRecord`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentConfig(Map<String, Value>);

impl AgentConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object. Anything other than an object is rejected.
    pub fn from_json_str(text: &str) -> Result<Self, ApiError> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| ApiError::ConfigParse(e.to_string()))?;
        Self::try_from(value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// `system_prompt`, or "" when absent or not a string.
    pub fn system_prompt(&self) -> &str {
        self.0
            .get("system_prompt")
            .and_then(Value::as_str)
            .unwrap_or("")
    }

    /// `type` field. A present but non-string value is a parse error.
    pub fn agent_type(&self) -> Result<Option<&str>, ApiError> {
        self.string_field("type")
    }

    /// `name` field. A present but non-string value is a parse error.
    pub fn name(&self) -> Result<Option<&str>, ApiError> {
        self.string_field("name")
    }

    /// Extra knowledge store files listed under `knowledge_files`.
    pub fn knowledge_files(&self) -> Result<Vec<PathBuf>, ApiError> {
        let Some(value) = self.0.get("knowledge_files") else {
            return Ok(Vec::new());
        };
        let invalid =
            || ApiError::ConfigParse("knowledge_files must be an array of paths".to_string());
        value
            .as_array()
            .ok_or_else(invalid)?
            .iter()
            .map(|item| item.as_str().map(PathBuf::from).ok_or_else(invalid))
            .collect()
    }

    fn string_field(&self, key: &str) -> Result<Option<&str>, ApiError> {
        match self.0.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(value)) => Ok(Some(value.as_str())),
            Some(_) => Err(ApiError::ConfigParse(format!("'{}' must be a string", key))),
        }
    }
}

impl TryFrom<Value> for AgentConfig {
    type Error = ApiError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(ApiError::ConfigParse(format!(
                "agent configuration must be a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }
}

impl From<Map<String, Value>> for AgentConfig {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn system_prompt_defaults_to_empty() {
        assert_eq!(AgentConfig::new().system_prompt(), "");
        let config = AgentConfig::from_json_str(r#"{"system_prompt": "You are NOX"}"#).unwrap();
        assert_eq!(config.system_prompt(), "You are NOX");
    }

    #[test]
    fn rejects_non_object_json() {
        let err = AgentConfig::from_json_str("[1, 2]").unwrap_err();
        assert!(matches!(err, ApiError::ConfigParse(_)));
        assert!(AgentConfig::from_json_str("{not json").is_err());
    }

    #[test]
    fn passthrough_fields_keep_their_order() {
        let config = AgentConfig::from_json_str(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#).unwrap();
        let keys: Vec<&str> = config.as_map().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn typed_fields_validate_their_shape() {
        let config = AgentConfig::try_from(json!({"type": 3, "name": "NOX"})).unwrap();
        assert!(config.agent_type().is_err());
        assert_eq!(config.name().unwrap(), Some("NOX"));

        let config = AgentConfig::try_from(json!({"knowledge_files": ["a.json", "b.json"]})).unwrap();
        assert_eq!(
            config.knowledge_files().unwrap(),
            vec![PathBuf::from("a.json"), PathBuf::from("b.json")]
        );
        let config = AgentConfig::try_from(json!({"knowledge_files": "a.json"})).unwrap();
        assert!(config.knowledge_files().is_err());
    }
}
