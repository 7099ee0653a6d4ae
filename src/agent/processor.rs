//! Message processing pipeline: keyword extraction, knowledge gathering and
//! response assembly. Every step is a pure function of its inputs.

use super::kind::VariantProfile;
use crate::knowledge::{SearchResults, TopicMatch};

/// Vocabulary terms found in the message, in vocabulary order.
///
/// Falls back to the troubleshooting keyword when the message contains the
/// troubleshooting marker, then to the general keyword.
pub fn extract_keywords(profile: &VariantProfile, message: &str) -> Vec<&'static str> {
    let message = message.to_lowercase();
    let found: Vec<&'static str> = profile
        .vocabulary
        .iter()
        .copied()
        .filter(|term| message.contains(term))
        .collect();

    if !found.is_empty() {
        return found;
    }
    if message.contains(profile.troubleshooting_marker) {
        return vec![profile.troubleshooting_keyword];
    }
    vec![profile.general_keyword]
}

/// Search results accumulated per keyword, in keyword order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KnowledgeDigest<'a> {
    entries: Vec<(&'static str, SearchResults<'a>)>,
}

impl<'a> KnowledgeDigest<'a> {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn keywords(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(keyword, _)| *keyword).collect()
    }

    pub fn get(&self, keyword: &str) -> Option<&SearchResults<'a>> {
        self.entries
            .iter()
            .find(|(k, _)| *k == keyword)
            .map(|(_, results)| results)
    }

    /// First topic match of the first keyword that produced results.
    pub fn first_hit(&self) -> Option<&TopicMatch<'a>> {
        self.entries
            .first()
            .and_then(|(_, results)| results.first())
            .map(|(_, hit)| hit)
    }
}

/// Run `search` for every keyword and keep the non-empty results.
pub fn gather_knowledge<'a, F>(keywords: &[&'static str], mut search: F) -> KnowledgeDigest<'a>
where
    F: FnMut(&str) -> SearchResults<'a>,
{
    let entries = keywords
        .iter()
        .filter_map(|keyword| {
            let results = search(*keyword);
            (!results.is_empty()).then_some((*keyword, results))
        })
        .collect();
    KnowledgeDigest { entries }
}

/// Template the first hit's definition, or fall back to the variant's default text.
pub fn compose_response(profile: &VariantProfile, digest: &KnowledgeDigest<'_>) -> String {
    match digest.first_hit().and_then(TopicMatch::definition) {
        Some(definition) => profile.render_definition(definition),
        None => profile.default_response.to_string(),
    }
}
