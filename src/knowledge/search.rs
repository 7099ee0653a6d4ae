//! Substring search over topic records.

use super::record::{Leaf, Section, TopicRecord};

/// What a search matched inside one topic.
#[derive(Debug, Clone, PartialEq)]
pub enum TopicMatch<'a> {
    /// Topic key or definition matched: the whole record.
    Full(&'a TopicRecord),
    /// Only some sections matched.
    Partial(Vec<SectionMatch<'a>>),
}

impl<'a> TopicMatch<'a> {
    /// Definition of a full match. Partial matches never carry one.
    pub fn definition(&self) -> Option<&'a str> {
        match self {
            TopicMatch::Full(record) => record.definition(),
            TopicMatch::Partial(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionMatch<'a> {
    pub name: &'a str,
    pub hit: SectionHit<'a>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SectionHit<'a> {
    /// Text or list section that matched as a whole.
    Whole(&'a Section),
    /// Matching entries of a table section.
    Entries(Vec<(&'a str, &'a Leaf)>),
}

/// Ordered mapping topic -> match, in topic insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResults<'a> {
    hits: Vec<(&'a str, TopicMatch<'a>)>,
}

impl<'a> SearchResults<'a> {
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn first(&self) -> Option<(&'a str, &TopicMatch<'a>)> {
        self.hits.first().map(|(topic, hit)| (*topic, hit))
    }

    pub fn get(&self, topic: &str) -> Option<&TopicMatch<'a>> {
        self.hits.iter().find(|(key, _)| *key == topic).map(|(_, hit)| hit)
    }

    pub fn topics(&self) -> Vec<&'a str> {
        self.hits.iter().map(|(topic, _)| *topic).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &TopicMatch<'a>)> {
        self.hits.iter().map(|(topic, hit)| (*topic, hit))
    }

    pub(crate) fn push(&mut self, topic: &'a str, hit: TopicMatch<'a>) {
        self.hits.push((topic, hit));
    }

    /// Fold another result set into this one.
    ///
    /// A topic already present is replaced in place, keeping its original position.
    /// Returns the replaced topic keys.
    pub fn merge(&mut self, other: SearchResults<'a>) -> Vec<&'a str> {
        let mut replaced = Vec::new();
        for (topic, hit) in other.hits {
            match self.hits.iter_mut().find(|(key, _)| *key == topic) {
                Some(slot) => {
                    slot.1 = hit;
                    replaced.push(topic);
                }
                None => self.hits.push((topic, hit)),
            }
        }
        replaced
    }
}

/// Match one topic against a lowercase query.
///
/// List sections match item by item, so a query never spans two items.
pub(crate) fn match_topic<'a>(
    topic: &'a str,
    record: &'a TopicRecord,
    query: &str,
) -> Option<TopicMatch<'a>> {
    let definition_hit = record
        .definition()
        .is_some_and(|definition| definition.to_lowercase().contains(query));
    if topic.to_lowercase().contains(query) || definition_hit {
        return Some(TopicMatch::Full(record));
    }

    let mut sections = Vec::new();
    for (name, section) in record.sections() {
        let hit = match section {
            Section::Text(text) => (name.to_lowercase().contains(query)
                || text.to_lowercase().contains(query))
            .then_some(SectionHit::Whole(section)),
            Section::List(items) => (name.to_lowercase().contains(query)
                || items.iter().any(|item| item.to_lowercase().contains(query)))
            .then_some(SectionHit::Whole(section)),
            Section::Table(entries) => {
                let matched: Vec<(&str, &Leaf)> = entries
                    .iter()
                    .filter(|(key, leaf)| key.to_lowercase().contains(query) || leaf.contains(query))
                    .map(|(key, leaf)| (key.as_str(), leaf))
                    .collect();
                (!matched.is_empty()).then_some(SectionHit::Entries(matched))
            }
        };
        if let Some(hit) = hit {
            sections.push(SectionMatch { name, hit });
        }
    }

    (!sections.is_empty()).then_some(TopicMatch::Partial(sections))
}
