//! Knowledge Stores
//!
//! Static topic dictionaries loaded once and never mutated. Agents attach one or more
//! stores and query them with plain substring search; there is no indexing or ranking.

mod record;
mod search;
mod store;

pub use record::{Leaf, Section, TopicRecord};
pub use search::{SearchResults, SectionHit, SectionMatch, TopicMatch};
pub use store::{KnowledgeStore, KnowledgeValue};
