// file: src/corpus/topics.rs
// description: Sorted unique topic index and autocomplete suggestions

use crate::matcher::normalize_query;
use crate::models::Quote;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicIndex {
    topics: Vec<String>,
}

impl TopicIndex {
    /// Unique topics in ascending byte order.
    pub fn build(quotes: &[Quote]) -> Self {
        let topics = quotes
            .iter()
            .map(|q| q.topic.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        Self { topics }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.topics
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    pub fn contains(&self, topic: &str) -> bool {
        self.topics.binary_search_by(|t| t.as_str().cmp(topic)).is_ok()
    }

    /// Topics offered while the user is typing `partial`. An empty partial
    /// offers the full list.
    pub fn suggest(&self, partial: &str) -> Vec<&str> {
        let needle = normalize_query(partial);

        self.topics
            .iter()
            .filter(|t| t.to_lowercase().contains(&needle))
            .map(String::as_str)
            .collect()
    }
}
