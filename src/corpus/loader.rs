// file: src/corpus/loader.rs
// description: Corpus loading from the bundled json or a file on disk
// reference: https://docs.rs/serde_json

use crate::corpus::topics::TopicIndex;
use crate::error::{QuoteError, Result};
use crate::models::Quote;
use crate::utils::Validator;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

const BUNDLED_QUOTES: &str = include_str!("../../data/quotes.json");

/// Immutable quote table shared by every session.
#[derive(Debug, Clone)]
pub struct Corpus {
    quotes: Arc<[Quote]>,
    topics: Arc<TopicIndex>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CorpusStats {
    pub quotes: usize,
    pub topics: usize,
    pub per_topic: BTreeMap<String, usize>,
}

impl Corpus {
    pub fn new(quotes: Vec<Quote>) -> Result<Self> {
        Validator::validate_quotes(&quotes)?;

        let topics = TopicIndex::build(&quotes);
        debug!(
            "Corpus ready: {} quotes across {} topics",
            quotes.len(),
            topics.len()
        );

        Ok(Self {
            quotes: quotes.into(),
            topics: Arc::new(topics),
        })
    }

    pub fn bundled() -> Result<Self> {
        Self::from_json_str(BUNDLED_QUOTES)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let quotes: Vec<Quote> =
            serde_json::from_str(json).map_err(|e| QuoteError::Corpus(e.to_string()))?;
        Self::new(quotes)
    }

    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading corpus from: {}", path.display());
        Validator::validate_corpus_file(path)?;

        let content = fs::read_to_string(path).map_err(|source| QuoteError::CorpusFile {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json_str(&content)
    }

    /// Loads `path` when given, otherwise the bundled quotes.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::bundled(),
        }
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn topics(&self) -> &TopicIndex {
        &self.topics
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn stats(&self) -> CorpusStats {
        let mut per_topic = BTreeMap::new();
        for quote in self.quotes.iter() {
            *per_topic.entry(quote.topic.clone()).or_insert(0) += 1;
        }

        CorpusStats {
            quotes: self.quotes.len(),
            topics: self.topics.len(),
            per_topic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const SMALL: &str = r#"[
        {"topic": "love", "text": "A"},
        {"topic": "loss", "text": "B"},
        {"topic": "life", "text": "C"}
    ]"#;

    #[test]
    fn test_bundled_corpus_is_valid() {
        let corpus = Corpus::bundled().unwrap();
        assert!(!corpus.is_empty());
        assert!(corpus.topics().len() <= corpus.len());
    }

    #[test]
    fn test_from_json_str_keeps_insertion_order() {
        let corpus = Corpus::from_json_str(SMALL).unwrap();
        let texts: Vec<&str> = corpus.quotes().iter().map(|q| q.text.as_str()).collect();
        assert_eq!(texts, vec!["A", "B", "C"]);
        assert_eq!(corpus.topics().as_slice(), &["life", "loss", "love"]);
    }

    #[test]
    fn test_malformed_corpus_fails_fast() {
        assert!(Corpus::from_json_str("{}").is_err());
        assert!(Corpus::from_json_str("[]").is_err());
        assert!(Corpus::from_json_str(r#"[{"topic": "love"}]"#).is_err());
        assert!(Corpus::from_json_str(r#"[{"topic": 1, "text": "A"}]"#).is_err());
        assert!(Corpus::from_json_str(r#"[{"topic": "", "text": "A"}]"#).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("quotes.json");
        fs::write(&path, SMALL).unwrap();

        let corpus = Corpus::resolve(Some(path.as_path())).unwrap();
        assert_eq!(corpus.len(), 3);

        let missing = temp.path().join("missing.json");
        assert!(Corpus::resolve(Some(missing.as_path())).is_err());
    }

    #[test]
    fn test_clones_share_quotes() {
        let corpus = Corpus::from_json_str(SMALL).unwrap();
        let clone = corpus.clone();
        assert!(std::ptr::eq(corpus.quotes(), clone.quotes()));
    }

    #[test]
    fn test_stats() {
        let corpus = Corpus::from_json_str(
            r#"[
                {"topic": "love", "text": "A"},
                {"topic": "love", "text": "B"},
                {"topic": "life", "text": "C"}
            ]"#,
        )
        .unwrap();

        let stats = corpus.stats();
        assert_eq!(stats.quotes, 3);
        assert_eq!(stats.topics, 2);
        assert_eq!(stats.per_topic.get("love"), Some(&2));
        assert_eq!(stats.per_topic.get("life"), Some(&1));
    }
}
