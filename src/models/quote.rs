// file: src/models/quote.rs
// description: Quote record as stored in the bundled corpus
// reference: corpus json schema

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Quote {
    pub topic: String,
    pub text: String,
}

impl Quote {
    pub fn new(topic: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            text: text.into(),
        }
    }

    /// Case-insensitive substring test against an already normalized needle.
    pub fn topic_contains(&self, needle: &str) -> bool {
        self.topic.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_contains_ignores_case() {
        let quote = Quote::new("Love", "Love conquers all.");
        assert!(quote.topic_contains("lov"));
        assert!(quote.topic_contains("ove"));
        assert!(quote.topic_contains(""));
        assert!(!quote.topic_contains("LOV"));
        assert!(!quote.topic_contains("loss"));
    }

    #[test]
    fn test_deserialize_rejects_unknown_fields() {
        let ok: Quote = serde_json::from_str(r#"{"topic":"life","text":"C"}"#).unwrap();
        assert_eq!(ok, Quote::new("life", "C"));

        let err = serde_json::from_str::<Quote>(r#"{"topic":"life","text":"C","author":"X"}"#);
        assert!(err.is_err());

        let missing = serde_json::from_str::<Quote>(r#"{"topic":"life"}"#);
        assert!(missing.is_err());
    }
}
