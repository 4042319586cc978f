// file: src/models/result_set.rs
// description: Sampled quotes returned for a single query submission

use crate::models::Quote;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    /// Normalized query that produced these quotes
    pub query: String,

    /// Number of quotes that matched before sampling
    pub candidates: usize,

    pub quotes: Vec<Quote>,
}

impl ResultSet {
    pub fn new(query: String, candidates: usize, quotes: Vec<Quote>) -> Self {
        Self {
            query,
            candidates,
            quotes,
        }
    }

    pub fn empty(query: String) -> Self {
        Self::new(query, 0, Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Quote> {
        self.quotes.iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a Quote;
    type IntoIter = std::slice::Iter<'a, Quote>;

    fn into_iter(self) -> Self::IntoIter {
        self.quotes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_set() {
        let results = ResultSet::empty("zebra".to_string());
        assert!(results.is_empty());
        assert_eq!(results.len(), 0);
        assert_eq!(results.candidates, 0);
        assert_eq!(results.query, "zebra");
    }

    #[test]
    fn test_iterates_in_order() {
        let results = ResultSet::new(
            "lo".to_string(),
            5,
            vec![Quote::new("love", "A"), Quote::new("loss", "B")],
        );

        let texts: Vec<&str> = results.iter().map(|q| q.text.as_str()).collect();
        assert_eq!(texts, vec!["A", "B"]);
        assert_eq!(results.candidates, 5);
    }
}
