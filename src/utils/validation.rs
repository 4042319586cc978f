// file: src/utils/validation.rs
// description: corpus shape validation and text helpers
// reference: input validation patterns

use crate::error::{QuoteError, Result};
use crate::models::Quote;
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn validate_corpus_file(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(QuoteError::Corpus(format!(
                "Corpus file does not exist: {}",
                path.display()
            )));
        }

        if !path.is_file() {
            return Err(QuoteError::Corpus(format!(
                "Corpus path is not a file: {}",
                path.display()
            )));
        }

        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(()),
            _ => Err(QuoteError::Corpus(format!(
                "Corpus file is not a json file: {}",
                path.display()
            ))),
        }
    }

    pub fn validate_quotes(quotes: &[Quote]) -> Result<()> {
        if quotes.is_empty() {
            return Err(QuoteError::Corpus("Corpus contains no quotes".to_string()));
        }

        for (idx, quote) in quotes.iter().enumerate() {
            Self::validate_not_blank(&quote.topic, "topic", idx)?;
            Self::validate_not_blank(&quote.text, "text", idx)?;
        }

        Ok(())
    }

    fn validate_not_blank(value: &str, field: &str, idx: usize) -> Result<()> {
        if value.trim().is_empty() {
            return Err(QuoteError::Corpus(format!(
                "Quote #{} has an empty `{}`",
                idx, field
            )));
        }
        Ok(())
    }
}
