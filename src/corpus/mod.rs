// file: src/corpus/mod.rs
// description: quote corpus module exports
// reference: internal module structure

pub mod loader;
pub mod topics;

pub use loader::{Corpus, CorpusStats};
pub use topics::TopicIndex;
