// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod corpus;
pub mod error;
pub mod matcher;
pub mod models;
pub mod render;
pub mod session;
pub mod utils;

pub use config::{Config, CorpusConfig, DisplayConfig, EmptyQueryPolicy, MatcherConfig};
pub use corpus::{Corpus, CorpusStats, TopicIndex};
pub use error::{QuoteError, Result};
pub use matcher::{QuoteMatcher, RngProvider, find_with_rng, normalize_query};
pub use models::{Quote, ResultSet};
pub use render::Renderer;
pub use session::{Session, View};
pub use utils::Validator;
