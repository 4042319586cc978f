// file: src/matcher/mod.rs
// description: topic substring matching with uniform random sampling
// reference: https://docs.rs/rand/latest/rand/seq/trait.SliceRandom.html

pub mod rng;

pub use rng::RngProvider;

use crate::config::{EmptyQueryPolicy, MatcherConfig};
use crate::models::{Quote, ResultSet};
use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::debug;

pub const DEFAULT_SAMPLE_SIZE: usize = 3;

/// Trims and lower-cases a raw query the way topics are compared.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

#[derive(Debug)]
pub struct QuoteMatcher {
    sample_size: usize,
    empty_query: EmptyQueryPolicy,
    rng: StdRng,
}

impl QuoteMatcher {
    pub fn new(config: &MatcherConfig) -> Self {
        Self::with_provider(
            config.sample_size,
            config.empty_query,
            RngProvider::from_seed(config.seed),
        )
    }

    pub fn with_provider(
        sample_size: usize,
        empty_query: EmptyQueryPolicy,
        provider: RngProvider,
    ) -> Self {
        Self {
            sample_size,
            empty_query,
            rng: provider.rng(),
        }
    }

    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Returns up to `sample_size` quotes whose topic contains the query.
    pub fn find(&mut self, quotes: &[Quote], query: &str) -> ResultSet {
        find_with_rng(
            quotes,
            query,
            self.sample_size,
            self.empty_query,
            &mut self.rng,
        )
    }
}

impl Default for QuoteMatcher {
    fn default() -> Self {
        Self::with_provider(
            DEFAULT_SAMPLE_SIZE,
            EmptyQueryPolicy::default(),
            RngProvider::new_random(),
        )
    }
}

/// Filter, shuffle, truncate. The random source is supplied by the caller.
pub fn find_with_rng<R: Rng + ?Sized>(
    quotes: &[Quote],
    query: &str,
    sample_size: usize,
    empty_query: EmptyQueryPolicy,
    rng: &mut R,
) -> ResultSet {
    let needle = normalize_query(query);

    if needle.is_empty() && empty_query == EmptyQueryPolicy::None {
        debug!("Empty query, no quotes selected");
        return ResultSet::empty(needle);
    }

    let mut matched: Vec<Quote> = quotes
        .iter()
        .filter(|q| q.topic_contains(&needle))
        .cloned()
        .collect();
    let candidates = matched.len();

    matched.shuffle(rng);
    matched.truncate(sample_size);

    debug!(
        "Query {:?} matched {} quotes, sampled {}",
        needle,
        candidates,
        matched.len()
    );

    ResultSet::new(needle, candidates, matched)
}
