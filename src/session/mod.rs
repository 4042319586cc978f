// file: src/session/mod.rs
// description: Transient lookup state: current query, latest results and url mirror
// reference: internal module structure

pub mod url_state;

use crate::corpus::{Corpus, TopicIndex};
use crate::error::Result;
use crate::matcher::QuoteMatcher;
use crate::models::ResultSet;
use tracing::{debug, info};
use url::Url;

/// What the results area should show for the current state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View<'a> {
    /// Nothing typed yet
    Idle,
    Quotes(&'a ResultSet),
    /// Carries the query as the user typed it
    NotFound(&'a str),
}

pub struct Session {
    corpus: Corpus,
    matcher: QuoteMatcher,
    location: Url,
    query: String,
    results: ResultSet,
}

impl Session {
    /// Opens a session at `location`. A non-empty `topic` parameter is looked
    /// up immediately; the url itself is left untouched.
    pub fn new(corpus: Corpus, matcher: QuoteMatcher, location: Url) -> Self {
        let mut session = Self {
            corpus,
            matcher,
            location,
            query: String::new(),
            results: ResultSet::default(),
        };

        if let Some(topic) = url_state::initial_topic(&session.location)
            && !topic.is_empty()
        {
            info!("Initial topic from url: {}", topic);
            session.run(&topic);
        }

        session
    }

    /// Like [`Session::new`], parsing `seed_url` when given, else `base_url`.
    pub fn open(
        corpus: Corpus,
        matcher: QuoteMatcher,
        base_url: &str,
        seed_url: Option<&str>,
    ) -> Result<Self> {
        let location = url_state::parse_location(seed_url.unwrap_or(base_url))?;
        Ok(Self::new(corpus, matcher, location))
    }

    pub fn submit(&mut self, query: &str) -> &ResultSet {
        self.run(query);
        self.location = url_state::with_topic(&self.location, query);
        debug!("Location now {}", self.location);
        &self.results
    }

    fn run(&mut self, query: &str) {
        self.query = query.to_string();
        self.results = self.matcher.find(self.corpus.quotes(), query);
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    pub fn share_url(&self) -> &Url {
        &self.location
    }

    pub fn topics(&self) -> &TopicIndex {
        self.corpus.topics()
    }

    pub fn view(&self) -> View<'_> {
        if !self.results.is_empty() {
            View::Quotes(&self.results)
        } else if self.query.trim().is_empty() {
            View::Idle
        } else {
            View::NotFound(&self.query)
        }
    }
}
