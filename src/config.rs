// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{QuoteError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub matcher: MatcherConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CorpusConfig {
    /// Alternate quote file; `None` or empty uses the bundled corpus.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MatcherConfig {
    pub sample_size: usize,
    pub empty_query: EmptyQueryPolicy,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub base_url: String,
    pub reveal_delay_ms: u64,
}

/// What an empty (or whitespace-only) query selects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyQueryPolicy {
    /// Every quote is a candidate, since "" is a substring of any topic.
    All,
    #[default]
    None,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            sample_size: 3,
            empty_query: EmptyQueryPolicy::None,
            seed: None,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/".to_string(),
            reveal_delay_ms: 100,
        }
    }
}

impl CorpusConfig {
    pub fn custom_path(&self) -> Option<&Path> {
        self.path
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder
                .add_source(config::File::from(Path::new("config/default.toml")).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("CLASSIC_QUOTES")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| QuoteError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| QuoteError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            corpus: CorpusConfig::default(),
            matcher: MatcherConfig::default(),
            display: DisplayConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.matcher.sample_size == 0 {
            return Err(QuoteError::Config(
                "sample_size must be greater than 0".to_string(),
            ));
        }

        let base = Url::parse(&self.display.base_url)
            .map_err(|e| QuoteError::Config(format!("base_url: {}", e)))?;
        if base.scheme() != "http" && base.scheme() != "https" {
            return Err(QuoteError::Config(format!(
                "base_url must be http(s): {}",
                self.display.base_url
            )));
        }

        Ok(())
    }
}
