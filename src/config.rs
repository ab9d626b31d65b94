//! TOML configuration.
//!
//! Every field has a default, so a missing file section (or no file at all)
//! means one document and one sentence per answer with the standard English
//! stopword list.
//!
//! ```toml
//! [retrieval]
//! file_matches = 1
//! sentence_matches = 1
//!
//! [normalizer]
//! extra_stopwords = ["chapter"]
//! ```

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::engine::StopwordNormalizer;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub retrieval: RetrievalConfig,
    #[serde(default)]
    pub normalizer: NormalizerConfig,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RetrievalConfig {
    /// Documents selected for sentence extraction
    #[serde(default = "default_file_matches")]
    pub file_matches: usize,
    /// Sentences reported per answer
    #[serde(default = "default_sentence_matches")]
    pub sentence_matches: usize,
}

fn default_file_matches() -> usize {
    1
}
fn default_sentence_matches() -> usize {
    1
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            file_matches: default_file_matches(),
            sentence_matches: default_sentence_matches(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct NormalizerConfig {
    #[serde(default)]
    pub extra_stopwords: Vec<String>,
}

impl NormalizerConfig {
    /// English normalizer extended with the configured stopwords
    pub fn build(&self) -> StopwordNormalizer {
        StopwordNormalizer::english().with_extra_stopwords(&self.extra_stopwords)
    }
}

impl Config {
    /// Read and validate a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse TOML")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.retrieval.file_matches == 0 {
            bail!("retrieval.file_matches must be at least 1");
        }
        if self.retrieval.sentence_matches == 0 {
            bail!("retrieval.sentence_matches must be at least 1");
        }
        Ok(())
    }
}
