use std::collections::HashSet;

use ahash::RandomState;
use unicode_segmentation::UnicodeSegmentation;

use crate::engine::{stopwords::{ENGLISH_STOPWORDS, PUNCTUATION}, Normalizer};

/// Word tokenizer with stopword and punctuation removal
///
/// Splits on Unicode word boundaries, lowercases, drops whitespace, tokens made
/// only of punctuation characters, and stopwords. Output is sorted.
#[derive(Debug, Clone)]
pub struct StopwordNormalizer {
    stopwords: HashSet<Box<str>, RandomState>,
    punctuation: HashSet<char, RandomState>,
}

impl StopwordNormalizer {
    /// Normalizer with caller supplied stopword and punctuation sets
    pub fn new<S, T, P>(stopwords: S, punctuation: P) -> Self
    where
        S: IntoIterator<Item = T>,
        T: AsRef<str>,
        P: IntoIterator<Item = char>,
    {
        Self {
            stopwords: stopwords.into_iter().map(|w| Box::from(w.as_ref().to_lowercase())).collect(),
            punctuation: punctuation.into_iter().collect(),
        }
    }

    /// Standard English stopwords, ASCII and common typographic punctuation
    pub fn english() -> Self {
        Self::new(ENGLISH_STOPWORDS.iter(), PUNCTUATION.iter().copied())
    }

    /// Add stopwords on top of the current set
    pub fn with_extra_stopwords<S, T>(mut self, extra: S) -> Self
    where
        S: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.stopwords
            .extend(extra.into_iter().map(|w| Box::from(w.as_ref().to_lowercase())));
        self
    }

    #[inline]
    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    /// true when every char of the token is a punctuation char
    #[inline]
    pub fn is_punctuation(&self, token: &str) -> bool {
        !token.is_empty() && token.chars().all(|c| self.punctuation.contains(&c))
    }
}

impl Default for StopwordNormalizer {
    fn default() -> Self {
        Self::english()
    }
}

impl Normalizer for StopwordNormalizer {
    fn normalize(&self, text: &str) -> Vec<String> {
        let mut tokens: Vec<String> = text
            .split_word_bounds()
            .filter(|word| !word.trim().is_empty())
            // typographic apostrophe so "don’t" matches "don't"
            .map(|word| word.to_lowercase().replace('\u{2019}', "'"))
            .filter(|word| !self.is_punctuation(word) && !self.is_stopword(word))
            .collect();
        tokens.sort_unstable();
        tokens
    }
}
