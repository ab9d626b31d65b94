//! Text processing collaborators of the ranking core.
//!
//! The rankers only see token bags; how raw text becomes tokens and sentences
//! is decided by the `Normalizer` and `Segmenter` implementations plugged in
//! here, so any compliant tokenizer can replace the defaults.

pub mod normalizer;
pub mod segmenter;
pub mod stopwords;

pub use normalizer::StopwordNormalizer;
pub use segmenter::UnicodeSegmenter;

/// Turns raw text into normalized word tokens
pub trait Normalizer: Send + Sync {
    /// Lowercased tokens with stopwords and punctuation removed.
    /// Empty input yields an empty vector.
    fn normalize(&self, text: &str) -> Vec<String>;
}

/// Splits raw text into candidate sentences
pub trait Segmenter: Send + Sync {
    fn segment(&self, text: &str) -> Vec<String>;
}
