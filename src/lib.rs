//! This crate is a question answering engine built on TF-IDF ranking.
//! Documents are ranked against a query by TF-IDF, then the best sentence is
//! extracted from the top document(s) by summed IDF with query term density
//! as the tie-breaker.

pub mod vectorizer;
pub mod engine;
pub mod answer;
pub mod config;
pub mod loader;

pub use error::{Error, Stage};

/// Question Answering Orchestrator
/// Owns the raw corpus text, the document bags and the document level IDF
/// table, all built once at construction.
///
/// Every call to `answer` ranks documents, segments the selected ones into
/// sentences, computes a fresh sentence level IDF table and ranks sentences.
/// Nothing computed for one query is reused by the next, so `answer` takes
/// `&self` and can be shared across threads.
pub use answer::{Answer, Answerer};

/// TF-IDF Vectorizer
/// Holds a collection of named token bags together with their `Corpus`
/// statistics and IDF table.
///
/// `TFIDFVectorizer<K, E>` has the following generic parameters:
/// - `K`: Bag key type (document name, sentence text, ...)
/// - `E`: TF-IDF calculation engine type (e.g., DefaultTFIDFEngine)
///
/// The vectorizer is immutable once built; rebuild it to change the collection.
pub use vectorizer::TFIDFVectorizer;

/// Corpus for TF-IDF Vectorizer
/// This struct manages document frequency statistics of a bag collection.
/// It does not store document text or IDs; it only manages:
/// - The number of bags
/// - The number of bags in which each term appears
///
/// It is used as the base data for IDF (Inverse Document Frequency) calculation.
pub use vectorizer::corpus::Corpus;

/// Term Frequency structure
/// The token bag of one document or one sentence.
/// It manages:
/// - The count of occurrences of each term, in first-seen order
/// - The total number of terms in the bag
pub use vectorizer::term::TermFrequency;

/// IDF Table
/// Maps every term of a collection to `ln(total bags / bags containing term)`.
/// Lookups of terms outside the collection return `None`.
pub use vectorizer::idf::{compute_idf, IdfTable};

/// TF IDF Calculation Engine Trait
/// A trait that defines the TF and IDF weighting used by rankers.
///
/// A default implementation, `DefaultTFIDFEngine`, is provided and performs
/// textbook-style calculation: raw term count for TF, `ln(D / df)` for IDF.
pub use vectorizer::tfidf::{DefaultTFIDFEngine, TFIDFEngine};

/// Query Structure
/// A deduplicated, sorted set of normalized query terms.
pub use vectorizer::evaluate::query::Query;

/// Search Hits and ranking functions
/// - `Hits`: holds a list of scored results and provides sorting by score
/// - `HitEntry`: a single result entry, containing the key, score and bag length
/// - `top_documents`: TF-IDF document ranking
/// - `top_sentences`: IDF sentence ranking with density tie-break
pub use vectorizer::evaluate::scoring::{top_documents, top_sentences, HitEntry, Hits};

/// Normalizer and Segmenter interfaces with their default implementations
pub use engine::{Normalizer, Segmenter, StopwordNormalizer, UnicodeSegmenter};

/// Ordered map from bag key to token bag.
pub use vectorizer::Bags;

mod error {
    use std::fmt;

    /// Ranking stage a count was requested for.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Stage {
        Documents,
        Sentences,
    }

    impl fmt::Display for Stage {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Stage::Documents => f.write_str("documents"),
                Stage::Sentences => f.write_str("sentences"),
            }
        }
    }

    /// Errors raised by the ranking core.
    #[derive(thiserror::Error, Debug, Clone, PartialEq)]
    pub enum Error {
        /// More results were requested than there are candidates.
        #[error("requested {requested} {stage} but only {available} available")]
        Configuration {
            stage: Stage,
            requested: usize,
            available: usize,
        },
        /// IDF was computed over a collection without any bag.
        #[error("cannot compute IDF over an empty collection")]
        EmptyCollection,
    }
}
