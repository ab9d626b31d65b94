use ahash::RandomState;
use indexmap::IndexMap;

use crate::vectorizer::term::TermFrequency;

/// keep bag count and per-term bag counts of a collection
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    /// number of bags added
    pub doc_num: u64,
    /// number of bags each term appears in, first-seen order
    pub term_counts: IndexMap<Box<str>, u64, RandomState>,
}

impl Corpus {
    /// Create a new instance
    pub fn new() -> Self {
        Self {
            doc_num: 0,
            term_counts: IndexMap::with_hasher(RandomState::new()),
        }
    }

    /// Build the statistics of a bag collection
    pub fn from_bags<'a, I>(bags: I) -> Self
    where
        I: IntoIterator<Item = &'a TermFrequency>,
    {
        let mut corpus = Self::new();
        for bag in bags {
            corpus.add_bag(bag);
        }
        corpus
    }

    /// Add one bag; each distinct term counts once regardless of its frequency
    pub fn add_bag(&mut self, bag: &TermFrequency) {
        self.doc_num += 1;
        for term in bag.term_set_iter() {
            match self.term_counts.get_mut(term) {
                Some(count) => *count += 1,
                None => {
                    self.term_counts.insert(term.into(), 1);
                }
            }
        }
    }

    /// Get the number of bags in the corpus
    #[inline]
    pub fn get_doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Get the number of bags containing the term
    #[inline]
    pub fn get_term_count(&self, term: &str) -> u64 {
        self.term_counts.get(term).copied().unwrap_or(0)
    }

    /// Get the current vocabulary size (number of unique terms)
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.term_counts.len()
    }

    /// Iterator over terms and their bag counts
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.term_counts.iter().map(|(term, &count)| (&**term, count))
    }
}
