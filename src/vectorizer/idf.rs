use ahash::RandomState;
use indexmap::IndexMap;

use crate::{
    vectorizer::{corpus::Corpus, term::TermFrequency, tfidf::{DefaultTFIDFEngine, TFIDFEngine}, Bags},
    Error,
};

/// IDF values of every term in a collection
#[derive(Debug, Clone)]
pub struct IdfTable {
    /// term -> idf
    pub idf: IndexMap<Box<str>, f64, RandomState>,
    /// number of bags the table was computed over
    pub doc_num: u64,
}

impl IdfTable {
    /// Compute the table from corpus statistics
    ///
    /// Fails with `Error::EmptyCollection` when the corpus holds no bag.
    pub fn from_corpus<E: TFIDFEngine>(corpus: &Corpus) -> Result<Self, Error> {
        let doc_num = corpus.get_doc_num();
        if doc_num == 0 {
            return Err(Error::EmptyCollection);
        }
        let idf = corpus
            .iter()
            .map(|(term, doc_freq)| (Box::from(term), E::idf(doc_num, doc_freq)))
            .collect();
        Ok(Self { idf, doc_num })
    }

    /// Compute the table over a bag collection
    pub fn from_bags<'a, E, I>(bags: I) -> Result<Self, Error>
    where
        E: TFIDFEngine,
        I: IntoIterator<Item = &'a TermFrequency>,
    {
        Self::from_corpus::<E>(&Corpus::from_bags(bags))
    }

    /// IDF of a term, `None` if no bag of the collection contains it
    #[inline]
    pub fn get(&self, term: &str) -> Option<f64> {
        self.idf.get(term).copied()
    }

    #[inline]
    pub fn contains(&self, term: &str) -> bool {
        self.idf.contains_key(term)
    }

    /// Number of terms in the table
    #[inline]
    pub fn len(&self) -> usize {
        self.idf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.idf.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.idf.iter().map(|(term, &idf)| (&**term, idf))
    }
}

/// `ln(bag count / bags containing term)` for every term of `bags`
pub fn compute_idf<K>(bags: &Bags<K>) -> Result<IdfTable, Error> {
    IdfTable::from_bags::<DefaultTFIDFEngine, _>(bags.values())
}
