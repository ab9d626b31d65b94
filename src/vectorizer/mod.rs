pub mod corpus;
pub mod evaluate;
pub mod idf;
pub mod term;
pub mod tfidf;

use std::hash::Hash;
use std::marker::PhantomData;

use ahash::RandomState;
use indexmap::IndexMap;

use crate::{
    vectorizer::{
        corpus::Corpus,
        evaluate::{query::Query, scoring::{self, Hits}},
        idf::IdfTable,
        term::TermFrequency,
        tfidf::{DefaultTFIDFEngine, TFIDFEngine},
    },
    Error,
};

/// Named token bags in insertion order
pub type Bags<K> = IndexMap<K, TermFrequency, RandomState>;

#[derive(Debug, Clone)]
pub struct TFIDFVectorizer<K = String, E = DefaultTFIDFEngine>
where
    K: Eq + Hash,
    E: TFIDFEngine,
{
    /// Token bag of each document
    documents: Bags<K>,
    /// Document frequency statistics
    corpus: Corpus,
    /// IDF table over `documents`
    idf_cache: IdfTable,
    _marker: PhantomData<E>,
}

impl<K, E> TFIDFVectorizer<K, E>
where
    K: Eq + Hash,
    E: TFIDFEngine,
{
    /// Build the vectorizer over a bag collection
    ///
    /// Fails with `Error::EmptyCollection` when `documents` is empty.
    pub fn from_bags(mut documents: Bags<K>) -> Result<Self, Error> {
        documents.values_mut().for_each(TermFrequency::shrink_to_fit);
        let corpus = Corpus::from_bags(documents.values());
        let idf_cache = IdfTable::from_corpus::<E>(&corpus)?;
        Ok(Self {
            documents,
            corpus,
            idf_cache,
            _marker: PhantomData,
        })
    }

    #[inline]
    pub fn documents(&self) -> &Bags<K> {
        &self.documents
    }

    #[inline]
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    #[inline]
    pub fn idf(&self) -> &IdfTable {
        &self.idf_cache
    }

    /// Number of bags
    #[inline]
    pub fn doc_num(&self) -> usize {
        self.documents.len()
    }

    pub fn get_doc(&self, key: &K) -> Option<&TermFrequency> {
        self.documents.get(key)
    }
}

impl<K, E> TFIDFVectorizer<K, E>
where
    K: Eq + Hash + Clone + Ord,
    E: TFIDFEngine,
{
    /// Every document scored by TF-IDF, best first
    pub fn similarity(&self, query: &Query) -> Hits<K> {
        scoring::score_documents::<K, E>(query, &self.documents, &self.idf_cache)
    }

    /// Top `n` documents by TF-IDF with their scores
    pub fn rank_documents(&self, query: &Query, n: usize) -> Result<Hits<K>, Error> {
        scoring::rank_documents::<K, E>(query, &self.documents, &self.idf_cache, n)
    }
}

impl<K, E> TFIDFVectorizer<K, E>
where
    K: Eq + Hash + Clone,
    E: TFIDFEngine,
{
    /// Top `n` bags by summed IDF, ties broken by query term density
    pub fn top_sentences(&self, query: &Query, n: usize) -> Result<Vec<K>, Error> {
        scoring::top_sentences(query, &self.documents, &self.idf_cache, n)
    }
}
