use std::fmt::{self, Debug, Display};

use crate::{
    vectorizer::{evaluate::query::Query, idf::IdfTable, term::TermFrequency, tfidf::{DefaultTFIDFEngine, TFIDFEngine}, Bags},
    Error, Stage,
};

/// A single ranked entry
#[derive(Debug, Clone, PartialEq)]
pub struct HitEntry<K> {
    pub key: K,
    pub score: f64,
    /// total term count of the bag
    pub doc_len: u64,
}

/// Structure to store ranking results
#[derive(Clone, PartialEq)]
pub struct Hits<K> {
    pub list: Vec<HitEntry<K>>,
}

impl<K> Hits<K> {
    /// Create a new Hits instance
    pub fn new(list: Vec<HitEntry<K>>) -> Self {
        Hits { list }
    }

    /// Sort results by descending score, ties by ascending key
    pub fn sort_by_score_desc(&mut self) -> &mut Self
    where
        K: Ord,
    {
        self.list
            .sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.key.cmp(&b.key)));
        self
    }

    /// Keep the first `n` entries
    pub fn truncate(&mut self, n: usize) -> &mut Self {
        self.list.truncate(n);
        self
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.list.iter().map(|hit| &hit.key)
    }

    pub fn into_keys(self) -> Vec<K> {
        self.list.into_iter().map(|hit| hit.key).collect()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl<K> Debug for Hits<K>
where
    K: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "Hits [")?;
            for hit in &self.list {
                writeln!(f, "    {:?}: {:.6} (len: {})", hit.key, hit.score, hit.doc_len)?;
            }
            write!(f, "]")
        } else {
            f.debug_list().entries(&self.list).finish()
        }
    }
}

impl<K> Display for Hits<K>
where
    K: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for hit in &self.list {
            writeln!(f, "{:.6}\t{}", hit.score, hit.key)?;
        }
        Ok(())
    }
}

#[inline]
fn check_requested(stage: Stage, requested: usize, available: usize) -> Result<(), Error> {
    if requested > available {
        return Err(Error::Configuration { stage, requested, available });
    }
    Ok(())
}

/// TF-IDF score of a single bag
///
/// Sums `tf(t) * idf(t)` over query terms present in the bag. Terms missing
/// from the IDF table contribute nothing.
pub fn tfidf_score<E: TFIDFEngine>(query: &Query, bag: &TermFrequency, idf: &IdfTable) -> f64 {
    let term_sum = bag.term_sum();
    query
        .terms()
        .filter_map(|term| {
            let count = bag.term_count(term);
            if count == 0 {
                return None;
            }
            idf.get(term).map(|idf| E::tf(count, term_sum) * idf)
        })
        .sum()
}

/// Score every bag of the collection, sorted best first
pub fn score_documents<K, E>(query: &Query, bags: &Bags<K>, idf: &IdfTable) -> Hits<K>
where
    K: Clone + Ord,
    E: TFIDFEngine,
{
    let list = bags
        .iter()
        .map(|(key, bag)| HitEntry {
            key: key.clone(),
            score: tfidf_score::<E>(query, bag, idf),
            doc_len: bag.term_sum(),
        })
        .collect();
    let mut hits = Hits::new(list);
    hits.sort_by_score_desc();
    hits
}

/// Top `n` scored documents
///
/// Fails with `Error::Configuration` when `n` exceeds the number of bags.
pub fn rank_documents<K, E>(query: &Query, bags: &Bags<K>, idf: &IdfTable, n: usize) -> Result<Hits<K>, Error>
where
    K: Clone + Ord,
    E: TFIDFEngine,
{
    check_requested(Stage::Documents, n, bags.len())?;
    let mut hits = score_documents::<K, E>(query, bags, idf);
    hits.truncate(n);
    Ok(hits)
}

/// Names of the `n` documents with the highest summed TF-IDF
pub fn top_documents<K>(query: &Query, bags: &Bags<K>, idf: &IdfTable, n: usize) -> Result<Vec<K>, Error>
where
    K: Clone + Ord,
{
    Ok(rank_documents::<K, DefaultTFIDFEngine>(query, bags, idf, n)?.into_keys())
}

struct SentenceScore<'a, K> {
    key: &'a K,
    position: usize,
    score: f64,
    density: f64,
}

/// The `n` best sentences by summed IDF
///
/// Each query term found in a sentence adds its IDF once, however often it
/// occurs. Only sentences tied at the best score are returned, ordered by
/// query term density (distinct matches / sentence length) and then by their
/// position in `bags`; the result is shorter than `n` when fewer sentences
/// share the best score.
pub fn top_sentences<K>(query: &Query, bags: &Bags<K>, idf: &IdfTable, n: usize) -> Result<Vec<K>, Error>
where
    K: Clone,
{
    check_requested(Stage::Sentences, n, bags.len())?;

    let scored: Vec<SentenceScore<'_, K>> = bags
        .iter()
        .enumerate()
        .map(|(position, (key, bag))| {
            let mut score = 0.0;
            let mut matched = 0u64;
            for term in query.terms().filter(|term| bag.contains_term(term)) {
                score += idf.get(term).unwrap_or(0.0);
                matched += 1;
            }
            let density = match bag.term_sum() {
                0 => 0.0,
                len => matched as f64 / len as f64,
            };
            SentenceScore { key, position, score, density }
        })
        .collect();

    let Some(best) = scored.iter().map(|s| s.score).max_by(|a, b| a.total_cmp(b)) else {
        return Ok(Vec::new());
    };

    let mut bucket: Vec<SentenceScore<'_, K>> = scored.into_iter().filter(|s| s.score == best).collect();
    bucket.sort_by(|a, b| b.density.total_cmp(&a.density).then_with(|| a.position.cmp(&b.position)));

    Ok(bucket.into_iter().take(n).map(|s| s.key.clone()).collect())
}
