use std::fmt;
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::{
    config::RetrievalConfig,
    engine::{Normalizer, Segmenter, StopwordNormalizer, UnicodeSegmenter},
    loader::RawCorpus,
    vectorizer::{evaluate::{query::Query, scoring::Hits}, term::TermFrequency, Bags, TFIDFVectorizer},
    Error,
};

/// Result of one query
#[derive(Debug, Clone)]
pub struct Answer {
    pub query: Query,
    /// Selected documents with their TF-IDF scores, best first
    pub documents: Hits<String>,
    /// Best sentences of the selected documents, empty when none qualified
    pub sentences: Vec<String>,
}

impl Answer {
    /// true when no sentence could be extracted
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sentences.is_empty() {
            return f.write_str("no answer found");
        }
        for (i, sentence) in self.sentences.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(sentence)?;
        }
        Ok(())
    }
}

/// Answers queries against a fixed corpus
///
/// The document bags and their IDF table are built once in `new`; each query
/// then builds its own sentence bags and sentence IDF table from the selected
/// documents only.
pub struct Answerer<N = StopwordNormalizer, S = UnicodeSegmenter> {
    texts: RawCorpus,
    index: TFIDFVectorizer<String>,
    normalizer: N,
    segmenter: S,
    retrieval: RetrievalConfig,
}

impl Answerer {
    /// Answerer with the English normalizer and Unicode segmenter
    pub fn english(texts: RawCorpus, retrieval: RetrievalConfig) -> Result<Self, Error> {
        Self::new(texts, StopwordNormalizer::english(), UnicodeSegmenter::default(), retrieval)
    }
}

impl<N, S> Answerer<N, S>
where
    N: Normalizer,
    S: Segmenter,
{
    /// Normalize every document and compute the document IDF table
    ///
    /// Fails with `Error::EmptyCollection` when `texts` is empty.
    pub fn new(texts: RawCorpus, normalizer: N, segmenter: S, retrieval: RetrievalConfig) -> Result<Self, Error> {
        let start = Instant::now();
        let entries: Vec<(&String, &String)> = texts.iter().collect();
        let bags: Bags<String> = entries
            .par_iter()
            .map(|(name, text)| (name.to_string(), TermFrequency::from(normalizer.normalize(text))))
            .collect::<Vec<_>>()
            .into_iter()
            .collect();
        let index: TFIDFVectorizer<String> = TFIDFVectorizer::from_bags(bags)?;
        info!(
            documents = index.doc_num(),
            vocabulary = index.idf().len(),
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "corpus indexed"
        );
        Ok(Self {
            texts,
            index,
            normalizer,
            segmenter,
            retrieval,
        })
    }

    #[inline]
    pub fn index(&self) -> &TFIDFVectorizer<String> {
        &self.index
    }

    #[inline]
    pub fn retrieval(&self) -> RetrievalConfig {
        self.retrieval
    }

    /// Normalize the text and answer it
    pub fn answer(&self, text: &str) -> Result<Answer, Error> {
        self.answer_query(Query::parse(text, &self.normalizer))
    }

    /// Rank documents, then extract the best sentences from the selected ones
    pub fn answer_query(&self, query: Query) -> Result<Answer, Error> {
        let start = Instant::now();
        let documents = self.index.rank_documents(&query, self.retrieval.file_matches)?;
        debug!(query = %query, documents = ?documents, "documents ranked");

        let bags = self.sentence_bags(documents.keys());
        let sentence_num = bags.len();
        let sentence_index: Result<TFIDFVectorizer<String>, Error> = TFIDFVectorizer::from_bags(bags);
        let sentences = match sentence_index {
            Ok(sentence_index) => sentence_index.top_sentences(&query, self.retrieval.sentence_matches)?,
            Err(Error::EmptyCollection) => {
                debug!(query = %query, "selected documents contain no usable sentence");
                Vec::new()
            }
            Err(e) => return Err(e),
        };
        debug!(
            query = %query,
            candidates = sentence_num,
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "sentences ranked"
        );

        Ok(Answer {
            query,
            documents,
            sentences,
        })
    }

    /// Sentence bags of the named documents; sentences without tokens are dropped
    fn sentence_bags<'a, I>(&self, names: I) -> Bags<String>
    where
        I: IntoIterator<Item = &'a String>,
    {
        let mut bags = Bags::default();
        for name in names {
            let Some(text) = self.texts.get(name) else {
                continue;
            };
            for sentence in self.segmenter.segment(text) {
                let tokens = self.normalizer.normalize(&sentence);
                if tokens.is_empty() {
                    continue;
                }
                bags.insert(sentence, TermFrequency::from(tokens));
            }
        }
        bags
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Stage;

    fn corpus(entries: &[(&str, &str)]) -> RawCorpus {
        entries
            .iter()
            .map(|(name, text)| (name.to_string(), text.to_string()))
            .collect()
    }

    fn answerer(entries: &[(&str, &str)], file_matches: usize, sentence_matches: usize) -> Answerer {
        Answerer::english(corpus(entries), RetrievalConfig { file_matches, sentence_matches }).unwrap()
    }

    #[test]
    fn single_document_answer() {
        let answerer = answerer(&[("a.txt", "The cat sat. The dog ran.")], 1, 1);
        let answer = answerer.answer("cat").unwrap();
        assert_eq!(answer.documents.keys().collect::<Vec<_>>(), vec!["a.txt"]);
        assert_eq!(answer.sentences, vec!["The cat sat."]);
        assert_eq!(answer.to_string(), "The cat sat.");
    }

    #[test]
    fn frequent_term_document_selected() {
        let answerer = answerer(
            &[
                ("one.txt", "rust ocean river lake pond sea"),
                ("five.txt", "rust rust rust rust rust sea"),
                ("other.txt", "tree leaf"),
            ],
            1,
            1,
        );
        let answer = answerer.answer("Rust?").unwrap();
        assert_eq!(answer.documents.keys().collect::<Vec<_>>(), vec!["five.txt"]);
    }

    #[test]
    fn too_many_documents_requested() {
        let answerer = answerer(&[("a.txt", "cats"), ("b.txt", "dogs")], 5, 1);
        let err = answerer.answer("cats").unwrap_err();
        assert_eq!(
            err,
            Error::Configuration { stage: Stage::Documents, requested: 5, available: 2 }
        );
    }

    #[test]
    fn stopword_only_sentences_are_discarded() {
        let answerer = answerer(&[("a.txt", "The cat sat. And then? The dog ran.")], 1, 1);
        let bags = answerer.sentence_bags([&"a.txt".to_string()]);
        assert_eq!(bags.keys().collect::<Vec<_>>(), vec!["The cat sat.", "The dog ran."]);
    }

    #[test]
    fn document_without_sentences_gives_no_answer() {
        let answerer = answerer(&[("a.txt", "The. And."), ("b.txt", "Cats purr.")], 1, 1);
        let answer = answerer.answer("unicorn").unwrap();
        assert_eq!(answer.documents.keys().collect::<Vec<_>>(), vec!["a.txt"]);
        assert!(answer.is_empty());
        assert_eq!(answer.to_string(), "no answer found");
    }

    #[test]
    fn density_picks_shorter_sentence_on_tie() {
        let answerer = answerer(&[("a.txt", "The cat sat on the mat quietly today. The cat sat.")], 1, 1);
        let answer = answerer.answer("cat").unwrap();
        assert_eq!(answer.sentences, vec!["The cat sat."]);
    }

    #[test]
    fn sentences_come_from_every_selected_document() {
        let answerer = answerer(
            &[
                ("a.txt", "Cats purr loudly. Fish swim."),
                ("b.txt", "Cats purr softly. Birds fly."),
                ("c.txt", "Trees grow."),
            ],
            2,
            2,
        );
        let answer = answerer.answer("cats purr").unwrap();
        assert_eq!(answer.documents.len(), 2);
        assert_eq!(answer.sentences, vec!["Cats purr loudly.", "Cats purr softly."]);
    }

    #[test]
    fn too_many_sentences_requested() {
        let answerer = answerer(&[("a.txt", "Cats purr.")], 1, 3);
        let err = answerer.answer("cats").unwrap_err();
        assert_eq!(
            err,
            Error::Configuration { stage: Stage::Sentences, requested: 3, available: 1 }
        );
    }

    #[test]
    fn keeps_configured_counts() {
        let answerer = answerer(&[("a.txt", "Cats purr."), ("b.txt", "Dogs bark.")], 2, 1);
        assert_eq!(answerer.retrieval(), RetrievalConfig { file_matches: 2, sentence_matches: 1 });
    }

    #[test]
    fn empty_corpus_rejected() {
        let err = Answerer::english(RawCorpus::new(), RetrievalConfig::default()).err();
        assert_eq!(err, Some(Error::EmptyCollection));
    }

    #[test]
    fn answers_are_independent_across_threads() {
        let answerer = answerer(
            &[("a.txt", "The cat sat. The dog ran."), ("b.txt", "Birds fly south.")],
            1,
            1,
        );
        std::thread::scope(|s| {
            let cat = s.spawn(|| answerer.answer("cat").unwrap());
            let birds = s.spawn(|| answerer.answer("birds").unwrap());
            assert_eq!(cat.join().unwrap().sentences, vec!["The cat sat."]);
            assert_eq!(birds.join().unwrap().sentences, vec!["Birds fly south."]);
        });
    }
}
