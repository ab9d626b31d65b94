use std::collections::HashSet;

use ahash::RandomState;
use unicode_segmentation::UnicodeSegmentation;

use crate::engine::Segmenter;

const DEFAULT_ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "mt", "gen", "rev", "capt", "lt",
    "col", "sgt",
];

/// Sentence splitter on Unicode sentence boundaries
///
/// Each line is segmented separately. A boundary right after a known
/// abbreviation ("Dr.", "Mr.", ...) is not treated as a sentence end.
#[derive(Debug, Clone)]
pub struct UnicodeSegmenter {
    abbreviations: HashSet<Box<str>, RandomState>,
}

impl UnicodeSegmenter {
    pub fn new<S, T>(abbreviations: S) -> Self
    where
        S: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        Self {
            abbreviations: abbreviations
                .into_iter()
                .map(|a| Box::from(a.as_ref().trim_end_matches('.').to_lowercase()))
                .collect(),
        }
    }

    fn ends_with_abbreviation(&self, sentence: &str) -> bool {
        let Some(stripped) = sentence.strip_suffix('.') else {
            return false;
        };
        let last = stripped
            .rsplit(char::is_whitespace)
            .next()
            .unwrap_or("")
            .trim_start_matches(|c: char| !c.is_alphanumeric());
        !last.is_empty() && self.abbreviations.contains(last.to_lowercase().as_str())
    }
}

impl Default for UnicodeSegmenter {
    fn default() -> Self {
        Self::new(DEFAULT_ABBREVIATIONS)
    }
}

fn push_trimmed(sentences: &mut Vec<String>, pending: &str) {
    let sentence = pending.trim();
    if !sentence.is_empty() {
        sentences.push(sentence.to_string());
    }
}

impl Segmenter for UnicodeSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        for line in text.lines() {
            let mut pending = String::new();
            for piece in line.split_sentence_bounds() {
                pending.push_str(piece);
                if self.ends_with_abbreviation(pending.trim_end()) {
                    continue;
                }
                push_trimmed(&mut sentences, &pending);
                pending.clear();
            }
            push_trimmed(&mut sentences, &pending);
        }
        sentences
    }
}
