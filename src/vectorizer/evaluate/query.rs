use std::fmt;

use crate::engine::Normalizer;

/// Deduplicated set of normalized query terms, kept sorted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    terms: Vec<Box<str>>,
}

impl Query {
    /// Build a query from already normalized terms
    pub fn from_terms<I, T>(terms: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut terms: Vec<Box<str>> = terms.into_iter().map(|t| Box::from(t.as_ref())).collect();
        terms.sort_unstable();
        terms.dedup();
        Self { terms }
    }

    /// Normalize free text into a query
    pub fn parse<N: Normalizer + ?Sized>(text: &str, normalizer: &N) -> Self {
        Self::from_terms(normalizer.normalize(text))
    }

    #[inline]
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|t| &**t)
    }

    #[inline]
    pub fn contains(&self, term: &str) -> bool {
        self.terms.binary_search_by(|t| (**t).cmp(term)).is_ok()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(term)?;
        }
        Ok(())
    }
}
