// std imports
use std::{cmp::Ordering, sync::Arc};

// third-party imports
use itertools::Itertools;

// ---

const MIN_RELEVANCE: f64 = 0.75;
const MAX_SUGGESTIONS: usize = 3;

/// Known names that look similar to a wanted one, most relevant first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Suggestions {
    candidates: Vec<Arc<str>>,
}

impl Suggestions {
    pub fn new<T, I>(wanted: &str, variants: I) -> Self
    where
        T: Into<Arc<str>>,
        I: IntoIterator<Item = T>,
    {
        let candidates = variants
            .into_iter()
            .map(Into::into)
            .unique()
            .map(|variant| (strsim::jaro_winkler(wanted, &variant), variant))
            .filter(|(relevance, _)| *relevance > MIN_RELEVANCE)
            .sorted_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal).then_with(|| a.1.cmp(&b.1)))
            .take(MAX_SUGGESTIONS)
            .map(|(_, variant)| variant)
            .collect();

        Self { candidates }
    }

    #[cfg(test)]
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.candidates.iter().map(|candidate| candidate.as_ref())
    }
}
