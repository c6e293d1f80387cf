//! Candidate corpus
//!
//! The read-only list of answer words with their frequency scores.

use super::embedded::ANSWERS;
use crate::core::Word;
use std::cmp::Ordering;

/// A possible answer and its static usage-frequency score
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    word: Word,
    frequency: f64,
}

impl Candidate {
    #[must_use]
    pub const fn new(word: Word, frequency: f64) -> Self {
        Self { word, frequency }
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn frequency(&self) -> f64 {
        self.frequency
    }
}

/// Descending by frequency; equal scores compare equal so stable sorts keep input order
pub(crate) fn by_frequency_desc(a: &Candidate, b: &Candidate) -> Ordering {
    b.frequency.total_cmp(&a.frequency)
}

/// Read-only table of candidates, kept in descending frequency order
///
/// Built once at startup and shared by reference; it is never mutated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Corpus {
    candidates: Vec<Candidate>,
}

impl Corpus {
    /// Build a corpus; candidates are stably sorted by descending frequency,
    /// so equal scores keep the order given here
    #[must_use]
    pub fn new(mut candidates: Vec<Candidate>) -> Self {
        candidates.sort_by(by_frequency_desc);
        Self { candidates }
    }

    /// The table bundled with the binary
    ///
    /// # Examples
    /// ```
    /// use wordle_alarm::wordlists::Corpus;
    ///
    /// let corpus = Corpus::embedded();
    /// assert!(corpus.contains("trace"));
    /// ```
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_pairs(ANSWERS)
    }

    /// Build from `(word, frequency)` pairs, skipping invalid words
    #[must_use]
    pub fn from_pairs(pairs: &[(&str, f64)]) -> Self {
        let candidates = pairs
            .iter()
            .filter_map(|&(text, frequency)| {
                Word::new(text)
                    .ok()
                    .map(|word| Candidate::new(word, frequency))
            })
            .collect();
        Self::new(candidates)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.candidates.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Look up a word (case-insensitive)
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Candidate> {
        let text = text.trim().to_lowercase();
        self.candidates.iter().find(|c| c.word.text() == text)
    }

    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.get(text).is_some()
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}
