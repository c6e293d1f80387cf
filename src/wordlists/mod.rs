//! Answer corpus for Wordle solving
//!
//! The bundled table is compiled into the binary; other tables can be loaded
//! from CSV at startup.

mod corpus;
mod embedded;
pub mod loader;

pub use corpus::{Candidate, Corpus};
pub(crate) use corpus::by_frequency_desc;
pub use embedded::{ANSWERS, ANSWERS_COUNT};
pub use loader::CorpusError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn answers_are_valid_words() {
        for &(word, frequency) in ANSWERS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
            assert!(frequency.is_finite(), "Word '{word}' has no usable score");
        }
    }

    #[test]
    fn answers_include_opening_guess() {
        assert!(ANSWERS.iter().any(|&(word, _)| word == "trace"));
    }
}
