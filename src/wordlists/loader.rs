//! Corpus loading
//!
//! Reads a `word,frequency` table with a header row. Column order is free and
//! extra columns are ignored.

use super::corpus::{Candidate, Corpus};
use crate::core::{Word, WordError};
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("header has no {0:?} column")]
    MissingColumn(&'static str),
    #[error("line {line}: expected at least {expected} fields")]
    MalformedRow { line: usize, expected: usize },
    #[error("line {line}: invalid word")]
    InvalidWord {
        line: usize,
        #[source]
        source: WordError,
    },
    #[error("line {line}: invalid frequency {value:?}")]
    InvalidFrequency { line: usize, value: String },
    #[error("corpus has no words")]
    Empty,
}

impl Corpus {
    /// Load a CSV table from disk; see [`load_from_file`]
    ///
    /// # Errors
    ///
    /// Fails like [`load_from_file`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CorpusError> {
        load_from_file(path)
    }

    /// Parse a CSV table held in memory; see [`parse_csv`]
    ///
    /// # Errors
    ///
    /// Fails like [`parse_csv`].
    pub fn from_csv(content: &str) -> Result<Self, CorpusError> {
        parse_csv(content)
    }
}

/// Load a corpus from a CSV file
///
/// # Errors
///
/// Returns `CorpusError::Io` if the file cannot be read, or any parse error
/// from [`parse_csv`].
///
/// # Examples
/// ```no_run
/// use wordle_alarm::wordlists::loader::load_from_file;
///
/// let corpus = load_from_file("data/wordle-answers.csv").unwrap();
/// println!("Loaded {} words", corpus.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Corpus, CorpusError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let corpus = parse_csv(&content)?;
    log::info!("Loaded {} words from {}", corpus.len(), path.display());
    Ok(corpus)
}

/// Parse a `word,frequency` table
///
/// Blank lines are skipped. A word seen twice keeps its first row.
///
/// # Errors
///
/// Returns a `CorpusError` naming the offending line (1-based) for malformed
/// rows, words that are not five letters, or non-numeric frequencies, and
/// `CorpusError::Empty` if no rows remain.
pub fn parse_csv(content: &str) -> Result<Corpus, CorpusError> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (_, header) = lines.next().ok_or(CorpusError::Empty)?;
    let header: Vec<&str> = header.split(',').map(str::trim).collect();
    let word_col = column(&header, "word")?;
    let freq_col = column(&header, "frequency")?;
    let expected = word_col.max(freq_col) + 1;

    let mut seen = FxHashSet::default();
    let mut candidates = Vec::new();

    for (line, row) in lines {
        let fields: Vec<&str> = row.split(',').map(str::trim).collect();
        if fields.len() < expected {
            return Err(CorpusError::MalformedRow { line, expected });
        }

        let word =
            Word::new(fields[word_col]).map_err(|source| CorpusError::InvalidWord { line, source })?;

        let value = fields[freq_col];
        let frequency: f64 = value
            .parse()
            .ok()
            .filter(|f: &f64| f.is_finite())
            .ok_or_else(|| CorpusError::InvalidFrequency {
                line,
                value: value.to_string(),
            })?;

        if !seen.insert(word.text().to_string()) {
            log::warn!("line {line}: duplicate word '{word}' ignored");
            continue;
        }
        candidates.push(Candidate::new(word, frequency));
    }

    if candidates.is_empty() {
        return Err(CorpusError::Empty);
    }

    Ok(Corpus::new(candidates))
}

fn column(header: &[&str], name: &'static str) -> Result<usize, CorpusError> {
    header
        .iter()
        .position(|h| h.eq_ignore_ascii_case(name))
        .ok_or(CorpusError::MissingColumn(name))
}
