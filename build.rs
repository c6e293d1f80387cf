//! Build script to embed the answer corpus
//!
//! Reads the `word,frequency` table and generates Rust source with a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const CORPUS_PATH: &str = "data/wordle-answers.csv";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_corpus(
        CORPUS_PATH,
        &Path::new(&out_dir).join("answers.rs"),
        "ANSWERS",
        "Bundled answer words with usage frequency scores",
    );

    // Rebuild if the table changes
    println!("cargo:rerun-if-changed={CORPUS_PATH}");
}

fn generate_corpus(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let mut lines = content.lines().filter(|line| !line.trim().is_empty());
    let header: Vec<&str> = lines
        .next()
        .unwrap_or_else(|| panic!("{input_path} is empty"))
        .split(',')
        .map(str::trim)
        .collect();
    let word_col = column(&header, "word", input_path);
    let freq_col = column(&header, "frequency", input_path);

    let mut rows = Vec::new();
    for (n, line) in lines.enumerate() {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let word = fields
            .get(word_col)
            .unwrap_or_else(|| panic!("{input_path}: row {} has no word", n + 2));
        let frequency: f64 = fields
            .get(freq_col)
            .and_then(|f| f.parse().ok())
            .unwrap_or_else(|| panic!("{input_path}: row {} has no valid frequency", n + 2));

        assert!(
            word.len() == 5 && word.chars().all(|c| c.is_ascii_alphabetic()),
            "{input_path}: '{word}' is not a 5-letter word"
        );
        rows.push((word.to_ascii_lowercase(), frequency));
    }

    let count = rows.len();
    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated corpus").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, f64)] = &[").unwrap();

    for (word, frequency) in rows {
        writeln!(output, "    (\"{word}\", {frequency:?}),").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of rows in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}

fn column(header: &[&str], name: &str, input_path: &str) -> usize {
    header
        .iter()
        .position(|h| h.eq_ignore_ascii_case(name))
        .unwrap_or_else(|| panic!("{input_path}: header has no '{name}' column"))
}
