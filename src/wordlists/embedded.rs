//! Embedded answer corpus
//!
//! Compiled into the binary at build time from `data/wordle-answers.csv`.

// Include generated table from build script
include!(concat!(env!("OUT_DIR"), "/answers.rs"));
