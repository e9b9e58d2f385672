//! Candidate pool sources
//!
//! The pool comes from a directory of plain-text word lists, or from an
//! input stream when a command supplies its own candidates.

pub mod loader;

pub use loader::{load_dir, read_until_blank, words_from_lines};
