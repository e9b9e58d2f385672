//! Terminal output formatting

pub mod display;

pub use display::{
    print_scored_words, print_usage_hint, print_words, scored_line, write_scored_words,
    write_words,
};
