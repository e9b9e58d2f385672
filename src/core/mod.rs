//! Core domain types
//!
//! The fundamental types of the matching engine: words, their letter bags,
//! and positional templates. Everything here is pure and total, with no I/O
//! and no failure modes.

mod bag;
mod template;
mod word;

pub use bag::LetterBag;
pub use template::{Template, PLACEHOLDER};
pub use word::Word;
