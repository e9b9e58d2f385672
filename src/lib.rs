//! Word Bag
//!
//! A dictionary-backed word puzzle helper. Finds the words a bag of letters
//! can cover (with an optional wildcard budget) and the words that fit a
//! partially revealed positional pattern, ranked hardest-first by a
//! letter-based difficulty score.
//!
//! # Quick Start
//!
//! ```rust
//! use wordbag::core::{Template, Word};
//! use wordbag::solver::{solve, Query};
//!
//! let pool = vec![Word::new("bat"), Word::new("cat"), Word::new("hat")];
//!
//! // Which words fit `.at` when b was already tried and rejected?
//! let query = Query::Pattern(Template::parse(".at", "b"));
//! let hits = solve(&pool, &query);
//!
//! let texts: Vec<&str> = hits.iter().map(|w| w.text()).collect();
//! assert_eq!(texts, ["cat", "hat"]);
//! ```

// Core domain types
pub mod core;

// Matching and ranking engine
pub mod solver;

// Candidate pool sources
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
