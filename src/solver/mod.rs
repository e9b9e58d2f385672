//! Matching and ranking engine
//!
//! Pure query evaluation over an in-memory candidate pool: filter in
//! parallel, score, sort.

mod difficulty;
mod pipeline;

pub use difficulty::{difficulty, letter_weight};
pub use pipeline::{solve, Query};
