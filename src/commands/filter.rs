//! Chained pattern query command
//!
//! Same matching as `query`, but the candidate pool is read from standard
//! input (until a blank line) instead of the configured word directory, so
//! one invocation's output can feed the next.

use super::query::run_query;
use crate::core::Word;
use crate::wordlists::read_until_blank;
use std::io::{self, BufRead};

/// Read a replacement pool from `input`, then run the pattern query
///
/// Returns owned words because the pool lives only for this call.
///
/// # Errors
/// Returns an I/O error if reading the input stream fails.
pub fn run_filter<R: BufRead>(
    input: R,
    pattern: &str,
    extra_excluded: Option<&str>,
    min_len: usize,
    max_len: usize,
) -> io::Result<Vec<Word>> {
    let pool = read_until_blank(input, min_len, max_len)?;
    let matches = run_query(&pool, pattern, extra_excluded);
    Ok(matches.into_iter().cloned().collect())
}
