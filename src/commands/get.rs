//! Containment query command
//!
//! Translates the `get` argument, a bag of letters with an optional leading
//! wildcard count such as `2/aeprst`, and runs the containment query.

use crate::core::{LetterBag, Word};
use crate::solver::{solve, Query};

/// Run a containment query over the pool
///
/// # Errors
/// Returns a usage message if the wildcard prefix is present but is not a
/// non-negative integer.
pub fn run_get<'a>(pool: &'a [Word], spec: &str) -> Result<Vec<&'a Word>, String> {
    let (wildcards, source) = parse_bag_spec(spec)?;
    Ok(solve(pool, &Query::Containment { source, wildcards }))
}

/// Split `[count/]letters` into a wildcard budget and a letter bag
///
/// Only the first `/` separates; everything after it feeds the bag, which
/// drops non-letters itself.
fn parse_bag_spec(spec: &str) -> Result<(usize, LetterBag), String> {
    match spec.split_once('/') {
        None => Ok((0, LetterBag::new(spec))),
        Some((count, letters)) => {
            let wildcards = count
                .parse::<usize>()
                .map_err(|_| format!("'{count}' is not a wildcard count; try `get 2/aeprst`"))?;
            Ok((wildcards, LetterBag::new(letters)))
        }
    }
}
