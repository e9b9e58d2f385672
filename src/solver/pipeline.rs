//! Query filtering and ranking
//!
//! Runs one query over a candidate pool: a parallel filter pass, then a
//! sequential sort by difficulty (hardest first) with the query mode's
//! textual tie-break.

use super::difficulty::difficulty;
use crate::core::{LetterBag, Template, Word};
use rayon::prelude::*;
use std::cmp::Ordering;

/// One puzzle query, built fresh per invocation
///
/// Containment asks which words a bag of letters can cover; pattern asks
/// which words fit a positional template.
#[derive(Debug, Clone)]
pub enum Query {
    /// Letters in hand plus a wildcard budget
    Containment {
        source: LetterBag,
        wildcards: usize,
    },
    /// Positional template with exclusions
    Pattern(Template),
}

impl Query {
    /// Whether a single candidate satisfies the query
    #[must_use]
    pub fn matches(&self, candidate: &Word) -> bool {
        match self {
            Self::Containment { source, wildcards } => {
                source.covers(candidate.letters(), *wildcards)
            }
            Self::Pattern(template) => template.matches(candidate.text()),
        }
    }

    /// Secondary ordering among equal-difficulty words
    ///
    /// Containment listings run reverse-alphabetical, pattern listings
    /// alphabetical. Both orders are load-bearing for downstream scripts.
    fn tie_break(&self, a: &Word, b: &Word) -> Ordering {
        match self {
            Self::Containment { .. } => b.text().cmp(a.text()),
            Self::Pattern(_) => a.text().cmp(b.text()),
        }
    }
}

/// Filter the pool by the query and rank the matches, hardest first
///
/// The filter pass tests candidates in parallel; each test is a pure
/// function of the query and one candidate, so evaluation order is free.
/// The sort recomputes scores during comparison, which is cheap at the
/// pool sizes involved, and falls back to the query's textual tie-break.
///
/// # Examples
/// ```
/// use wordbag::core::{LetterBag, Word};
/// use wordbag::solver::{solve, Query};
///
/// let pool = vec![Word::new("cat"), Word::new("act"), Word::new("taco")];
/// let query = Query::Containment {
///     source: LetterBag::new("cat"),
///     wildcards: 0,
/// };
///
/// let ranked = solve(&pool, &query);
/// let texts: Vec<&str> = ranked.iter().map(|w| w.text()).collect();
/// assert_eq!(texts, ["cat", "act"]); // anagrams tie, reverse-alphabetical
/// ```
#[must_use]
pub fn solve<'a>(pool: &'a [Word], query: &Query) -> Vec<&'a Word> {
    let mut matches: Vec<&Word> = pool
        .par_iter()
        .filter(|candidate| query.matches(candidate))
        .collect();

    matches.sort_by(|a, b| {
        difficulty(b.letters())
            .total_cmp(&difficulty(a.letters()))
            .then_with(|| query.tie_break(a, b))
    });

    matches
}
