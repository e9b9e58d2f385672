//! Pattern query command
//!
//! Translates the `query` arguments into a template and runs the positional
//! query. Leading slashes on the pattern are an input convention carried
//! over from the bare-invocation syntax, not pattern content, and are
//! stripped here.

use crate::core::{Template, Word};
use crate::solver::{solve, Query};

/// Run a positional pattern query over the pool
#[must_use]
pub fn run_query<'a>(
    pool: &'a [Word],
    pattern: &str,
    extra_excluded: Option<&str>,
) -> Vec<&'a Word> {
    let template = Template::parse(
        pattern.trim_start_matches('/'),
        extra_excluded.unwrap_or(""),
    );
    solve(pool, &Query::Pattern(template))
}
