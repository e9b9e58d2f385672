//! Display functions for command results
//!
//! Result words go to stdout one per line, in ranked order, so the output
//! stays pipeable into `filter`. Hints and diagnostics go to stderr. A
//! reader that hangs up mid-listing (a closed pipe under `head`) ends the
//! listing quietly instead of failing the run.

use crate::core::Word;
use crate::solver::difficulty;
use colored::Colorize;
use std::io::{self, Write};

/// Print words one per line, in the order received
pub fn print_words<'a, I>(words: I)
where
    I: IntoIterator<Item = &'a Word>,
{
    report_write_error(write_words(&mut io::stdout().lock(), words));
}

/// Print words with their difficulty scores
pub fn print_scored_words<'a, I>(words: I)
where
    I: IntoIterator<Item = &'a Word>,
{
    report_write_error(write_scored_words(&mut io::stdout().lock(), words));
}

/// Write words one per line, in the order received
///
/// # Errors
/// Returns an I/O error when the writer rejects a line, including
/// `BrokenPipe` when the reader stops listening early.
pub fn write_words<'a, W, I>(out: &mut W, words: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Word>,
{
    for word in words {
        writeln!(out, "{word}")?;
    }
    Ok(())
}

/// Write words with their difficulty scores
///
/// # Errors
/// Returns an I/O error when the writer rejects a line.
pub fn write_scored_words<'a, W, I>(out: &mut W, words: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Word>,
{
    for word in words {
        writeln!(out, "{}", scored_line(word))?;
    }
    Ok(())
}

/// Format one word with its score, score first for easy scanning
#[must_use]
pub fn scored_line(word: &Word) -> String {
    format!("{:>7.3}  {}", difficulty(word.letters()), word)
}

/// Print a short usage hint without failing the run
pub fn print_usage_hint(hint: &str) {
    eprintln!("{}", hint.yellow());
}

/// Stay quiet on a closed pipe, note anything else on stderr
fn report_write_error(result: io::Result<()>) {
    if let Err(err) = result {
        if err.kind() != io::ErrorKind::BrokenPipe {
            eprintln!("could not write results: {err}");
        }
    }
}
