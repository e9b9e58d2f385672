//! Word pool loading
//!
//! Builds the candidate pool from a directory of word-list files or from an
//! interactive stream, normalizing and deduplicating the words and applying
//! the configured length limits.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

/// Build a pool from raw lines
///
/// Lines are trimmed and blank lines skipped; the survivors become
/// lowercase words. Words outside `min_len..=max_len` characters are
/// dropped, and a word seen twice (case-insensitively) keeps only its first
/// occurrence, so the pool preserves load order.
#[must_use]
pub fn words_from_lines<I, S>(lines: I, min_len: usize, max_len: usize) -> Vec<Word>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut pool = Vec::new();

    for line in lines {
        let trimmed = line.as_ref().trim();
        if trimmed.is_empty() {
            continue;
        }
        let word = Word::new(trimmed);
        if !(min_len..=max_len).contains(&word.len()) {
            continue;
        }
        if seen.insert(word.text().to_owned()) {
            pool.push(word);
        }
    }

    pool
}

/// Load the pool from every file in a directory
///
/// Files are read in file-name order, one word per non-blank line, and the
/// combined lines go through [`words_from_lines`].
///
/// # Errors
/// Returns an I/O error if the directory does not exist or any file in it
/// cannot be read.
pub fn load_dir(dir: &Path, min_len: usize, max_len: usize) -> io::Result<Vec<Word>> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .collect::<io::Result<Vec<_>>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    paths.sort();

    let mut lines = Vec::new();
    for path in paths {
        let content = fs::read_to_string(&path)?;
        lines.extend(content.lines().map(str::to_owned));
    }

    Ok(words_from_lines(lines, min_len, max_len))
}

/// Read a replacement pool from an interactive stream
///
/// Consumes lines until the first blank line or end of input, then builds
/// the pool from what came before.
///
/// # Errors
/// Returns an I/O error if reading from the stream fails.
pub fn read_until_blank<R: BufRead>(
    input: R,
    min_len: usize,
    max_len: usize,
) -> io::Result<Vec<Word>> {
    let mut lines = Vec::new();
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }
        lines.push(line);
    }
    Ok(words_from_lines(lines, min_len, max_len))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn texts(pool: &[Word]) -> Vec<&str> {
        pool.iter().map(Word::text).collect()
    }

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("wordbag-{tag}-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn first_occurrence_wins_and_order_is_preserved() {
        let pool = words_from_lines(["CAT", "dog", "cat", "Dog", "emu"], 1, 10);
        assert_eq!(texts(&pool), ["cat", "dog", "emu"]);
    }

    #[test]
    fn blank_and_padded_lines_are_handled() {
        let pool = words_from_lines(["  cat  ", "", "   ", "dog"], 1, 10);
        assert_eq!(texts(&pool), ["cat", "dog"]);
    }

    #[test]
    fn length_limits_are_inclusive() {
        let pool = words_from_lines(["a", "ab", "abc", "abcd"], 2, 3);
        assert_eq!(texts(&pool), ["ab", "abc"]);
    }

    #[test]
    fn load_dir_missing_directory_is_an_error() {
        let missing = Path::new("/nonexistent/wordbag-test-pool");
        assert!(load_dir(missing, 1, 10).is_err());
    }

    #[test]
    fn load_dir_reads_files_in_name_order_and_dedups_across_them() {
        let dir = scratch_dir("loader");
        fs::write(dir.join("b.txt"), "zebra\nquail\n").unwrap();
        fs::write(dir.join("a.txt"), "apple\nzebra\n").unwrap();

        let pool = load_dir(&dir, 3, 12).unwrap();
        assert_eq!(texts(&pool), ["apple", "zebra", "quail"]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn read_until_blank_stops_at_the_first_blank_line() {
        let input = Cursor::new("cat\ndog\n\nrat\n");
        let pool = read_until_blank(input, 1, 10).unwrap();
        assert_eq!(texts(&pool), ["cat", "dog"]);
    }

    #[test]
    fn read_until_blank_accepts_end_of_input() {
        let input = Cursor::new("rat");
        let pool = read_until_blank(input, 1, 10).unwrap();
        assert_eq!(texts(&pool), ["rat"]);
    }

    #[test]
    fn read_until_blank_applies_length_limits() {
        let input = Cursor::new("at\nbat\nhouses\n");
        let pool = read_until_blank(input, 3, 5).unwrap();
        assert_eq!(texts(&pool), ["bat"]);
    }
}
