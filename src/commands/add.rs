//! Dictionary append command
//!
//! New words are appended verbatim to the ad-hoc list inside the word
//! directory; the loader picks them up on the next run. No validation
//! happens here, the loader's normalization and length limits apply at
//! read time.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// File that collects manually added words
pub const ADHOC_FILE: &str = "ad-hoc.txt";

/// Append words, one per line, to the ad-hoc list
///
/// Creates the file on first use.
///
/// # Errors
/// Returns an I/O error if the file cannot be opened or written.
pub fn run_add(words_dir: &Path, words: &[String]) -> io::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(words_dir.join(ADHOC_FILE))?;

    for word in words {
        writeln!(file, "{word}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_dir() -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("wordbag-add-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn appends_words_verbatim_across_calls() {
        let dir = scratch_dir();

        run_add(&dir, &["Zed".to_owned(), "qi!".to_owned()]).unwrap();
        run_add(&dir, &["emu".to_owned()]).unwrap();

        let content = fs::read_to_string(dir.join(ADHOC_FILE)).unwrap();
        assert_eq!(content, "Zed\nqi!\nemu\n");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_directory_is_an_error() {
        let missing = Path::new("/nonexistent/wordbag-add-pool");
        assert!(run_add(missing, &["cat".to_owned()]).is_err());
    }
}
