//! Candidate word representation
//!
//! A `Word` pairs normalized text with its letter bag, built once at load
//! time so every query reuses the same counts.

use super::LetterBag;
use std::fmt;

/// A candidate word: lowercase text plus its precomputed letter bag
///
/// Construction never fails; any text is a valid word. Length limits and
/// deduplication are the loader's business, not this type's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: LetterBag,
}

impl Word {
    /// Create a word, normalizing the text to lowercase
    ///
    /// # Examples
    /// ```
    /// use wordbag::core::Word;
    ///
    /// let word = Word::new("Crate");
    /// assert_eq!(word.text(), "crate");
    /// assert_eq!(word.letters().count('c'), 1);
    /// ```
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into().to_lowercase();
        let letters = LetterBag::new(&text);
        Self { text, letters }
    }

    /// The normalized text
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The word's letter bag
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &LetterBag {
        &self.letters
    }

    /// Length in characters, not bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether the text is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
