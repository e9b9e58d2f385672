//! Word difficulty scoring
//!
//! Ranks words by how hard they are to guess from partial knowledge. Every
//! letter contributes `weight / count`, so repeated letters make a word
//! easier (one revealed occurrence gives away the rest) and consonants
//! weigh more than vowels.

use crate::core::LetterBag;

/// Weight of the five vowels
const VOWEL_WEIGHT: f64 = 1.0;
/// Weight of every other letter
const CONSONANT_WEIGHT: f64 = 1.5;

/// Difficulty score for a bag of letters; higher is harder
///
/// Anagrams share a bag and therefore a score, so orderings built on this
/// need a textual tie-break to become total.
///
/// # Examples
/// ```
/// use wordbag::core::LetterBag;
/// use wordbag::solver::difficulty;
///
/// let rhythm = difficulty(&LetterBag::new("rhythm"));
/// let oboe = difficulty(&LetterBag::new("oboe"));
/// assert!(rhythm > oboe);
/// ```
#[must_use]
pub fn difficulty(letters: &LetterBag) -> f64 {
    letters
        .iter()
        .map(|(letter, count)| letter_weight(letter) / f64::from(count))
        .sum()
}

/// Per-letter weight: vowels are cheap, everything else is not
#[must_use]
pub fn letter_weight(letter: char) -> f64 {
    if matches!(letter, 'a' | 'e' | 'i' | 'o' | 'u') {
        VOWEL_WEIGHT
    } else {
        CONSONANT_WEIGHT
    }
}
