//! Letter multiset representation
//!
//! A `LetterBag` records how many times each letter occurs in a piece of
//! text, ignoring position. Both matching modes rest on it: containment
//! compares bags directly, and pattern matching feeds literal letters into
//! its exclusion set.

use rustc_hash::FxHashMap;

/// Multiset of letters: each letter mapped to its occurrence count
///
/// Counts are case-folded and cover alphabetic characters only; digits and
/// punctuation never enter the bag. Built once per word, never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterBag {
    counts: FxHashMap<char, u32>,
}

impl LetterBag {
    /// Build a bag from arbitrary text
    ///
    /// Case-folds the text and counts its alphabetic characters. Any input,
    /// including the empty string, produces a valid bag.
    ///
    /// # Examples
    /// ```
    /// use wordbag::core::LetterBag;
    ///
    /// let bag = LetterBag::new("Banana!");
    /// assert_eq!(bag.count('a'), 3);
    /// assert_eq!(bag.count('n'), 2);
    /// assert_eq!(bag.count('!'), 0); // punctuation is skipped
    /// ```
    #[must_use]
    pub fn new(text: &str) -> Self {
        let mut counts = FxHashMap::default();
        for c in text.to_lowercase().chars() {
            if c.is_alphabetic() {
                *counts.entry(c).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    /// Occurrences of a letter, 0 if absent
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> u32 {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Number of distinct letters in the bag
    #[inline]
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Total number of letters counted, repeats included
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    /// Whether the bag holds no letters at all
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over (letter, count) pairs, in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (char, u32)> + '_ {
        self.counts.iter().map(|(&letter, &count)| (letter, count))
    }

    /// Exact sub-multiset containment
    ///
    /// True when every letter of `candidate` is present here with at least
    /// the candidate's count. Equivalent to `covers(candidate, 0)`.
    ///
    /// # Examples
    /// ```
    /// use wordbag::core::LetterBag;
    ///
    /// let rack = LetterBag::new("taber");
    /// assert!(rack.contains(&LetterBag::new("bat")));
    /// assert!(!rack.contains(&LetterBag::new("batt"))); // only one t in the rack
    /// ```
    #[must_use]
    pub fn contains(&self, candidate: &Self) -> bool {
        self.covers(candidate, 0)
    }

    /// Sub-multiset containment with a wildcard budget
    ///
    /// Every candidate letter must be present with at least its count, or
    /// be paid for out of `wildcards`. Each failing letter-key costs exactly
    /// one wildcard no matter how large its count shortfall; the match fails
    /// as soon as the failing keys outnumber the remaining budget.
    ///
    /// # Examples
    /// ```
    /// use wordbag::core::LetterBag;
    ///
    /// let rack = LetterBag::new("cat");
    /// // b is the one letter the rack cannot supply
    /// assert!(!rack.covers(&LetterBag::new("bat"), 0));
    /// assert!(rack.covers(&LetterBag::new("bat"), 1));
    /// ```
    #[must_use]
    pub fn covers(&self, candidate: &Self, wildcards: usize) -> bool {
        let mut budget = wildcards;
        for (letter, needed) in candidate.iter() {
            if self.count(letter) >= needed {
                continue;
            }
            if budget == 0 {
                return false;
            }
            budget -= 1;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_case_folded_letters() {
        let bag = LetterBag::new("Speed");
        assert_eq!(bag.count('s'), 1);
        assert_eq!(bag.count('p'), 1);
        assert_eq!(bag.count('e'), 2);
        assert_eq!(bag.count('d'), 1);
        assert_eq!(bag.count('z'), 0);
    }

    #[test]
    fn skips_non_alphabetic() {
        let bag = LetterBag::new("ba-na2na!");
        assert_eq!(bag.count('b'), 1);
        assert_eq!(bag.count('a'), 3);
        assert_eq!(bag.count('n'), 2);
        assert_eq!(bag.count('-'), 0);
        assert_eq!(bag.count('2'), 0);
        assert_eq!(bag.total(), 6);
        assert_eq!(bag.distinct(), 3);
    }

    #[test]
    fn empty_text_gives_empty_bag() {
        let bag = LetterBag::new("");
        assert!(bag.is_empty());
        assert_eq!(bag.total(), 0);
        assert_eq!(bag.distinct(), 0);
    }

    #[test]
    fn anagrams_build_equal_bags() {
        assert_eq!(LetterBag::new("listen"), LetterBag::new("silent"));
        assert_eq!(LetterBag::new("CAT"), LetterBag::new("act"));
        assert_ne!(LetterBag::new("cat"), LetterBag::new("cats"));
    }

    #[test]
    fn contains_is_reflexive() {
        for text in ["cat", "banana", "", "aaaa"] {
            let bag = LetterBag::new(text);
            assert!(bag.contains(&bag));
        }
    }

    #[test]
    fn contains_is_transitive() {
        let chains = [("at", "cat", "catty"), ("an", "nan", "banana"), ("", "ox", "oxbow")];

        for (small, mid, large) in chains {
            let small_bag = LetterBag::new(small);
            let mid_bag = LetterBag::new(mid);
            let large_bag = LetterBag::new(large);

            assert!(mid_bag.contains(&small_bag));
            assert!(large_bag.contains(&mid_bag));
            assert!(
                large_bag.contains(&small_bag),
                "'{large}' should contain '{small}' through '{mid}'"
            );
        }
    }

    #[test]
    fn contains_respects_counts() {
        let rack = LetterBag::new("cat");
        assert!(rack.contains(&LetterBag::new("at")));
        assert!(rack.contains(&LetterBag::new("tac")));
        assert!(!rack.contains(&LetterBag::new("att"))); // needs two t
        assert!(!rack.contains(&LetterBag::new("cab"))); // b absent
    }

    #[test]
    fn contains_always_holds_for_empty_candidate() {
        assert!(LetterBag::new("cat").contains(&LetterBag::new("")));
        assert!(LetterBag::new("").contains(&LetterBag::new("")));
        assert!(!LetterBag::new("").contains(&LetterBag::new("a")));
    }

    #[test]
    fn covers_spends_one_wildcard_per_letter_key() {
        // Three missing instances of a single letter still cost one wildcard.
        let rack = LetterBag::new("b");
        let candidate = LetterBag::new("aaa");
        assert!(!rack.covers(&candidate, 0));
        assert!(rack.covers(&candidate, 1));
    }

    #[test]
    fn covers_spends_a_wildcard_on_count_shortfall() {
        // The letter is present but short one occurrence.
        let rack = LetterBag::new("a");
        let candidate = LetterBag::new("aa");
        assert!(!rack.covers(&candidate, 0));
        assert!(rack.covers(&candidate, 1));
    }

    #[test]
    fn covers_fails_when_failing_keys_exceed_budget() {
        let rack = LetterBag::new("");
        let candidate = LetterBag::new("xyz");
        assert!(!rack.covers(&candidate, 2));
        assert!(rack.covers(&candidate, 3));
        assert!(rack.covers(&candidate, 4));
    }

    #[test]
    fn covers_is_monotone_in_budget() {
        let rack = LetterBag::new("stone");
        let candidates = ["notes", "tones", "stones", "xylem", "onset"];

        for text in candidates {
            let candidate = LetterBag::new(text);
            for budget in 0..4 {
                if rack.covers(&candidate, budget) {
                    assert!(
                        rack.covers(&candidate, budget + 1),
                        "budget {budget} matched '{text}' but budget {} did not",
                        budget + 1
                    );
                }
            }
        }
    }

    #[test]
    fn covers_mixed_shortfalls_cost_one_each() {
        // q missing entirely and a short by one: two failing keys.
        let rack = LetterBag::new("cat");
        let candidate = LetterBag::new("qaat");
        assert!(!rack.covers(&candidate, 1));
        assert!(rack.covers(&candidate, 2));
    }
}
