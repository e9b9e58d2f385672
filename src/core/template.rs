//! Positional pattern matching
//!
//! A `Template` is a crossword-style row: literal characters are fixed and
//! `.` marks an unknown position. Unknown positions may not take any letter
//! that is already fixed elsewhere in the pattern or explicitly ruled out
//! by the caller.

use rustc_hash::FxHashSet;

/// The reserved symbol marking an unknown position
pub const PLACEHOLDER: char = '.';

#[derive(Debug, Clone, PartialEq, Eq)]
enum Tile {
    /// Position must hold exactly this character
    Literal(char),
    /// Position may hold anything outside the exclusion set
    Blank,
}

/// A positional pattern with excluded-letter constraints at blanks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    tiles: Vec<Tile>,
    excluded: FxHashSet<char>,
}

impl Template {
    /// Parse a pattern, merging extra excluded letters from the caller
    ///
    /// The pattern is case-folded. Its literal letters join the exclusion
    /// set automatically: a letter known to sit at one position cannot also
    /// hide behind a blank. Non-letter literals (digits, hyphens) stay
    /// literal but never become exclusions, and neither does the placeholder
    /// itself. `extra_excluded` contributes its alphabetic characters,
    /// case-folded.
    ///
    /// # Examples
    /// ```
    /// use wordbag::core::Template;
    ///
    /// let template = Template::parse(".at", "z");
    /// assert!(template.matches("rat"));
    /// assert!(!template.matches("zat")); // z ruled out by the caller
    /// assert!(!template.matches("tat")); // t already fixed at the end
    /// ```
    #[must_use]
    pub fn parse(pattern: &str, extra_excluded: &str) -> Self {
        let mut tiles = Vec::new();
        let mut excluded = FxHashSet::default();

        for c in pattern.to_lowercase().chars() {
            if c == PLACEHOLDER {
                tiles.push(Tile::Blank);
            } else {
                if c.is_alphabetic() {
                    excluded.insert(c);
                }
                tiles.push(Tile::Literal(c));
            }
        }

        for c in extra_excluded.to_lowercase().chars() {
            if c.is_alphabetic() {
                excluded.insert(c);
            }
        }

        Self { tiles, excluded }
    }

    /// Number of positions in the pattern
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the pattern has no positions
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Whether a letter is ruled out at blank positions
    #[must_use]
    pub fn excludes(&self, letter: char) -> bool {
        self.excluded.contains(&letter)
    }

    /// Test a candidate against the template
    ///
    /// Length-strict: a candidate with a different character count never
    /// matches. Literals compare case-insensitively; blanks accept any
    /// character outside the exclusion set.
    ///
    /// # Examples
    /// ```
    /// use wordbag::core::Template;
    ///
    /// let template = Template::parse("c.t", "");
    /// assert!(template.matches("cat"));
    /// assert!(template.matches("CUT"));
    /// assert!(!template.matches("cct")); // c is fixed elsewhere
    /// assert!(!template.matches("cart")); // wrong length
    /// ```
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        let folded = candidate.to_lowercase();
        let mut chars = folded.chars();

        for tile in &self.tiles {
            let Some(c) = chars.next() else {
                return false; // candidate shorter than the pattern
            };
            match tile {
                Tile::Literal(literal) => {
                    if c != *literal {
                        return false;
                    }
                }
                Tile::Blank => {
                    if self.excluded.contains(&c) {
                        return false;
                    }
                }
            }
        }

        chars.next().is_none() // candidate longer than the pattern
    }
}
