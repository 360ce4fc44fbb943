//! Letter multiset used to decide whether a word can be built from a root.

use rustc_hash::FxHashMap;

/// How many times each letter occurs in a word
///
/// A candidate is buildable from a root when every letter of the candidate is
/// available in the root at least as many times as the candidate uses it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts {
    counts: FxHashMap<char, usize>,
}

impl LetterCounts {
    /// Count the letters of `word`
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterCounts;
    ///
    /// let counts = LetterCounts::new("astronomer");
    /// assert_eq!(counts.count('o'), 2);
    /// assert_eq!(counts.count('z'), 0);
    /// ```
    #[must_use]
    pub fn new(word: &str) -> Self {
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        for ch in word.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Number of occurrences of `letter`
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total number of letters counted
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Check whether `word` can be spelled by spending these letters
    ///
    /// Each letter may be spent at most as many times as it was counted, so
    /// duplicate letters in `word` need duplicates here too.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterCounts;
    ///
    /// let root = LetterCounts::new("astronomer");
    /// assert!(root.can_spell("moon"));
    /// assert!(!root.can_spell("noon")); // only one 'n'
    /// ```
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        let mut remaining = self.counts.clone();
        for ch in word.chars() {
            match remaining.get_mut(&ch) {
                Some(left) if *left > 0 => *left -= 1,
                _ => return false,
            }
        }
        true
    }
}
