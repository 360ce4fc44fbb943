//! Dictionary source for Word Scramble
//!
//! Supplies root words for new games and answers "is this a real word" for
//! submissions. Both capabilities are traits so the game logic can run against
//! a fixed test dictionary as easily as against the embedded one.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, ROOT_WORDS, ROOT_WORDS_COUNT};
pub use loader::WordList;

use std::fmt;

/// Language tag a dictionary is keyed by, e.g. `en`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Language(String);

impl Language {
    /// Tag of the embedded dictionary
    pub const ENGLISH_TAG: &'static str = "en";

    /// Create a tag, normalized to lowercase
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into().trim().to_lowercase())
    }

    #[must_use]
    pub fn english() -> Self {
        Self::new(Self::ENGLISH_TAG)
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::english()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Spell-check oracle
pub trait SpellChecker {
    /// Whether `word` is a correctly spelled word in `language`
    fn is_correct(&self, word: &str, language: &Language) -> bool;
}

/// Source of root words for new games
pub trait RootWordSource {
    /// Pick one word at random
    ///
    /// # Errors
    ///
    /// Returns `NoWordsAvailable` if the source has no words to offer.
    fn pick_random_word(&self) -> Result<String, NoWordsAvailable>;
}

/// Error returned when a root word cannot be obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoWordsAvailable;

impl fmt::Display for NoWordsAvailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "No root words available to start a game")
    }
}

impl std::error::Error for NoWordsAvailable {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_count_matches_const() {
        assert_eq!(ROOT_WORDS.len(), ROOT_WORDS_COUNT);
    }

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn embedded_lists_are_not_empty() {
        assert!(ROOT_WORDS_COUNT > 0);
        assert!(DICTIONARY_COUNT > 0);
    }

    #[test]
    fn root_words_are_lowercase_letters() {
        for &word in ROOT_WORDS {
            assert!(word.len() >= 3, "Root '{word}' is too short");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Root '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn root_words_are_in_dictionary() {
        let dictionary: std::collections::HashSet<_> = DICTIONARY.iter().collect();

        for root in ROOT_WORDS {
            assert!(dictionary.contains(root), "Root '{root}' not in dictionary");
        }
    }

    #[test]
    fn language_tag_is_normalized() {
        assert_eq!(Language::new(" EN "), Language::english());
        assert_eq!(Language::default().as_str(), "en");
        assert_eq!(format!("{}", Language::new("De")), "de");
    }

    #[test]
    fn no_words_available_message() {
        assert_eq!(
            NoWordsAvailable.to_string(),
            "No root words available to start a game"
        );
    }
}
