//! Submission rules and scoring
//!
//! A submission is normalized, then checked in a fixed order where the first
//! failing rule decides the rejection:
//!
//! 1. too short (two letters or fewer) or identical to the root word
//! 2. already used this game
//! 3. not buildable from the root word's letters
//! 4. not a correctly spelled word
//!
//! An accepted word scores one point per letter.

use super::letters::LetterCounts;
use crate::dictionary::{Language, SpellChecker};
use std::fmt;

/// Shortest word a player may submit
pub const MIN_WORD_LENGTH: usize = 3;

/// Why a submission was turned down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// Fewer than three letters, or the root word itself
    TooShort,
    /// Already accepted earlier in this game
    NotOriginal,
    /// Needs letters the root word does not have (or not enough of them)
    NotPossible,
    /// Not a recognized word
    Misspelled,
}

impl Rejection {
    /// All rejection reasons in the order the checks run
    pub const ALL: [Self; 4] = [
        Self::TooShort,
        Self::NotOriginal,
        Self::NotPossible,
        Self::Misspelled,
    ];
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::TooShort => "too short",
            Self::NotOriginal => "not original",
            Self::NotPossible => "not possible",
            Self::Misspelled => "misspelled",
        };
        write!(f, "{name}")
    }
}

/// Result of a single submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The normalized word was accepted and is worth `points`
    Accepted { word: String, points: usize },
    Rejected(Rejection),
}

impl Outcome {
    #[inline]
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// The rejection reason, if any
    #[must_use]
    pub const fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Accepted { .. } => None,
            Self::Rejected(reason) => Some(*reason),
        }
    }
}

/// Lower-case a raw submission and strip surrounding whitespace
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  Moon\n"), "moon");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Length of a word as the player sees it (characters, not bytes)
#[inline]
#[must_use]
pub fn word_length(word: &str) -> usize {
    word.chars().count()
}

/// Judge a candidate word against a root word and the words already used
///
/// `root` and `used_words` are expected to be normalized already. The
/// candidate is normalized here, and an accepted outcome carries the
/// normalized form.
///
/// # Examples
/// ```
/// use word_scramble::core::{Outcome, Rejection, submit};
/// use word_scramble::dictionary::{Language, WordList};
///
/// let dictionary = WordList::from_words(["moon", "stone"], Language::english());
/// let english = Language::english();
///
/// let outcome = submit("astronomer", &[], " Moon ", &dictionary, &english);
/// assert_eq!(outcome, Outcome::Accepted { word: "moon".to_string(), points: 4 });
///
/// let used = vec!["moon".to_string()];
/// let again = submit("astronomer", &used, "moon", &dictionary, &english);
/// assert_eq!(again, Outcome::Rejected(Rejection::NotOriginal));
/// ```
pub fn submit<C>(
    root: &str,
    used_words: &[String],
    candidate: &str,
    checker: &C,
    language: &Language,
) -> Outcome
where
    C: SpellChecker + ?Sized,
{
    let word = normalize(candidate);
    let length = word_length(&word);

    if length < MIN_WORD_LENGTH || word == root {
        return Outcome::Rejected(Rejection::TooShort);
    }

    if used_words.iter().any(|used| *used == word) {
        return Outcome::Rejected(Rejection::NotOriginal);
    }

    if !LetterCounts::new(root).can_spell(&word) {
        return Outcome::Rejected(Rejection::NotPossible);
    }

    if !checker.is_correct(&word, language) {
        return Outcome::Rejected(Rejection::Misspelled);
    }

    Outcome::Accepted {
        word,
        points: length,
    }
}
