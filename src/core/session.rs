//! A single game of Word Scramble

use super::rules::{Outcome, submit};
use crate::dictionary::{Language, NoWordsAvailable, RootWordSource, SpellChecker};

/// Game state owned by the caller: root word, accepted words and score
///
/// The session changes only through `new_game` and accepted submissions.
/// Rejected submissions leave it untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    root: String,
    used_words: Vec<String>,
    score: usize,
}

impl Session {
    /// Start a session on a known root word
    ///
    /// The root is normalized the same way submissions are.
    #[must_use]
    pub fn new(root: &str) -> Self {
        Self {
            root: super::normalize(root),
            used_words: Vec::new(),
            score: 0,
        }
    }

    /// Start a session on a random root word
    ///
    /// # Errors
    ///
    /// Returns `NoWordsAvailable` if the source cannot supply a root word.
    pub fn start<S: RootWordSource + ?Sized>(source: &S) -> Result<Self, NoWordsAvailable> {
        let root = source.pick_random_word()?;
        Ok(Self::new(&root))
    }

    /// Replace the root word and clear history and score
    ///
    /// # Errors
    ///
    /// Returns `NoWordsAvailable` if the source cannot supply a root word, in
    /// which case the current game carries on unchanged.
    pub fn new_game<S: RootWordSource + ?Sized>(
        &mut self,
        source: &S,
    ) -> Result<(), NoWordsAvailable> {
        *self = Self::start(source)?;
        Ok(())
    }

    /// Submit a candidate word
    ///
    /// Accepted words go to the front of the history and add their length to
    /// the score.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::{Outcome, Rejection, Session};
    /// use word_scramble::dictionary::{Language, WordList};
    ///
    /// let dictionary = WordList::from_words(["moon", "stone"], Language::english());
    /// let english = Language::english();
    /// let mut session = Session::new("astronomer");
    ///
    /// assert!(session.submit("moon", &dictionary, &english).is_accepted());
    /// assert!(session.submit("stone", &dictionary, &english).is_accepted());
    /// assert_eq!(session.used_words(), ["stone", "moon"]);
    /// assert_eq!(session.score(), 9);
    ///
    /// let again = session.submit("moon", &dictionary, &english);
    /// assert_eq!(again, Outcome::Rejected(Rejection::NotOriginal));
    /// assert_eq!(session.score(), 9);
    /// ```
    pub fn submit<C: SpellChecker + ?Sized>(
        &mut self,
        candidate: &str,
        checker: &C,
        language: &Language,
    ) -> Outcome {
        let outcome = submit(&self.root, &self.used_words, candidate, checker, language);

        if let Outcome::Accepted { word, points } = &outcome {
            self.used_words.insert(0, word.clone());
            self.score += points;
        }

        outcome
    }

    #[inline]
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Accepted words, most recent first
    #[inline]
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Rejection, word_length};
    use crate::dictionary::WordList;

    fn dictionary() -> WordList {
        WordList::from_words(
            ["moon", "stone", "roast", "rose", "store", "tenor", "astronomer"],
            Language::english(),
        )
    }

    fn english() -> Language {
        Language::english()
    }

    #[test]
    fn new_session_is_empty() {
        let session = Session::new("  Astronomer\n");
        assert_eq!(session.root(), "astronomer");
        assert!(session.used_words().is_empty());
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn astronomer_scenario() {
        let dictionary = dictionary();
        let mut session = Session::new("astronomer");

        assert_eq!(
            session.submit("no", &dictionary, &english()),
            Outcome::Rejected(Rejection::TooShort)
        );
        assert_eq!(
            session.submit("moon", &dictionary, &english()),
            Outcome::Accepted {
                word: "moon".to_string(),
                points: 4
            }
        );
        assert_eq!(session.score(), 4);
        assert_eq!(
            session.submit("moon", &dictionary, &english()),
            Outcome::Rejected(Rejection::NotOriginal)
        );
        assert_eq!(
            session.submit("xyzzy", &dictionary, &english()),
            Outcome::Rejected(Rejection::NotPossible)
        );
        assert_eq!(
            session.submit("astronomer", &dictionary, &english()),
            Outcome::Rejected(Rejection::TooShort)
        );

        assert_eq!(session.used_words(), ["moon"]);
        assert_eq!(session.score(), 4);
    }

    #[test]
    fn rejection_leaves_session_unchanged() {
        let dictionary = dictionary();
        let mut session = Session::new("astronomer");
        session.submit("stone", &dictionary, &english());
        let before = session.clone();

        for candidate in ["st", "stone", "zebra", "roams", "roams"] {
            assert!(!session.submit(candidate, &dictionary, &english()).is_accepted());
            assert_eq!(session, before);
        }
    }

    #[test]
    fn score_is_sum_of_accepted_lengths() {
        let dictionary = dictionary();
        let mut session = Session::new("astronomer");
        let accepted = ["moon", "stone", "roast", "rose", "store", "tenor"];

        for word in accepted {
            assert!(session.submit(word, &dictionary, &english()).is_accepted());
        }

        let expected: Vec<&str> = accepted.iter().rev().copied().collect();
        assert_eq!(session.used_words(), expected.as_slice());
        assert_eq!(
            session.score(),
            accepted.iter().map(|w| word_length(w)).sum::<usize>()
        );
        assert_eq!(
            session.score(),
            session.used_words().iter().map(|w| word_length(w)).sum::<usize>()
        );
    }

    #[test]
    fn history_never_contains_root_or_duplicates() {
        let dictionary = dictionary();
        let mut session = Session::new("astronomer");

        for word in ["moon", "Moon", "astronomer", "stone", " stone", "moon"] {
            session.submit(word, &dictionary, &english());
        }

        let used = session.used_words();
        assert!(!used.iter().any(|w| w == session.root()));
        let unique: std::collections::HashSet<_> = used.iter().collect();
        assert_eq!(unique.len(), used.len());
    }

    #[test]
    fn start_picks_from_source() {
        let roots = WordList::from_words(["silkworm"], english());
        let session = Session::start(&roots).unwrap();
        assert_eq!(session.root(), "silkworm");
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn start_fails_without_words() {
        let roots = WordList::from_words(Vec::<&str>::new(), english());
        assert_eq!(Session::start(&roots), Err(NoWordsAvailable));
    }

    #[test]
    fn new_game_resets_history_and_score() {
        let dictionary = dictionary();
        let mut session = Session::new("astronomer");
        session.submit("moon", &dictionary, &english());

        let roots = WordList::from_words(["grateful"], english());
        session.new_game(&roots).unwrap();

        assert_eq!(session.root(), "grateful");
        assert!(session.used_words().is_empty());
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn failed_new_game_keeps_current_game() {
        let dictionary = dictionary();
        let mut session = Session::new("astronomer");
        session.submit("moon", &dictionary, &english());
        let before = session.clone();

        let empty = WordList::from_words(Vec::<&str>::new(), english());
        assert_eq!(session.new_game(&empty), Err(NoWordsAvailable));
        assert_eq!(session, before);
    }
}
