//! Check command
//!
//! Plays a list of words, in order, against a fixed root word.

use crate::core::{Outcome, Session};
use crate::dictionary::{Language, SpellChecker};

/// Result of checking a batch of words
pub struct CheckReport {
    pub root: String,
    pub entries: Vec<(String, Outcome)>,
    pub used_words: Vec<String>,
    pub score: usize,
}

impl CheckReport {
    /// Number of accepted submissions
    #[must_use]
    pub fn accepted_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, outcome)| outcome.is_accepted())
            .count()
    }
}

/// Submit `words` one after another in a fresh game on `root`
///
/// # Errors
///
/// Returns an error if the root word is blank.
pub fn check_words<C, S>(
    root: &str,
    words: &[S],
    checker: &C,
    language: &Language,
) -> Result<CheckReport, String>
where
    C: SpellChecker + ?Sized,
    S: AsRef<str>,
{
    let mut session = Session::new(root);
    if session.root().is_empty() {
        return Err("Root word must not be blank".to_string());
    }

    let entries = words
        .iter()
        .map(|word| {
            let word = word.as_ref();
            (word.to_string(), session.submit(word, checker, language))
        })
        .collect();

    Ok(CheckReport {
        root: session.root().to_string(),
        entries,
        used_words: session.used_words().to_vec(),
        score: session.score(),
    })
}
