//! Word list loading utilities
//!
//! A `WordList` is both a root-word source and a spell-check oracle, loaded
//! from a file or from the embedded constants.

use super::{
    DICTIONARY, Language, NoWordsAvailable, ROOT_WORDS, RootWordSource, SpellChecker,
};
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// A list of words in a single language
///
/// Words are trimmed and lower-cased on the way in; blank lines and repeats
/// are dropped, first occurrence wins.
#[derive(Debug, Clone)]
pub struct WordList {
    language: Language,
    words: Vec<String>,
    lookup: FxHashSet<String>,
}

impl WordList {
    /// Build a word list from any sequence of strings
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::{Language, SpellChecker, WordList};
    ///
    /// let list = WordList::from_words(["Moon", "stone", "", "moon"], Language::english());
    /// assert_eq!(list.len(), 2);
    /// assert!(list.is_correct("moon", &Language::english()));
    /// ```
    pub fn from_words<I, S>(words: I, language: Language) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Vec::new();
        let mut lookup = FxHashSet::default();

        for word in words {
            let normalized = word.as_ref().trim().to_lowercase();
            if normalized.is_empty() {
                continue;
            }
            if lookup.insert(normalized.clone()) {
                list.push(normalized);
            }
        }

        Self {
            language,
            words: list,
            lookup,
        }
    }

    /// The embedded root word list
    #[must_use]
    pub fn embedded_roots() -> Self {
        Self::from_words(ROOT_WORDS, Language::english())
    }

    /// The embedded English dictionary
    #[must_use]
    pub fn embedded_dictionary() -> Self {
        Self::from_words(DICTIONARY, Language::english())
    }

    #[inline]
    #[must_use]
    pub fn language(&self) -> &Language {
        &self.language
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Exact membership test on an already normalized word
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.lookup.contains(word)
    }
}

impl SpellChecker for WordList {
    fn is_correct(&self, word: &str, language: &Language) -> bool {
        *language == self.language && self.contains(word)
    }
}

impl RootWordSource for WordList {
    fn pick_random_word(&self) -> Result<String, NoWordsAvailable> {
        use rand::prelude::IndexedRandom;

        self.words
            .choose(&mut rand::rng())
            .cloned()
            .ok_or(NoWordsAvailable)
    }
}

/// Load a word list from a file
///
/// The file is UTF-8 text, one word per line, no header.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or is not valid UTF-8.
///
/// # Examples
/// ```no_run
/// use word_scramble::dictionary::Language;
/// use word_scramble::dictionary::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt", Language::english()).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, language: Language) -> io::Result<WordList> {
    let content = fs::read_to_string(path)?;
    Ok(WordList::from_words(content.lines(), language))
}
