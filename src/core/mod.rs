//! Core game logic for Word Scramble
//!
//! Pure validation and scoring: no I/O, no terminal, no randomness.
//! The dictionary is reached only through the `SpellChecker` capability.

mod letters;
mod rules;
mod session;

pub use letters::LetterCounts;
pub use rules::{MIN_WORD_LENGTH, Outcome, Rejection, normalize, submit, word_length};
pub use session::Session;
