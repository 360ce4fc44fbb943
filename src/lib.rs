//! Word Scramble
//!
//! A word game: make as many words as you can from the letters of a root word.
//! Each accepted word scores one point per letter.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::{Outcome, Rejection, Session};
//! use word_scramble::dictionary::{Language, WordList};
//!
//! let dictionary = WordList::embedded_dictionary();
//! let english = Language::english();
//! let mut session = Session::new("astronomer");
//!
//! assert!(session.submit("moon", &dictionary, &english).is_accepted());
//! assert_eq!(session.score(), 4);
//!
//! let outcome = session.submit("xyzzy", &dictionary, &english);
//! assert_eq!(outcome, Outcome::Rejected(Rejection::NotPossible));
//! ```

// Core game rules
pub mod core;

// Root words and spell checking
pub mod dictionary;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
