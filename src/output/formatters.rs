//! Formatting utilities for terminal output

use crate::core::{Rejection, word_length};

/// Short heading for a rejection, as shown in alerts
#[must_use]
pub const fn rejection_title(reason: Rejection) -> &'static str {
    match reason {
        Rejection::TooShort => "Too short",
        Rejection::NotOriginal => "Not original word",
        Rejection::NotPossible => "Not possible word",
        Rejection::Misspelled => "Misspelled",
    }
}

/// Explanation shown under the rejection heading
#[must_use]
pub const fn rejection_message(reason: Rejection) -> &'static str {
    match reason {
        Rejection::TooShort => "Word must contain at least 3 characters",
        Rejection::NotOriginal => "You already used this word",
        Rejection::NotPossible => "Root word does not contain these letters",
        Rejection::Misspelled => "You can not come up with this word",
    }
}

/// Word length in brackets, e.g. `(4)` for "moon"
#[must_use]
pub fn length_badge(word: &str) -> String {
    format!("({})", word_length(word))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
