//! Solve command
//!
//! Lists every dictionary word a player could score with on a given root.

use crate::core::{Outcome, normalize, submit};
use crate::dictionary::WordList;
use rayon::prelude::*;

/// Every acceptable word for one root word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub root: String,
    /// Longest first, then alphabetical
    pub words: Vec<String>,
    /// Score for finding every word
    pub max_score: usize,
}

/// Find all dictionary words acceptable as submissions on `root`
///
/// Each dictionary word is judged by the same rules as a first submission,
/// so the root itself and words under three letters never appear.
///
/// # Errors
///
/// Returns an error if the root word is blank.
///
/// # Examples
/// ```
/// use word_scramble::commands::solve_root;
/// use word_scramble::dictionary::{Language, WordList};
///
/// let dictionary = WordList::from_words(["moon", "noon", "no", "stone"], Language::english());
/// let result = solve_root("astronomer", &dictionary).unwrap();
///
/// assert_eq!(result.words, ["stone", "moon"]);
/// assert_eq!(result.max_score, 9);
/// ```
pub fn solve_root(root: &str, dictionary: &WordList) -> Result<SolveResult, String> {
    let root = normalize(root);
    if root.is_empty() {
        return Err("Root word must not be blank".to_string());
    }

    let mut scored: Vec<(String, usize)> = dictionary
        .words()
        .par_iter()
        .filter_map(
            |word| match submit(&root, &[], word, dictionary, dictionary.language()) {
                Outcome::Accepted { word, points } => Some((word, points)),
                Outcome::Rejected(_) => None,
            },
        )
        .collect();

    scored.sort_by(|(w1, p1), (w2, p2)| p2.cmp(p1).then_with(|| w1.cmp(w2)));

    let max_score = scored.iter().map(|(_, points)| points).sum();
    let words = scored.into_iter().map(|(word, _)| word).collect();

    Ok(SolveResult {
        root,
        words,
        max_score,
    })
}
