//! Survey every root word
//!
//! Solves each root word against the dictionary and ranks the roots by how
//! many words they admit.

use super::solve::solve_root;
use crate::dictionary::WordList;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Word count and best possible score for one root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootSummary {
    pub root: String,
    pub word_count: usize,
    pub max_score: usize,
}

/// Statistics from surveying root words
#[derive(Debug)]
pub struct SurveyStatistics {
    pub total_roots: usize,
    /// Sorted by word count, richest first
    pub summaries: Vec<RootSummary>,
    pub average_words: f64,
    pub average_max_score: f64,
    pub total_time: Duration,
}

impl SurveyStatistics {
    #[must_use]
    pub fn best(&self) -> Option<&RootSummary> {
        self.summaries.first()
    }

    #[must_use]
    pub fn worst(&self) -> Option<&RootSummary> {
        self.summaries.last()
    }

    /// Roots that admit no words at all
    #[must_use]
    pub fn dead_roots(&self) -> Vec<&RootSummary> {
        self.summaries
            .iter()
            .filter(|summary| summary.word_count == 0)
            .collect()
    }
}

/// Solve every root word (or the first `limit` of them)
///
/// Shows a progress bar when `show_progress` is set.
///
/// # Errors
///
/// Returns an error if the progress bar template is invalid.
pub fn run_survey(
    roots: &WordList,
    dictionary: &WordList,
    limit: Option<usize>,
    show_progress: bool,
) -> Result<SurveyStatistics, String> {
    let test_roots: Vec<&String> = roots
        .words()
        .iter()
        .take(limit.unwrap_or(roots.len()))
        .collect();

    let pb = if show_progress {
        let pb = ProgressBar::new(test_roots.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .map_err(|e| e.to_string())?
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut summaries = Vec::with_capacity(test_roots.len());

    for root in test_roots {
        // Roots come from a normalized word list, so they are never blank
        let result = solve_root(root, dictionary)?;
        pb.set_message(format!("{root}: {} words", result.words.len()));
        pb.inc(1);

        summaries.push(RootSummary {
            root: result.root,
            word_count: result.words.len(),
            max_score: result.max_score,
        });
    }

    pb.finish_with_message("Done");

    summaries.sort_by(|a, b| {
        b.word_count
            .cmp(&a.word_count)
            .then_with(|| a.root.cmp(&b.root))
    });

    let total_roots = summaries.len();
    let (average_words, average_max_score) = if total_roots == 0 {
        (0.0, 0.0)
    } else {
        let words: usize = summaries.iter().map(|s| s.word_count).sum();
        let score: usize = summaries.iter().map(|s| s.max_score).sum();
        (
            words as f64 / total_roots as f64,
            score as f64 / total_roots as f64,
        )
    };

    Ok(SurveyStatistics {
        total_roots,
        summaries,
        average_words,
        average_max_score,
        total_time: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Language;

    fn dictionary() -> WordList {
        WordList::from_words(
            ["moon", "stone", "roast", "worm", "silk", "milk"],
            Language::english(),
        )
    }

    #[test]
    fn survey_ranks_roots() {
        let roots = WordList::from_words(
            ["silkworm", "astronomer", "grateful"],
            Language::english(),
        );
        let stats = run_survey(&roots, &dictionary(), None, false).unwrap();

        assert_eq!(stats.total_roots, 3);
        let best = stats.best().unwrap();
        assert_eq!(best.root, "astronomer");
        assert_eq!(best.word_count, 3);
        assert_eq!(best.max_score, 14);

        let worst = stats.worst().unwrap();
        assert_eq!(worst.root, "grateful");
        assert_eq!(worst.word_count, 0);
        assert_eq!(stats.dead_roots().len(), 1);
    }

    #[test]
    fn survey_averages() {
        let roots = WordList::from_words(["silkworm", "astronomer"], Language::english());
        let stats = run_survey(&roots, &dictionary(), None, false).unwrap();

        // silkworm: worm, silk, milk; astronomer: moon, stone, roast
        assert!((stats.average_words - 3.0).abs() < f64::EPSILON);
        assert!((stats.average_max_score - 13.0).abs() < f64::EPSILON);
    }

    #[test]
    fn survey_respects_limit() {
        let roots = WordList::embedded_roots();
        let stats = run_survey(&roots, &WordList::embedded_dictionary(), Some(2), false).unwrap();
        assert_eq!(stats.total_roots, 2);
    }

    #[test]
    fn survey_no_roots() {
        let roots = WordList::from_words(Vec::<&str>::new(), Language::english());
        let stats = run_survey(&roots, &dictionary(), None, false).unwrap();

        assert_eq!(stats.total_roots, 0);
        assert!(stats.best().is_none());
        assert!(stats.average_words.abs() < f64::EPSILON);
    }
}
