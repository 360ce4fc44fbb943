//! Command implementations

pub mod check;
pub mod simple;
pub mod solve;
pub mod survey;

pub use check::{CheckReport, check_words};
pub use simple::{play_lines, run_simple};
pub use solve::{SolveResult, solve_root};
pub use survey::{RootSummary, SurveyStatistics, run_survey};
