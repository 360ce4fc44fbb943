//! Display functions for command results

use super::formatters::{create_progress_bar, length_badge, rejection_message, rejection_title};
use crate::commands::{CheckReport, SolveResult, SurveyStatistics};
use crate::core::Outcome;
use colored::Colorize;

/// Print the outcome of each checked word and the final score
pub fn print_check_report(report: &CheckReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Root word: {}",
        report.root.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (input, outcome) in &report.entries {
        match outcome {
            Outcome::Accepted { word, points } => {
                println!("  {} {:<16} +{points}", "✓".green().bold(), word);
            }
            Outcome::Rejected(reason) => {
                println!(
                    "  {} {:<16} {} ({})",
                    "✗".red().bold(),
                    input.trim(),
                    rejection_title(*reason).red(),
                    rejection_message(*reason).bright_black()
                );
            }
        }
    }

    println!();
    println!(
        "{}",
        format!(
            "Score: {} ({} of {} accepted)",
            report.score,
            report.accepted_count(),
            report.entries.len()
        )
        .green()
        .bold()
    );
}

/// Print every word found for a root
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORDS IN".bright_cyan().bold(),
        result.root.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if result.words.is_empty() {
        println!("\n{}", "No words can be made from this root.".yellow());
        return;
    }

    println!(
        "\n📊 {} words, maximum score {}",
        result.words.len(),
        result.max_score.to_string().bright_yellow().bold()
    );

    if verbose {
        println!();
        for word in &result.words {
            println!("   {} {word}", length_badge(word).bright_black());
        }
    } else {
        // Group by length on one line each
        let mut current_len = None;
        let mut line = String::new();
        for word in &result.words {
            let len = crate::core::word_length(word);
            if current_len != Some(len) {
                if let Some(prev) = current_len {
                    println!("   {prev:>2}: {line}");
                }
                current_len = Some(len);
                line.clear();
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        }
        if let Some(prev) = current_len {
            println!("   {prev:>2}: {line}");
        }
    }
}

/// Print the survey of all root words
pub fn print_survey_statistics(stats: &SurveyStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "ROOT WORD SURVEY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Roots surveyed:   {}", stats.total_roots);
    println!(
        "   Average words:    {}",
        format!("{:.1}", stats.average_words).bright_yellow().bold()
    );
    println!("   Average max score: {:.1}", stats.average_max_score);
    println!("   Time taken:       {:.2}s", stats.total_time.as_secs_f64());

    if let Some(best) = stats.best() {
        println!(
            "   Richest root:     {} ({} words)",
            best.root.to_uppercase().green(),
            best.word_count
        );
    }
    if let Some(worst) = stats.worst() {
        println!(
            "   Poorest root:     {} ({} words)",
            worst.root.to_uppercase().yellow(),
            worst.word_count
        );
    }

    let dead = stats.dead_roots();
    if !dead.is_empty() {
        println!(
            "\n{} {}",
            "⚠ Roots with no words:".red().bold(),
            dead.iter()
                .map(|s| s.root.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    println!("\n📈 {}", "Words per root:".bright_cyan().bold());
    let max_words = stats.best().map_or(0, |s| s.word_count) as f64;
    for summary in &stats.summaries {
        let bar = create_progress_bar(summary.word_count as f64, max_words, 30);
        println!(
            "   {:<12} {} {:4} words, max {:4}",
            summary.root,
            bar.green(),
            summary.word_count,
            summary.max_score
        );
    }
}
