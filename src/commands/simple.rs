//! Simple interactive CLI mode
//!
//! Line-based game without the TUI

use crate::core::{Outcome, Session};
use crate::dictionary::{Language, RootWordSource, SpellChecker};
use crate::output::formatters::{length_badge, rejection_message, rejection_title};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if no root word can be picked or on an I/O error.
pub fn run_simple<R, C>(roots: &R, checker: &C, language: &Language) -> Result<(), String>
where
    R: RootWordSource + ?Sized,
    C: SpellChecker + ?Sized,
{
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_lines(stdin.lock(), stdout.lock(), roots, checker, language)
}

/// Game loop over any line source and sink
///
/// Runs until the player quits or input ends.
///
/// # Errors
///
/// Returns an error if no root word can be picked or on an I/O error.
pub fn play_lines<I, O, R, C>(
    input: I,
    mut output: O,
    roots: &R,
    checker: &C,
    language: &Language,
) -> Result<(), String>
where
    I: BufRead,
    O: Write,
    R: RootWordSource + ?Sized,
    C: SpellChecker + ?Sized,
{
    let mut session = Session::start(roots).map_err(|e| e.to_string())?;

    print_banner(&mut output).map_err(|e| e.to_string())?;
    print_root(&mut output, &session).map_err(|e| e.to_string())?;

    for line in input.lines() {
        let line = line.map_err(|e| e.to_string())?;
        let result = match line.trim() {
            "quit" | "q" | "exit" => {
                writeln!(output, "\n👋 Final score: {}\n", session.score())
                    .map_err(|e| e.to_string())?;
                return Ok(());
            }
            "new" | "n" => {
                session.new_game(roots).map_err(|e| e.to_string())?;
                writeln!(output, "\n🔄 New game started!").map_err(|e| e.to_string())?;
                print_root(&mut output, &session)
            }
            "score" => writeln!(output, "Score: {}", session.score()),
            "words" => print_words(&mut output, &session),
            _ => {
                let outcome = session.submit(&line, checker, language);
                print_outcome(&mut output, &outcome, session.score())
            }
        };
        result.map_err(|e| e.to_string())?;
    }

    writeln!(output, "\nFinal score: {}", session.score()).map_err(|e| e.to_string())
}

fn print_banner<O: Write>(output: &mut O) -> io::Result<()> {
    writeln!(
        output,
        "\n╔══════════════════════════════════════════════════════════════╗"
    )?;
    writeln!(
        output,
        "║                 Word Scramble - Simple Mode                  ║"
    )?;
    writeln!(
        output,
        "╚══════════════════════════════════════════════════════════════╝\n"
    )?;
    writeln!(
        output,
        "Make words from the letters of the root word. Each letter counts once."
    )?;
    writeln!(output, "Longer words score more points.\n")?;
    writeln!(
        output,
        "Commands: 'quit' to exit, 'new' for new game, 'score', 'words'\n"
    )
}

fn print_root<O: Write>(output: &mut O, session: &Session) -> io::Result<()> {
    writeln!(
        output,
        "Root word: {}\n",
        session.root().to_uppercase().bright_yellow().bold()
    )
}

fn print_words<O: Write>(output: &mut O, session: &Session) -> io::Result<()> {
    if session.used_words().is_empty() {
        return writeln!(output, "No words yet");
    }
    for word in session.used_words() {
        writeln!(output, "  {} {word}", length_badge(word))?;
    }
    Ok(())
}

fn print_outcome<O: Write>(output: &mut O, outcome: &Outcome, score: usize) -> io::Result<()> {
    match outcome {
        Outcome::Accepted { word, points } => writeln!(
            output,
            "{} {word} (+{points}, score {score})",
            "✓".green().bold()
        ),
        Outcome::Rejected(reason) => writeln!(
            output,
            "{} {}: {}",
            "✗".red().bold(),
            rejection_title(*reason).red(),
            rejection_message(*reason)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordList;

    fn play(script: &str) -> String {
        let roots = WordList::from_words(["astronomer"], Language::english());
        let dictionary = WordList::embedded_dictionary();
        let mut output = Vec::new();

        play_lines(
            script.as_bytes(),
            &mut output,
            &roots,
            &dictionary,
            &Language::english(),
        )
        .unwrap();

        String::from_utf8(output).unwrap()
    }

    #[test]
    fn plays_until_quit() {
        let output = play("moon\nstone\nquit\nroast\n");

        assert!(output.contains("ASTRONOMER"));
        assert!(output.contains("moon (+4, score 4)"));
        assert!(output.contains("stone (+5, score 9)"));
        assert!(output.contains("Final score: 9"));
        assert!(!output.contains("roast"));
    }

    #[test]
    fn reports_rejections() {
        let output = play("no\nmoon\nmoon\nxyzzy\n");

        assert!(output.contains(rejection_message(crate::core::Rejection::TooShort)));
        assert!(output.contains(rejection_message(crate::core::Rejection::NotOriginal)));
        assert!(output.contains(rejection_message(crate::core::Rejection::NotPossible)));
        assert!(output.contains("Final score: 4"));
    }

    #[test]
    fn new_game_resets_score() {
        let output = play("moon\nnew\nscore\n");

        assert!(output.contains("New game started"));
        assert!(output.contains("Score: 0"));
        assert!(output.contains("Final score: 0"));
    }

    #[test]
    fn lists_words_most_recent_first() {
        let output = play("moon\nstone\nwords\n");

        let stone = output.rfind("stone").unwrap();
        let moon = output.rfind("moon").unwrap();
        assert!(stone < moon);
    }

    #[test]
    fn fails_without_root_words() {
        let roots = WordList::from_words(Vec::<&str>::new(), Language::english());
        let dictionary = WordList::embedded_dictionary();
        let result = play_lines(
            "moon\n".as_bytes(),
            Vec::new(),
            &roots,
            &dictionary,
            &Language::english(),
        );
        assert!(result.is_err());
    }
}
