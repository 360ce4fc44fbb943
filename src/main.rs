//! Word Scramble - CLI
//!
//! Word game with TUI and CLI modes: build words from a root word's letters.

use anyhow::Result;
use clap::{Parser, Subcommand};
use word_scramble::{
    commands::{check_words, run_simple, run_survey, solve_root},
    dictionary::{Language, WordList, loader::load_from_file},
    output::{print_check_report, print_solve_result, print_survey_statistics},
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Make as many words as you can from the letters of a root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root words: 'embedded' (default) or path to a file with one word per line
    #[arg(short, long, global = true, default_value = "embedded")]
    roots: String,

    /// Dictionary: 'embedded' (default, English) or path to a file with one word per line
    #[arg(short, long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Language tag submissions are spell-checked in
    #[arg(short, long, global = true, default_value = Language::ENGLISH_TAG)]
    language: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Play a list of words against a root word and show the score
    Check {
        /// The root word
        root: String,

        /// Words to submit, in order
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// List every word that can be made from a root word
    Solve {
        /// The root word
        root: String,

        /// List one word per line with its length
        #[arg(short, long)]
        verbose: bool,
    },

    /// Rank all root words by how many words they allow
    Survey {
        /// Limit number of root words to survey
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

/// Load a word list based on a -r/-d flag
///
/// - "embedded": the list compiled into the binary
/// - "<path>": load from file
fn load_word_list(
    source: &str,
    embedded: fn() -> WordList,
    language: &Language,
) -> Result<WordList> {
    match source {
        "embedded" => Ok(embedded()),
        path => load_from_file(path, language.clone())
            .map_err(|e| anyhow::anyhow!("Failed to load word list '{path}': {e}")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let language = Language::new(cli.language);
    let roots = load_word_list(&cli.roots, WordList::embedded_roots, &language)?;
    let dictionary = load_word_list(&cli.dictionary, WordList::embedded_dictionary, &language)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&roots, &dictionary, language),
        Commands::Simple => {
            run_simple(&roots, &dictionary, &language).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Check { root, words } => {
            let report = check_words(&root, words.as_slice(), &dictionary, &language)
                .map_err(|e| anyhow::anyhow!(e))?;
            print_check_report(&report);
            Ok(())
        }
        Commands::Solve { root, verbose } => {
            let result = solve_root(&root, &dictionary).map_err(|e| anyhow::anyhow!(e))?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Survey { limit } => {
            let count = limit.map_or(roots.len(), |n| n.min(roots.len()));
            println!("🔎 Surveying {count} root words...");
            let stats =
                run_survey(&roots, &dictionary, limit, true).map_err(|e| anyhow::anyhow!(e))?;
            print_survey_statistics(&stats);
            Ok(())
        }
    }
}

fn run_play_command(roots: &WordList, dictionary: &WordList, language: Language) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let app = App::new(roots, dictionary, language)?;
    run_tui(app)
}
