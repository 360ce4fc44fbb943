//! TUI application state and logic

use crate::core::{Outcome, Rejection, Session};
use crate::dictionary::{Language, NoWordsAvailable, RootWordSource, SpellChecker};
use crate::output::formatters::{rejection_message, rejection_title};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a, R: ?Sized, C: ?Sized> {
    pub roots: &'a R,
    pub checker: &'a C,
    pub language: Language,
    pub session: Session,
    pub input_buffer: String,
    pub input_mode: InputMode,
    pub alert: Option<Alert>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Typing,
    Alert,
}

/// Modal popup explaining a rejection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: &'static str,
    pub message: &'static str,
}

impl From<Rejection> for Alert {
    fn from(reason: Rejection) -> Self {
        Self {
            title: rejection_title(reason),
            message: rejection_message(reason),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Counters for the current run of the program
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_played: usize,
    pub best_score: usize,
    pub rejections: usize,
}

impl<'a, R, C> App<'a, R, C>
where
    R: RootWordSource + ?Sized,
    C: SpellChecker + ?Sized,
{
    /// Create the app with a fresh game
    ///
    /// # Errors
    ///
    /// Returns `NoWordsAvailable` if no root word can be picked.
    pub fn new(roots: &'a R, checker: &'a C, language: Language) -> Result<Self, NoWordsAvailable> {
        let session = Session::start(roots)?;

        Ok(Self {
            roots,
            checker,
            language,
            session,
            input_buffer: String::new(),
            input_mode: InputMode::Typing,
            alert: None,
            messages: vec![Message {
                text: "Make words from the letters of the root word.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics {
                games_played: 1,
                ..Statistics::default()
            },
            should_quit: false,
        })
    }

    /// Submit whatever is in the input buffer
    ///
    /// The buffer is cleared whether or not the word is accepted.
    pub fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        if input.trim().is_empty() {
            return;
        }

        match self.session.submit(&input, self.checker, &self.language) {
            Outcome::Accepted { word, points } => {
                self.stats.best_score = self.stats.best_score.max(self.session.score());
                self.add_message(
                    &format!("{} +{points}", word.to_uppercase()),
                    MessageStyle::Success,
                );
            }
            Outcome::Rejected(reason) => {
                self.stats.rejections += 1;
                self.alert = Some(Alert::from(reason));
                self.input_mode = InputMode::Alert;
            }
        }
    }

    pub fn new_game(&mut self) {
        match self.session.new_game(self.roots) {
            Ok(()) => {
                self.stats.games_played += 1;
                self.input_buffer.clear();
                self.alert = None;
                self.input_mode = InputMode::Typing;
                self.messages.clear();
                self.add_message(
                    &format!(
                        "New game! Root word: {}",
                        self.session.root().to_uppercase()
                    ),
                    MessageStyle::Info,
                );
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
        self.input_mode = InputMode::Typing;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Alert => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                    self.dismiss_alert();
                }
            }
            InputMode::Typing => match key.code {
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.new_game();
                }
                KeyCode::Esc => {
                    self.should_quit = true;
                }
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.input_buffer.push(c);
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => {
                    self.submit_input();
                }
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R, C>(app: App<'_, R, C>) -> Result<()>
where
    R: RootWordSource + ?Sized,
    C: SpellChecker + ?Sized,
{
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B, R, C>(terminal: &mut Terminal<B>, mut app: App<'_, R, C>) -> Result<()>
where
    B: ratatui::backend::Backend,
    R: RootWordSource + ?Sized,
    C: SpellChecker + ?Sized,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordList;

    fn lists() -> (WordList, WordList) {
        (
            WordList::from_words(["astronomer"], Language::english()),
            WordList::embedded_dictionary(),
        )
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_word<R, C>(app: &mut App<'_, R, C>, word: &str)
    where
        R: RootWordSource + ?Sized,
        C: SpellChecker + ?Sized,
    {
        for c in word.chars() {
            app.handle_key(press(KeyCode::Char(c)));
        }
        app.handle_key(press(KeyCode::Enter));
    }

    #[test]
    fn accepted_word_updates_session() {
        let (roots, dictionary) = lists();
        let mut app = App::new(&roots, &dictionary, Language::english()).unwrap();

        type_word(&mut app, "moon");

        assert_eq!(app.session.used_words(), ["moon"]);
        assert_eq!(app.session.score(), 4);
        assert_eq!(app.stats.best_score, 4);
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.input_mode, InputMode::Typing);
    }

    #[test]
    fn rejection_opens_alert_and_clears_input() {
        let (roots, dictionary) = lists();
        let mut app = App::new(&roots, &dictionary, Language::english()).unwrap();

        type_word(&mut app, "xyzzy");

        assert_eq!(app.input_mode, InputMode::Alert);
        assert_eq!(app.alert, Some(Alert::from(Rejection::NotPossible)));
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.session.score(), 0);

        // Typing is ignored until the alert is dismissed
        app.handle_key(press(KeyCode::Char('m')));
        assert!(app.input_buffer.is_empty());

        app.handle_key(press(KeyCode::Enter));
        assert_eq!(app.input_mode, InputMode::Typing);
        assert!(app.alert.is_none());
    }

    #[test]
    fn backspace_edits_input() {
        let (roots, dictionary) = lists();
        let mut app = App::new(&roots, &dictionary, Language::english()).unwrap();

        app.handle_key(press(KeyCode::Char('m')));
        app.handle_key(press(KeyCode::Char('x')));
        app.handle_key(press(KeyCode::Backspace));
        assert_eq!(app.input_buffer, "m");
    }

    #[test]
    fn empty_submission_is_ignored() {
        let (roots, dictionary) = lists();
        let mut app = App::new(&roots, &dictionary, Language::english()).unwrap();

        app.handle_key(press(KeyCode::Enter));
        assert_eq!(app.input_mode, InputMode::Typing);
        assert_eq!(app.stats.rejections, 0);
    }

    #[test]
    fn ctrl_n_starts_new_game() {
        let (roots, dictionary) = lists();
        let mut app = App::new(&roots, &dictionary, Language::english()).unwrap();

        type_word(&mut app, "moon");
        app.handle_key(ctrl('n'));

        assert!(app.session.used_words().is_empty());
        assert_eq!(app.session.score(), 0);
        assert_eq!(app.stats.games_played, 2);
        assert_eq!(app.stats.best_score, 4);
    }

    #[test]
    fn quit_keys() {
        let (roots, dictionary) = lists();

        let mut app = App::new(&roots, &dictionary, Language::english()).unwrap();
        app.handle_key(press(KeyCode::Esc));
        assert!(app.should_quit);

        let mut app = App::new(&roots, &dictionary, Language::english()).unwrap();
        app.handle_key(ctrl('c'));
        assert!(app.should_quit);
    }

    #[test]
    fn new_app_needs_root_words() {
        let roots = WordList::from_words(Vec::<&str>::new(), Language::english());
        let dictionary = WordList::embedded_dictionary();
        assert!(App::new(&roots, &dictionary, Language::english()).is_err());
    }

    #[test]
    fn messages_are_capped() {
        let (roots, dictionary) = lists();
        let mut app = App::new(&roots, &dictionary, Language::english()).unwrap();

        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[4].text, "message 9");
    }
}
