//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::core::word_length;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<R: ?Sized, C: ?Sized>(f: &mut Frame, app: &App<'_, R, C>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Root word
            Constraint::Min(8),    // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Used words
            Constraint::Percentage(40), // Score and messages
        ])
        .split(chunks[1]);

    render_words(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, chunks[3]);

    if app.input_mode == InputMode::Alert {
        render_alert(f, app);
    }
}

fn render_header<R: ?Sized, C: ?Sized>(f: &mut Frame, app: &App<'_, R, C>, area: Rect) {
    let spaced: String = app
        .session
        .root()
        .to_uppercase()
        .chars()
        .map(|c| format!("{c} "))
        .collect();

    let header = Paragraph::new(spaced.trim_end().to_string())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Word Scramble ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_words<R: ?Sized, C: ?Sized>(f: &mut Frame, app: &App<'_, R, C>, area: Rect) {
    let items: Vec<ListItem> = if app.session.used_words().is_empty() {
        vec![ListItem::new("No words yet").style(Style::default().fg(Color::DarkGray))]
    } else {
        app.session
            .used_words()
            .iter()
            .map(|word| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:>3} ", word_length(word)),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::raw(word.clone()),
                ]))
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .title(format!(" Words ({}) ", app.session.used_words().len()))
            .borders(Borders::ALL),
    );

    f.render_widget(list, area);
}

fn render_info_panel<R: ?Sized, C: ?Sized>(f: &mut Frame, app: &App<'_, R, C>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(3)])
        .split(area);

    let score = vec![
        Line::from(vec![
            Span::raw("Score:      "),
            Span::styled(
                app.session.score().to_string(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("Best score: {}", app.stats.best_score)),
        Line::from(format!("Games:      {}", app.stats.games_played)),
        Line::from(format!("Rejected:   {}", app.stats.rejections)),
    ];

    let score = Paragraph::new(score).block(
        Block::default()
            .title(" Score ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(score, chunks[0]);

    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, chunks[1]);
}

fn render_input<R: ?Sized, C: ?Sized>(f: &mut Frame, app: &App<'_, R, C>, area: Rect) {
    let input = Paragraph::new(app.input_buffer.as_str())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Enter a word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, area: Rect) {
    let help = Paragraph::new("Enter: Submit | Ctrl-N: New Game | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

fn render_alert<R: ?Sized, C: ?Sized>(f: &mut Frame, app: &App<'_, R, C>) {
    let Some(alert) = &app.alert else {
        return;
    };

    let area = centered(f.area(), 50, 7);
    let content = vec![
        Line::from(alert.message),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to continue",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let popup = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {} ", alert.title))
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_type(BorderType::Thick)
                .style(Style::default().fg(Color::Red)),
        );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    area
}
