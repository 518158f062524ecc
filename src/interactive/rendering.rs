//! TUI rendering with ratatui
//!
//! One screen per stage: start, game and game over.

use super::app::{App, MessageStyle};
use crate::core::{MAX_GUESSES, Stage, Tile};
use crate::output::formatters::{HIDDEN_PLACEHOLDER, SEPARATOR_MARK, letters_to_list};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Stage screen
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    match app.session.stage() {
        Stage::Start => render_start(f, chunks[1]),
        Stage::Playing => render_game(f, app, chunks[1]),
        Stage::Ended => render_game_over(f, app, chunks[1]),
    }

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 SECRET WORD")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_start(f: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Secret Word",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Press Enter to start playing"),
        Line::from(""),
        Line::from(Span::styled(
            "Esc to quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_game(f: &mut Frame, app: &App, area: Rect) {
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Word panel
            Constraint::Percentage(40), // Info panel
        ])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(7),    // Hint and tiles
            Constraint::Length(3), // Input box
            Constraint::Length(3), // Letters already used
        ])
        .split(main_chunks[0]);

    render_word(f, app, left[0]);
    render_input(f, app, left[1]);
    render_wrong_letters(f, app, left[2]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Guesses gauge
            Constraint::Min(5),    // Messages
        ])
        .split(main_chunks[1]);

    render_guesses(f, app, right[0]);
    render_messages(f, app, right[1]);
}

fn render_word(f: &mut Frame, app: &App, area: Rect) {
    let board = app.session.board();

    let tile_spans: Vec<Span> = board
        .tiles
        .iter()
        .flat_map(|tile| {
            let span = match tile {
                Tile::Revealed(c) => Span::styled(
                    format!("[{c}]"),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Tile::Hidden => Span::styled(
                    format!("[{HIDDEN_PLACEHOLDER}]"),
                    Style::default().fg(Color::White),
                ),
                Tile::Separator => Span::styled(
                    format!(" {SEPARATOR_MARK} "),
                    Style::default().fg(Color::DarkGray),
                ),
            };
            [span, Span::raw(" ")]
        })
        .collect();

    let content = vec![
        Line::from(vec![
            Span::raw("Score: "),
            Span::styled(
                board.score.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw("Hint about the word: "),
            Span::styled(
                board.category.to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("You still have {} guess(es)", board.remaining_guesses)),
        Line::from(""),
        Line::from(tile_spans),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Guess the Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let input = Paragraph::new(app.input_buffer.as_str())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Try a letter of the word | Enter to play ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );

    f.render_widget(input, area);
}

fn render_wrong_letters(f: &mut Frame, app: &App, area: Rect) {
    let used = Paragraph::new(letters_to_list(app.session.wrong_letters()))
        .style(Style::default().fg(Color::Red))
        .block(
            Block::default()
                .title(" Letters already used ")
                .borders(Borders::ALL),
        );

    f.render_widget(used, area);
}

fn render_guesses(f: &mut Frame, app: &App, area: Rect) {
    let remaining = app.session.remaining_guesses();
    let percent = (remaining * 100 / MAX_GUESSES).min(100) as u16;

    let color = match remaining {
        0 | 1 => Color::Red,
        2 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Guesses Left ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{remaining}/{MAX_GUESSES}"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
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

    f.render_widget(messages_list, area);
}

fn render_game_over(f: &mut Frame, app: &App, area: Rect) {
    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "GAME OVER",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("Your score was: "),
            Span::styled(
                app.session.score().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    if !app.session.picked_word().is_empty() {
        content.push(Line::from(format!(
            "The word was: {}",
            app.session.picked_word().to_uppercase()
        )));
    }

    content.extend([
        Line::from(""),
        Line::from("Press Enter to play again"),
        Line::from(Span::styled(
            "Esc to quit",
            Style::default().fg(Color::DarkGray),
        )),
    ]);

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Red)),
        );
    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let stage_text = match app.session.stage() {
        Stage::Start => "Stage: Start",
        Stage::Playing => "Stage: Playing",
        Stage::Ended => "Stage: Game Over",
    };
    let stage = Paragraph::new(stage_text).alignment(Alignment::Center);
    f.render_widget(stage, chunks[0]);

    let stats_text = format!(
        "Games: {} | Words: {} | Best: {}",
        app.stats.games_played, app.stats.rounds_won, app.stats.best_score
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = match app.session.stage() {
        Stage::Start => "Enter: Play | Esc: Quit",
        Stage::Playing => "Type a letter | Enter: Submit | Backspace: Clear | Esc: Quit",
        Stage::Ended => "Enter: Play Again | Esc: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
