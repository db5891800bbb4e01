use crate::config::{API_KEY_ENV, CONFIG_PATH_ENV};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tui_big_text::{BigText, PixelSize};

/// Renders missing API key error with big text
pub fn render_missing_api_key(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Big text
            Constraint::Min(5),    // Instructions
        ])
        .split(area);

    let big_text = BigText::builder()
        .pixel_size(PixelSize::Quadrant)
        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .lines(vec!["API KEY".into(), "REQUIRED!".into()])
        .alignment(Alignment::Center)
        .build();

    frame.render_widget(big_text, chunks[0]);

    let instructions = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Please set your TMDB API key to browse movies",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "1. Get a free key at: https://www.themoviedb.org/settings/api",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            format!("2. Set environment variable: export {}=your_key_here", API_KEY_ENV),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            format!("   or add api_key under [tmdb] in movie_vine/config.toml ({} overrides the path)", CONFIG_PATH_ENV),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "3. Restart the application",
            Style::default().fg(Color::White),
        )),
    ];

    let instructions_paragraph = Paragraph::new(instructions)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(instructions_paragraph, chunks[1]);
}
