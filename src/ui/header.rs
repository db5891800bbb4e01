use crate::app::App;
use crate::ui::view::CatalogView;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

/// Renders the title block and the search box at the top of the screen
pub fn render_header(frame: &mut Frame, app: &App, view: &CatalogView, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(10)])
        .split(area);

    let title_block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default());

    let title = Paragraph::new(Text::styled(
        "🎬 Movie Vine",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
    .block(title_block);

    frame.render_widget(title, chunks[0]);

    let mut search_block = Block::default().borders(Borders::ALL).title("Search");
    if let Some(updated) = app.last_updated {
        search_block = search_block
            .title_bottom(Line::from(format!(" updated {} ", updated.format("%H:%M"))).right_aligned());
    }

    let search_line = if view.searching {
        Line::from(vec![
            Span::styled(view.query.clone(), Style::default().fg(Color::White)),
            Span::styled("█", Style::default().fg(Color::Yellow)),
        ])
    } else if view.query.is_empty() {
        Line::from(Span::styled(
            "Search movies...",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(Span::styled(view.query.clone(), Style::default().fg(Color::Gray)))
    };

    let search_style = if view.searching {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let search = Paragraph::new(search_line).block(search_block.border_style(search_style));

    frame.render_widget(search, chunks[1]);
}
