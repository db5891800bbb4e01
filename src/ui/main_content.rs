use crate::app::App;
use crate::ui::loading::{render_loading, render_throbber};
use crate::ui::movie_card::card_item;
use crate::ui::view::{CatalogStatus, CatalogView};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

/// Renders the catalog: the card list, or the empty/loading/error state
pub fn render_main_content(frame: &mut Frame, app: &mut App, view: &CatalogView, area: Rect) {
    if view.status == CatalogStatus::Loading {
        render_loading(frame, &mut app.throbber_state, area);
        return;
    }

    let area = match &view.status {
        CatalogStatus::Failed { request, message } => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(4), Constraint::Min(3)])
                .split(area);
            render_load_error(frame, request, message, chunks[0]);
            chunks[1]
        }
        _ => area,
    };

    let area = if view.refreshing || view.loading_trailer {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(3)])
            .split(area);
        let label = if view.loading_trailer {
            "Looking for a trailer..."
        } else {
            "Refreshing movies..."
        };
        render_throbber(frame, &mut app.throbber_state, label, chunks[0]);
        chunks[1]
    } else {
        area
    };

    app.catalog_area = area;

    if view.cards.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No movies found",
            Style::default().fg(Color::Gray),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().title("Movies").borders(Borders::ALL));

        frame.render_widget(empty, area);
        return;
    }

    let title = format!("Movies ({})", view.cards.len());

    let items: Vec<ListItem> = view.cards.iter().map(card_item).collect();

    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

fn render_load_error(frame: &mut Frame, request: &str, message: &str, area: Rect) {
    let error_text = vec![
        Line::from(Span::styled(
            format!("Failed to load {}", request),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(message.to_string(), Style::default().fg(Color::Red))),
    ];

    let error_paragraph = Paragraph::new(error_text)
        .block(Block::default().title("Error - (r) to retry").borders(Borders::ALL))
        .wrap(Wrap { trim: true });

    frame.render_widget(error_paragraph, area);
}
