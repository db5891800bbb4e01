use crate::app::App;
use crate::ui::centered_rect;
use crate::ui::movie_card::{rating_color, rating_text};
use crate::ui::view::OverlayView;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use ratatui_image::{Resize, StatefulImage, protocol::StatefulProtocol};

const CLOSE_LABEL: &str = "[x] close";

/// Renders the trailer overlay above the catalog
pub fn render_trailer_overlay(frame: &mut Frame, app: &mut App, overlay: &OverlayView, area: Rect) {
    let overlay_area = centered_rect(80, 85, area);
    frame.render_widget(Clear, overlay_area);

    let outer_block = Block::default()
        .title(format!(" {} ", overlay.title))
        .title_top(Line::from(CLOSE_LABEL).right_aligned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let inner_area = outer_block.inner(overlay_area);
    frame.render_widget(outer_block, overlay_area);

    let close_width = u16::try_from(CLOSE_LABEL.len()).unwrap_or(u16::MAX);
    app.overlay_area = overlay_area;
    app.close_area = Rect {
        x: overlay_area
            .right()
            .saturating_sub(close_width.saturating_add(1)),
        y: overlay_area.y,
        width: close_width,
        height: 1,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45), // Backdrop
            Constraint::Length(3),      // Player
            Constraint::Min(4),         // Details
        ])
        .split(inner_area);

    render_backdrop_section(frame, app, overlay, chunks[0]);
    render_player_section(frame, overlay, chunks[1]);
    render_details_section(frame, overlay, chunks[2]);
}

/// Renders the backdrop, or its URL when no image has been drawn
fn render_backdrop_section(frame: &mut Frame, app: &mut App, overlay: &OverlayView, area: Rect) {
    if let Some(protocol) = &mut app.backdrop {
        let image = StatefulImage::<StatefulProtocol>::default().resize(Resize::Fit(None));
        frame.render_stateful_widget(image, area, protocol);
        return;
    }

    let text = match &overlay.backdrop_url {
        Some(url) => vec![
            Line::from(""),
            Line::from(Span::styled("Backdrop", Style::default().fg(Color::Gray))),
            Line::from(Span::styled(url.clone(), Style::default().fg(Color::DarkGray))),
        ],
        None => vec![
            Line::from(""),
            Line::from(Span::styled(
                "No backdrop available",
                Style::default().fg(Color::Gray),
            )),
        ],
    };

    let placeholder = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(placeholder, area);
}

fn render_player_section(frame: &mut Frame, overlay: &OverlayView, area: Rect) {
    let player = Paragraph::new(Line::from(vec![
        Span::styled("▶ ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Span::styled(
            overlay.embed_url.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED),
        ),
    ]))
    .block(Block::default().title("Trailer").borders(Borders::ALL));

    frame.render_widget(player, area);
}

fn render_details_section(frame: &mut Frame, overlay: &OverlayView, area: Rect) {
    let content = vec![
        Line::from(Span::styled(
            overlay.title.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::raw("⭐ "),
            Span::styled(
                rating_text(overlay.rating),
                Style::default()
                    .fg(rating_color(overlay.rating))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            overlay.overview.clone(),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "Release Date: ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::ITALIC),
            ),
            Span::styled(overlay.release_date.clone(), Style::default().fg(Color::White)),
        ]),
    ];

    let details = Paragraph::new(content).wrap(Wrap { trim: true });
    frame.render_widget(details, area);
}
