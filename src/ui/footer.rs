use crate::ui::view::{CatalogStatus, CatalogView};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Text,
    widgets::{Block, Borders, Paragraph},
};

/// Returns the appropriate instruction text for what is on screen
fn get_instruction_text(view: &CatalogView) -> &'static str {
    if view.notice.is_some() {
        "(Enter) OK"
    } else if view.overlay.is_some() {
        "(o/Enter) play trailer in browser, (Esc/x) close, (q) quit"
    } else if view.searching {
        "(Enter) to search, (Esc) to cancel"
    } else {
        match view.status {
            CatalogStatus::MissingApiKey => "(q) to quit",
            CatalogStatus::Loading => "Loading movies... (q) to quit",
            CatalogStatus::Failed { .. } => "(r) retry, (/) search, (q) quit",
            CatalogStatus::Ready => {
                if view.cards.is_empty() {
                    "(/) to search movies, (q) to quit"
                } else {
                    "(↑↓/jk) scroll, (Enter/click) trailer, (/) search, (q) quit"
                }
            }
        }
    }
}

/// Renders the footer with instructions at the bottom of the screen
pub fn render_footer(frame: &mut Frame, view: &CatalogView, area: Rect) {
    let bottom_block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default());

    let instruction_text = get_instruction_text(view);
    let bottom = Paragraph::new(Text::styled(instruction_text, Style::default()))
        .block(bottom_block);

    frame.render_widget(bottom, area);
}
