use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};
use throbber_widgets_tui::{BRAILLE_SIX, Throbber, ThrobberState};

/// Spinner shown while the first movie list is on its way
pub fn render_loading(frame: &mut Frame, state: &mut ThrobberState, area: Rect) {
    let loading_block = Block::default()
        .title("Loading Movies")
        .borders(Borders::ALL)
        .style(Style::default());

    let inner_area = loading_block.inner(area);
    frame.render_widget(loading_block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(inner_area);

    render_throbber(frame, state, "Fetching movies from TMDB...", rows[1]);
}

pub fn render_throbber(frame: &mut Frame, state: &mut ThrobberState, label: &str, area: Rect) {
    let throbber = Throbber::default()
        .label(label.to_string())
        .style(Style::default().fg(Color::Cyan))
        .throbber_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .throbber_set(BRAILLE_SIX);

    frame.render_stateful_widget(throbber, area, state);
}
