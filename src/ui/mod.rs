mod footer;
mod header;
mod loading;
mod main_content;
mod missing_key;
pub mod movie_card;
mod notice;
mod trailer_overlay;
#[allow(clippy::module_inception)]
mod ui;
pub mod view;

pub use ui::ui;

use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

/// A rectangle of `percent_x` by `percent_y` centered in `area`
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .split(vertical[0]);

    horizontal[0]
}
