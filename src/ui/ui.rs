use crate::app::App;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use super::footer::render_footer;
use super::header::render_header;
use super::main_content::render_main_content;
use super::missing_key::render_missing_api_key;
use super::notice::render_notice;
use super::trailer_overlay::render_trailer_overlay;
use super::view::{CatalogStatus, project};

/// Main UI rendering function that orchestrates all UI components
pub fn ui(frame: &mut Frame, app: &mut App) {
    let view = project(app);
    let screen = frame.area();

    // Create the main layout: header, content area, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(screen);

    render_header(frame, app, &view, chunks[0]);

    if view.status == CatalogStatus::MissingApiKey {
        render_missing_api_key(frame, chunks[1]);
    } else {
        render_main_content(frame, app, &view, chunks[1]);
    }

    render_footer(frame, &view, chunks[2]);

    // The overlay covers the whole screen so clicks outside it can dismiss it
    if let Some(overlay) = &view.overlay {
        render_trailer_overlay(frame, app, overlay, screen);
    }

    if let Some(message) = &view.notice {
        render_notice(frame, message, screen);
    }
}
