//! Pure projection of catalog state into what the screen shows. The ratatui
//! widgets only ever draw a [`CatalogView`].

use chrono::NaiveDate;

use crate::app::App;
use crate::app::movie::SelectedMovie;
use crate::ui::movie_card::{CardView, MovieCard};

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogStatus {
    /// No credentials; nothing can be fetched.
    MissingApiKey,
    /// The first list is still on its way.
    Loading,
    /// The last load failed; the previous list (possibly empty) is kept.
    Failed { request: String, message: String },
    Ready,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayView {
    pub title: String,
    pub rating: f64,
    pub overview: String,
    pub release_date: String,
    pub embed_url: String,
    pub backdrop_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView {
    pub query: String,
    pub searching: bool,
    pub refreshing: bool,
    pub loading_trailer: bool,
    pub status: CatalogStatus,
    pub cards: Vec<CardView>,
    pub overlay: Option<OverlayView>,
    pub notice: Option<String>,
}

pub fn project(app: &App) -> CatalogView {
    let status = if !app.has_source() {
        CatalogStatus::MissingApiKey
    } else if let Some(failure) = &app.load_error {
        CatalogStatus::Failed {
            request: failure.request.to_string(),
            message: failure.message.clone(),
        }
    } else if app.loading && app.movies.is_empty() {
        CatalogStatus::Loading
    } else {
        CatalogStatus::Ready
    };

    CatalogView {
        query: app.query.clone(),
        searching: app.searching,
        refreshing: app.loading,
        loading_trailer: app.loading_trailer,
        status,
        cards: app
            .movies
            .iter()
            .map(|movie| MovieCard::new(movie).view())
            .collect(),
        overlay: app.selected.as_ref().map(overlay_view),
        notice: app.notices.front().cloned(),
    }
}

fn overlay_view(selected: &SelectedMovie) -> OverlayView {
    let movie = &selected.movie;
    OverlayView {
        title: movie.title.clone(),
        rating: movie.vote_average,
        overview: movie.overview.clone(),
        release_date: format_release_date(&movie.release_date),
        embed_url: selected.embed_url(),
        backdrop_url: movie.backdrop_url(),
    }
}

/// "2024-03-01" becomes "March 1, 2024"; anything else is shown as-is.
pub fn format_release_date(raw: &str) -> String {
    if raw.trim().is_empty() {
        return "Unknown".to_string();
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|date| date.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}
