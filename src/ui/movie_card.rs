use crate::app::movie::MovieSummary;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};

/// Rows taken by one card in the catalog list.
pub const CARD_HEIGHT: u16 = 3;

/// What a card shows for one movie.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub id: u64,
    pub title: String,
    pub poster_url: String,
    pub rating: f64,
}

/// Stateless card for a single movie.
pub struct MovieCard<'a> {
    movie: &'a MovieSummary,
}

impl<'a> MovieCard<'a> {
    pub fn new(movie: &'a MovieSummary) -> Self {
        Self { movie }
    }

    pub fn view(&self) -> CardView {
        CardView {
            id: self.movie.id,
            title: self.movie.title.clone(),
            poster_url: self.movie.poster_url(),
            rating: self.movie.vote_average,
        }
    }

    /// A click on the card: hands the movie to `on_select`, once.
    pub fn click<F>(&self, on_select: F)
    where
        F: FnOnce(&MovieSummary),
    {
        on_select(self.movie)
    }
}

/// Draws a card as a three-line list item: title, rating, poster.
pub fn card_item(card: &CardView) -> ListItem<'static> {
    let content = vec![
        Line::from(Span::styled(
            card.title.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::raw("  ⭐ "),
            Span::styled(
                rating_text(card.rating),
                Style::default()
                    .fg(rating_color(card.rating))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("  {}", card.poster_url),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    ListItem::new(content)
}

/// The vote average exactly as TMDB reports it, without rounding.
pub fn rating_text(rating: f64) -> String {
    rating.to_string()
}

pub fn rating_color(rating: f64) -> Color {
    if rating >= 7.0 {
        Color::Green
    } else if rating >= 5.0 {
        Color::Yellow
    } else {
        Color::Red
    }
}
