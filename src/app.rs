pub mod fetch;
pub mod movie;
pub mod tmdb;

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use chrono::{DateTime, Local};
use ratatui::layout::{Position, Rect};
use ratatui::widgets::ListState;
use ratatui_image::picker::Picker;
use ratatui_image::protocol::StatefulProtocol;
use throbber_widgets_tui::ThrobberState;

use crate::app::fetch::{
    ListRequest, MovieFetchMessage, RequestSeq, spawn_backdrop_fetch, spawn_list_fetch,
    spawn_trailer_fetch,
};
use crate::app::movie::{MovieSummary, SelectedMovie};
use crate::app::tmdb::MovieSource;
use crate::ui::movie_card::{CARD_HEIGHT, MovieCard};

pub const NO_TRAILER_NOTICE: &str = "No trailer available";

/// A list load that failed; the catalog keeps its previous movies.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadFailure {
    pub request: ListRequest,
    pub message: String,
}

/// Catalog state: the shown movies, the search text and the open trailer.
pub struct App {
    pub movies: Vec<MovieSummary>,
    pub query: String,
    pub selected: Option<SelectedMovie>,
    /// Blocking notices, oldest first. The UI shows the front one until it is
    /// acknowledged.
    pub notices: VecDeque<String>,
    pub load_error: Option<LoadFailure>,
    pub loading: bool,
    pub loading_trailer: bool,
    pub searching: bool,
    pub list_state: ListState,
    pub last_updated: Option<DateTime<Local>>,
    pub throbber_state: ThrobberState,
    pub picker: Option<Picker>,
    pub backdrop: Option<StatefulProtocol>,
    pub show_backdrop: bool,
    /// Screen regions from the last draw, used to resolve mouse clicks.
    pub catalog_area: Rect,
    pub overlay_area: Rect,
    pub close_area: Rect,
    source: Option<Arc<dyn MovieSource>>,
    sender: Sender<MovieFetchMessage>,
    receiver: Receiver<MovieFetchMessage>,
    list_seq: RequestSeq,
    trailer_seq: RequestSeq,
}

impl App {
    pub fn new(source: Option<Arc<dyn MovieSource>>, show_backdrop: bool) -> Self {
        let (sender, receiver) = mpsc::channel();

        Self {
            movies: Vec::new(),
            query: String::new(),
            selected: None,
            notices: VecDeque::new(),
            load_error: None,
            loading: false,
            loading_trailer: false,
            searching: false,
            list_state: ListState::default(),
            last_updated: None,
            throbber_state: ThrobberState::default(),
            picker: None,
            backdrop: None,
            show_backdrop,
            catalog_area: Rect::default(),
            overlay_area: Rect::default(),
            close_area: Rect::default(),
            source,
            sender,
            receiver,
            list_seq: RequestSeq::default(),
            trailer_seq: RequestSeq::default(),
        }
    }

    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    pub fn load_popular(&mut self) {
        self.request_list(ListRequest::Popular);
    }

    /// Searches for `query`. Blank queries are ignored and leave the current
    /// list in place.
    pub fn search(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }
        self.request_list(ListRequest::Search(query.to_string()));
    }

    /// Submits the text typed into the search box. The text stays in the box.
    pub fn submit_search(&mut self) {
        let query = self.query.clone();
        self.search(&query);
    }

    /// Reissues the request behind the current load error, if any.
    pub fn retry(&mut self) {
        if let Some(failure) = self.load_error.take() {
            self.request_list(failure.request);
        }
    }

    fn request_list(&mut self, request: ListRequest) {
        let Some(source) = self.source.clone() else {
            tracing::warn!(%request, "no TMDB credentials configured, skipping request");
            return;
        };

        let seq = self.list_seq.next();
        tracing::debug!(seq, %request, "requesting movie list");
        self.loading = true;
        spawn_list_fetch(source, self.sender.clone(), seq, request);
    }

    /// Looks up the trailer of `movie`. The overlay opens once a YouTube
    /// trailer is found.
    pub fn select_movie(&mut self, movie: &MovieSummary) {
        let Some(source) = self.source.clone() else {
            return;
        };

        let seq = self.trailer_seq.next();
        tracing::debug!(seq, movie_id = movie.id, "requesting trailer");
        self.loading_trailer = true;
        spawn_trailer_fetch(source, self.sender.clone(), seq, movie.clone());
    }

    pub fn dismiss(&mut self) {
        self.selected = None;
        self.backdrop = None;
    }

    pub fn notify(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!(%message, "notice");
        self.notices.push_back(message);
    }

    pub fn acknowledge_notice(&mut self) {
        self.notices.pop_front();
    }

    /// Hands the selected trailer's embed URL to the system browser.
    pub fn open_trailer(&mut self) {
        let Some(url) = self.selected.as_ref().map(SelectedMovie::embed_url) else {
            return;
        };
        if let Err(error) = open::that(&url) {
            tracing::warn!(%url, %error, "failed to open trailer");
            self.notify(format!("Could not open trailer: {}", error));
        }
    }

    pub fn highlighted_movie(&self) -> Option<&MovieSummary> {
        self.list_state
            .selected()
            .and_then(|index| self.movies.get(index))
    }

    /// Acts like a click on the highlighted card.
    pub fn activate_highlighted(&mut self) {
        if let Some(movie) = self.highlighted_movie().cloned() {
            MovieCard::new(&movie).click(|movie| self.select_movie(movie));
        }
    }

    pub fn next_movie(&mut self) {
        let movie_count = self.movies.len();
        if movie_count == 0 {
            return;
        }

        let next = match self.list_state.selected() {
            Some(index) => (index + 1) % movie_count,
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    pub fn previous_movie(&mut self) {
        let movie_count = self.movies.len();
        if movie_count == 0 {
            return;
        }

        let previous = match self.list_state.selected() {
            Some(0) | None => movie_count - 1,
            Some(index) => index - 1,
        };
        self.list_state.select(Some(previous));
    }

    /// Maps a terminal cell to the card drawn there during the last frame.
    pub fn card_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.catalog_area;
        let inner = Rect {
            x: area.x.saturating_add(1),
            y: area.y.saturating_add(1),
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };
        if !inner.contains(Position::new(column, row)) {
            return None;
        }

        let index = self.list_state.offset() + usize::from((row - inner.y) / CARD_HEIGHT);
        (index < self.movies.len()).then_some(index)
    }

    /// Resolves a left click against whatever is on top: a notice, the
    /// trailer overlay, or the catalog cards.
    pub fn handle_click(&mut self, column: u16, row: u16) {
        if !self.notices.is_empty() {
            self.acknowledge_notice();
            return;
        }

        let position = Position::new(column, row);
        if self.selected.is_some() {
            // Not drawn yet, so there is nothing to hit
            if self.overlay_area.is_empty() {
                return;
            }
            if self.close_area.contains(position) || !self.overlay_area.contains(position) {
                self.dismiss();
            }
            return;
        }

        if let Some(index) = self.card_at(column, row) {
            self.list_state.select(Some(index));
            self.activate_highlighted();
        }
    }

    pub fn tick(&mut self) {
        if self.loading || self.loading_trailer {
            self.throbber_state.calc_next();
        }
    }

    /// Applies every result the workers have reported so far.
    pub fn drain_messages(&mut self) {
        loop {
            match self.receiver.try_recv() {
                Ok(message) => self.handle_message(message),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
    }

    pub fn handle_message(&mut self, message: MovieFetchMessage) {
        match message {
            MovieFetchMessage::Movies {
                seq,
                request,
                result,
            } => {
                if !self.list_seq.is_current(seq) {
                    tracing::debug!(seq, latest = self.list_seq.issued(), %request, "discarding stale movie list");
                    return;
                }
                self.loading = false;

                match result {
                    Ok(movies) => {
                        tracing::info!(count = movies.len(), %request, "movie list loaded");
                        self.movies = movies;
                        self.load_error = None;
                        self.last_updated = Some(Local::now());
                        let first = if self.movies.is_empty() { None } else { Some(0) };
                        self.list_state = ListState::default();
                        self.list_state.select(first);
                    }
                    Err(error) => {
                        tracing::warn!(%request, %error, "movie list failed to load");
                        self.load_error = Some(LoadFailure {
                            request,
                            message: error.to_string(),
                        });
                    }
                }
            }
            MovieFetchMessage::Trailer { seq, movie, result } => {
                if !self.trailer_seq.is_current(seq) {
                    tracing::debug!(seq, movie_id = movie.id, "discarding stale trailer lookup");
                    return;
                }
                self.loading_trailer = false;

                match result {
                    Ok(Some(trailer)) => {
                        let selected = SelectedMovie::new(movie, trailer);
                        tracing::info!(movie_id = selected.movie.id, key = %selected.trailer.key, "trailer selected");
                        self.backdrop = None;
                        self.overlay_area = Rect::default();
                        self.close_area = Rect::default();
                        self.request_backdrop(seq, &selected.movie);
                        self.selected = Some(selected);
                    }
                    Ok(None) => self.notify(NO_TRAILER_NOTICE),
                    Err(error) => {
                        self.notify(format!("Could not load trailers for {}: {}", movie.title, error))
                    }
                }
            }
            MovieFetchMessage::Backdrop { seq, result } => {
                if !self.trailer_seq.is_current(seq) || self.selected.is_none() {
                    return;
                }
                match result {
                    Ok(image) => {
                        if let Some(picker) = &self.picker {
                            self.backdrop = Some(picker.new_resize_protocol(image));
                        }
                    }
                    Err(error) => tracing::warn!(%error, "backdrop failed to load"),
                }
            }
        }
    }

    fn request_backdrop(&mut self, seq: u64, movie: &MovieSummary) {
        if !self.show_backdrop || self.picker.is_none() {
            return;
        }
        let (Some(source), Some(url)) = (self.source.clone(), movie.backdrop_url()) else {
            return;
        };
        spawn_backdrop_fetch(source, self.sender.clone(), seq, url);
    }

    #[cfg(test)]
    fn wait_for_message(&mut self) {
        let message = self
            .receiver
            .recv_timeout(std::time::Duration::from_secs(5))
            .expect("worker did not report back");
        self.handle_message(message);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::app::movie::{TrailerRef, Video};
    use crate::app::tmdb::FetchError;

    fn movie(id: u64, title: &str) -> MovieSummary {
        MovieSummary {
            id,
            title: title.to_string(),
            poster_path: None,
            vote_average: 7.0,
            overview: format!("{} overview", title),
            release_date: "2024-01-01".to_string(),
            backdrop_path: None,
        }
    }

    fn video(kind: &str, site: &str, key: &str) -> Video {
        Video {
            kind: kind.to_string(),
            site: site.to_string(),
            key: key.to_string(),
            name: String::new(),
        }
    }

    #[derive(Default)]
    struct FakeSource {
        popular: Vec<MovieSummary>,
        search: Vec<MovieSummary>,
        videos: Vec<Video>,
        fail_popular: bool,
        fail_videos: bool,
        popular_calls: AtomicUsize,
        search_calls: AtomicUsize,
        queries: Mutex<Vec<String>>,
    }

    impl MovieSource for FakeSource {
        fn popular(&self) -> Result<Vec<MovieSummary>, FetchError> {
            self.popular_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_popular {
                return Err(FetchError::Decode(
                    serde_json::from_str::<u8>("not json").unwrap_err(),
                ));
            }
            Ok(self.popular.clone())
        }

        fn search(&self, query: &str) -> Result<Vec<MovieSummary>, FetchError> {
            self.search_calls.fetch_add(1, Ordering::SeqCst);
            self.queries.lock().unwrap().push(query.to_string());
            Ok(self.search.clone())
        }

        fn videos(&self, _movie_id: u64) -> Result<Vec<Video>, FetchError> {
            if self.fail_videos {
                return Err(FetchError::Decode(
                    serde_json::from_str::<u8>("<html>").unwrap_err(),
                ));
            }
            Ok(self.videos.clone())
        }

        fn image(&self, _url: &str) -> Result<Vec<u8>, FetchError> {
            Ok(Vec::new())
        }
    }

    fn app_with(source: FakeSource) -> (App, Arc<FakeSource>) {
        let source = Arc::new(source);
        let shared: Arc<dyn MovieSource> = source.clone();
        let app = App::new(Some(shared), false);
        (app, source)
    }

    #[test]
    fn test_load_popular_replaces_movies_in_api_order() {
        // Arrange
        let (mut app, _) = app_with(FakeSource {
            popular: vec![movie(3, "C"), movie(1, "A"), movie(2, "B")],
            ..FakeSource::default()
        });

        // Act
        app.load_popular();
        app.wait_for_message();

        // Assert
        let ids: Vec<u64> = app.movies.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert!(!app.loading);
        assert_eq!(app.list_state.selected(), Some(0));
        assert!(app.last_updated.is_some());
    }

    #[test]
    fn test_whitespace_search_issues_no_fetch() {
        // Arrange
        let (mut app, source) = app_with(FakeSource::default());
        app.movies = vec![movie(1, "A")];
        app.query = "   \t ".to_string();

        // Act
        app.submit_search();

        // Assert
        assert_eq!(source.search_calls.load(Ordering::SeqCst), 0);
        assert!(!app.loading);
        assert_eq!(app.movies, vec![movie(1, "A")]);
    }

    #[test]
    fn test_search_replaces_previous_list_without_merge() {
        // Arrange
        let (mut app, source) = app_with(FakeSource {
            popular: vec![movie(1, "A")],
            search: vec![
                movie(10, "Batman"),
                movie(11, "Batman Returns"),
                movie(12, "The Batman"),
            ],
            ..FakeSource::default()
        });
        app.load_popular();
        app.wait_for_message();
        app.query = "  batman ".to_string();

        // Act
        app.submit_search();
        app.wait_for_message();

        // Assert
        assert_eq!(app.movies.len(), 3);
        assert!(app.movies.iter().all(|m| m.id >= 10));
        assert_eq!(app.query, "  batman ");
        assert_eq!(*source.queries.lock().unwrap(), vec!["batman".to_string()]);
    }

    #[test]
    fn test_stale_list_response_is_discarded() {
        // Arrange
        let (mut app, _) = app_with(FakeSource {
            popular: vec![movie(1, "A")],
            search: vec![movie(10, "X"), movie(11, "Y"), movie(12, "Z")],
            ..FakeSource::default()
        });

        // Act: both requests are in flight; either may land first.
        app.load_popular();
        app.search("batman");
        app.wait_for_message();
        app.wait_for_message();

        // Assert
        assert_eq!(app.movies.len(), 3);
        assert!(!app.loading);
    }

    #[test]
    fn test_message_before_any_request_is_ignored() {
        // Arrange
        let (mut app, _) = app_with(FakeSource::default());
        app.movies = vec![movie(1, "A")];

        // Act
        app.handle_message(MovieFetchMessage::Movies {
            seq: 0,
            request: ListRequest::Popular,
            result: Ok(vec![movie(2, "B"), movie(3, "C")]),
        });

        // Assert
        assert_eq!(app.movies, vec![movie(1, "A")]);
    }

    #[test]
    fn test_older_list_landing_after_newer_is_discarded() {
        // Arrange: seq 1 and seq 2 issued; their worker replies stay queued.
        let (mut app, _) = app_with(FakeSource::default());
        app.load_popular();
        app.search("batman");

        // Act
        app.handle_message(MovieFetchMessage::Movies {
            seq: 2,
            request: ListRequest::Search("batman".to_string()),
            result: Ok(vec![movie(10, "X"), movie(11, "Y"), movie(12, "Z")]),
        });
        app.handle_message(MovieFetchMessage::Movies {
            seq: 1,
            request: ListRequest::Popular,
            result: Ok(vec![movie(1, "A")]),
        });

        // Assert
        let ids: Vec<u64> = app.movies.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![10, 11, 12]);
        assert!(!app.loading);
    }

    #[test]
    fn test_older_trailer_landing_after_newer_is_discarded() {
        // Arrange
        let (mut app, _) = app_with(FakeSource::default());
        app.select_movie(&movie(1, "A"));
        app.select_movie(&movie(2, "B"));

        // Act
        app.handle_message(MovieFetchMessage::Trailer {
            seq: 2,
            movie: movie(2, "B"),
            result: Ok(Some(TrailerRef {
                key: "newer".to_string(),
            })),
        });
        app.handle_message(MovieFetchMessage::Trailer {
            seq: 1,
            movie: movie(1, "A"),
            result: Ok(Some(TrailerRef {
                key: "older".to_string(),
            })),
        });

        // Assert
        let selected = app.selected.as_ref().unwrap();
        assert_eq!(selected.movie.id, 2);
        assert_eq!(selected.trailer.key, "newer");
        assert!(app.notices.is_empty());
    }

    #[test]
    fn test_trailer_lookup_failure_notifies_once_and_keeps_selection() {
        // Arrange
        let (mut app, _) = app_with(FakeSource {
            fail_videos: true,
            ..FakeSource::default()
        });
        let prior = SelectedMovie::new(
            movie(1, "A"),
            TrailerRef {
                key: "k".to_string(),
            },
        );
        app.selected = Some(prior.clone());

        // Act
        app.select_movie(&movie(2, "T1"));
        app.wait_for_message();

        // Assert
        assert_eq!(app.selected, Some(prior));
        assert_eq!(app.notices.len(), 1);
        assert!(app.notices[0].starts_with("Could not load trailers for T1"));
        assert!(!app.loading_trailer);
    }

    #[test]
    fn test_backdrop_after_dismiss_is_ignored() {
        // Arrange
        let (mut app, _) = app_with(FakeSource::default());
        app.picker = Some(Picker::halfblocks());
        app.select_movie(&movie(1, "A"));
        app.handle_message(MovieFetchMessage::Trailer {
            seq: 1,
            movie: movie(1, "A"),
            result: Ok(Some(TrailerRef {
                key: "k".to_string(),
            })),
        });
        app.handle_message(MovieFetchMessage::Backdrop {
            seq: 1,
            result: Ok(image::DynamicImage::new_rgb8(4, 4)),
        });
        assert!(app.backdrop.is_some());

        // Act
        app.dismiss();
        app.handle_message(MovieFetchMessage::Backdrop {
            seq: 1,
            result: Ok(image::DynamicImage::new_rgb8(4, 4)),
        });

        // Assert
        assert!(app.selected.is_none());
        assert!(app.backdrop.is_none());
    }

    #[test]
    fn test_click_before_overlay_is_drawn_keeps_it_open() {
        // Arrange: the previous overlay left its geometry behind
        let (mut app, _) = app_with(FakeSource::default());
        app.overlay_area = Rect::new(10, 5, 40, 10);
        app.select_movie(&movie(1, "A"));

        // Act
        app.handle_message(MovieFetchMessage::Trailer {
            seq: 1,
            movie: movie(1, "A"),
            result: Ok(Some(TrailerRef {
                key: "k".to_string(),
            })),
        });
        app.handle_click(50, 20);

        // Assert
        assert!(app.selected.is_some());
        assert!(app.overlay_area.is_empty());
    }

    #[test]
    fn test_failed_load_keeps_list_and_can_retry() {
        // Arrange
        let (mut app, source) = app_with(FakeSource {
            fail_popular: true,
            ..FakeSource::default()
        });
        app.movies = vec![movie(1, "A")];

        // Act
        app.load_popular();
        app.wait_for_message();

        // Assert
        assert_eq!(app.movies, vec![movie(1, "A")]);
        let failure = app.load_error.clone().unwrap();
        assert_eq!(failure.request, ListRequest::Popular);
        assert!(failure.message.contains("failed to decode"));

        // Act
        app.retry();
        app.wait_for_message();

        // Assert
        assert_eq!(source.popular_calls.load(Ordering::SeqCst), 2);
        assert!(app.load_error.is_some());
    }

    #[test]
    fn test_select_movie_picks_first_youtube_trailer() {
        // Arrange
        let (mut app, _) = app_with(FakeSource {
            videos: vec![
                video("Teaser", "YouTube", "teaser"),
                video("Trailer", "Vimeo", "vimeo"),
                video("Trailer", "YouTube", "yt-1"),
                video("Trailer", "YouTube", "yt-2"),
            ],
            ..FakeSource::default()
        });

        // Act
        app.select_movie(&movie(5, "E"));
        app.wait_for_message();

        // Assert
        let selected = app.selected.as_ref().unwrap();
        assert_eq!(selected.movie.id, 5);
        assert_eq!(
            selected.trailer,
            TrailerRef {
                key: "yt-1".to_string()
            }
        );
        assert!(app.notices.is_empty());
    }

    #[test]
    fn test_select_movie_without_trailer_notifies_once() {
        // Arrange
        let (mut app, _) = app_with(FakeSource {
            videos: vec![video("Clip", "YouTube", "clip")],
            ..FakeSource::default()
        });

        // Act
        app.select_movie(&movie(5, "E"));
        app.wait_for_message();

        // Assert
        assert!(app.selected.is_none());
        assert_eq!(app.notices.len(), 1);
        assert_eq!(app.notices[0], NO_TRAILER_NOTICE);
    }

    #[test]
    fn test_select_without_trailer_keeps_prior_selection() {
        // Arrange
        let (mut app, _) = app_with(FakeSource::default());
        let prior = SelectedMovie::new(
            movie(1, "A"),
            TrailerRef {
                key: "k".to_string(),
            },
        );
        app.selected = Some(prior.clone());

        // Act
        app.select_movie(&movie(2, "B"));
        app.wait_for_message();

        // Assert
        assert_eq!(app.selected, Some(prior));
        assert_eq!(app.notices.len(), 1);
    }

    #[test]
    fn test_dismiss_clears_selection() {
        // Arrange
        let (mut app, _) = app_with(FakeSource::default());
        app.selected = Some(SelectedMovie::new(
            movie(1, "A"),
            TrailerRef {
                key: "k".to_string(),
            },
        ));

        // Act
        app.dismiss();
        app.dismiss();

        // Assert
        assert!(app.selected.is_none());
    }

    #[test]
    fn test_acknowledge_notice_pops_oldest() {
        let (mut app, _) = app_with(FakeSource::default());
        app.notify("first");
        app.notify("second");

        app.acknowledge_notice();

        assert_eq!(app.notices.front().map(String::as_str), Some("second"));
    }

    #[test]
    fn test_navigation_wraps_around() {
        // Arrange
        let (mut app, _) = app_with(FakeSource::default());
        app.movies = vec![movie(1, "A"), movie(2, "B"), movie(3, "C")];
        app.list_state.select(Some(0));

        // Act & Assert
        app.previous_movie();
        assert_eq!(app.list_state.selected(), Some(2));
        app.next_movie();
        assert_eq!(app.list_state.selected(), Some(0));
        app.next_movie();
        assert_eq!(app.highlighted_movie().map(|m| m.id), Some(2));
    }

    #[test]
    fn test_card_at_maps_rows_to_cards() {
        // Arrange
        let (mut app, _) = app_with(FakeSource::default());
        app.movies = vec![movie(1, "A"), movie(2, "B")];
        app.catalog_area = Rect::new(0, 3, 40, 20);

        // Act & Assert
        assert_eq!(app.card_at(5, 3), None);
        assert_eq!(app.card_at(5, 4), Some(0));
        assert_eq!(app.card_at(5, 4 + CARD_HEIGHT), Some(1));
        assert_eq!(app.card_at(5, 4 + 2 * CARD_HEIGHT), None);
        assert_eq!(app.card_at(0, 4), None);
    }

    #[test]
    fn test_click_on_card_selects_that_movie() {
        // Arrange
        let (mut app, _) = app_with(FakeSource {
            videos: vec![video("Trailer", "YouTube", "yt")],
            ..FakeSource::default()
        });
        app.movies = vec![movie(1, "A"), movie(2, "B")];
        app.catalog_area = Rect::new(0, 0, 40, 20);

        // Act
        app.handle_click(3, 1 + CARD_HEIGHT);
        app.wait_for_message();

        // Assert
        assert_eq!(app.list_state.selected(), Some(1));
        assert_eq!(app.selected.as_ref().map(|s| s.movie.id), Some(2));
    }

    #[test]
    fn test_click_outside_overlay_dismisses() {
        // Arrange
        let (mut app, _) = app_with(FakeSource::default());
        app.selected = Some(SelectedMovie::new(
            movie(1, "A"),
            TrailerRef {
                key: "k".to_string(),
            },
        ));
        app.overlay_area = Rect::new(10, 5, 40, 10);
        app.close_area = Rect::new(40, 5, 9, 1);

        // Act & Assert: inside the content keeps it open
        app.handle_click(20, 8);
        assert!(app.selected.is_some());

        app.handle_click(42, 5);
        assert!(app.selected.is_none());
    }

    #[test]
    fn test_click_on_background_dismisses() {
        let (mut app, _) = app_with(FakeSource::default());
        app.selected = Some(SelectedMovie::new(
            movie(1, "A"),
            TrailerRef {
                key: "k".to_string(),
            },
        ));
        app.overlay_area = Rect::new(10, 5, 40, 10);

        app.handle_click(1, 1);

        assert!(app.selected.is_none());
    }

    #[test]
    fn test_without_source_nothing_is_requested() {
        let mut app = App::new(None, false);

        app.load_popular();
        app.search("batman");

        assert!(!app.loading);
        assert!(!app.has_source());
    }
}
