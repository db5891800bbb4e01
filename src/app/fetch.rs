use std::fmt;
use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread;

use image::DynamicImage;

use crate::app::movie::{MovieSummary, TrailerRef, find_trailer};
use crate::app::tmdb::{FetchError, MovieSource};

/// Which list a catalog fetch asks for. Kept around so a failed load can be
/// retried as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListRequest {
    Popular,
    Search(String),
}

impl fmt::Display for ListRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListRequest::Popular => write!(f, "popular movies"),
            ListRequest::Search(query) => write!(f, "search \"{}\"", query),
        }
    }
}

/// Monotonically increasing request counter. Only the most recently issued
/// ticket is current; results carrying an older one are stale.
#[derive(Debug, Default)]
pub struct RequestSeq {
    issued: u64,
}

impl RequestSeq {
    pub fn next(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    pub fn is_current(&self, seq: u64) -> bool {
        self.issued != 0 && seq == self.issued
    }

    pub fn issued(&self) -> u64 {
        self.issued
    }
}

/// Results sent back from worker threads to the UI thread.
pub enum MovieFetchMessage {
    Movies {
        seq: u64,
        request: ListRequest,
        result: Result<Vec<MovieSummary>, FetchError>,
    },
    Trailer {
        seq: u64,
        movie: MovieSummary,
        result: Result<Option<TrailerRef>, FetchError>,
    },
    Backdrop {
        seq: u64,
        result: Result<DynamicImage, FetchError>,
    },
}

pub fn spawn_list_fetch(
    source: Arc<dyn MovieSource>,
    sender: Sender<MovieFetchMessage>,
    seq: u64,
    request: ListRequest,
) {
    thread::spawn(move || {
        let result = match &request {
            ListRequest::Popular => source.popular(),
            ListRequest::Search(query) => source.search(query),
        };
        // The receiver is gone once the UI has shut down.
        let _ = sender.send(MovieFetchMessage::Movies {
            seq,
            request,
            result,
        });
    });
}

pub fn spawn_trailer_fetch(
    source: Arc<dyn MovieSource>,
    sender: Sender<MovieFetchMessage>,
    seq: u64,
    movie: MovieSummary,
) {
    thread::spawn(move || {
        let result = source.videos(movie.id).map(|videos| find_trailer(&videos));
        let _ = sender.send(MovieFetchMessage::Trailer { seq, movie, result });
    });
}

pub fn spawn_backdrop_fetch(
    source: Arc<dyn MovieSource>,
    sender: Sender<MovieFetchMessage>,
    seq: u64,
    url: String,
) {
    thread::spawn(move || {
        let result = source
            .image(&url)
            .and_then(|bytes| image::load_from_memory(&bytes).map_err(FetchError::from));
        let _ = sender.send(MovieFetchMessage::Backdrop { seq, result });
    });
}
