use serde::{Deserialize, Serialize};

/// Poster host, fixed at 500px width.
pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// Backdrop host, original resolution.
pub const BACKDROP_BASE_URL: &str = "https://image.tmdb.org/t/p/original";

/// Shown in place of a poster when TMDB has none.
pub const PLACEHOLDER_POSTER_URL: &str = "https://via.placeholder.com/200x300?text=No+Image";

const YOUTUBE_EMBED_BASE_URL: &str = "https://www.youtube.com/embed/";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: u64,
    pub title: String,
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub release_date: String,
    pub backdrop_path: Option<String>,
}

impl MovieSummary {
    /// Poster URL, or the placeholder when the movie has no poster.
    pub fn poster_url(&self) -> String {
        match self.poster_path.as_deref() {
            Some(path) if !path.is_empty() => format!("{}{}", POSTER_BASE_URL, path),
            _ => PLACEHOLDER_POSTER_URL.to_string(),
        }
    }

    pub fn backdrop_url(&self) -> Option<String> {
        self.backdrop_path
            .as_deref()
            .filter(|path| !path.is_empty())
            .map(|path| format!("{}{}", BACKDROP_BASE_URL, path))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieList {
    #[serde(default)]
    pub results: Vec<MovieSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    #[serde(rename = "type")]
    pub kind: String,
    pub site: String,
    pub key: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoList {
    #[serde(default)]
    pub results: Vec<Video>,
}

/// The YouTube key of a movie's trailer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailerRef {
    pub key: String,
}

/// Picks the first YouTube trailer in API order. No secondary ordering is
/// applied, so an earlier fan upload wins over a later official one.
pub fn find_trailer(videos: &[Video]) -> Option<TrailerRef> {
    videos
        .iter()
        .find(|video| video.kind == "Trailer" && video.site == "YouTube")
        .map(|video| TrailerRef {
            key: video.key.clone(),
        })
}

/// A movie whose trailer lookup succeeded; backs the trailer overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedMovie {
    pub movie: MovieSummary,
    pub trailer: TrailerRef,
}

impl SelectedMovie {
    pub fn new(movie: MovieSummary, trailer: TrailerRef) -> Self {
        Self { movie, trailer }
    }

    /// Embed player URL with autoplay enabled.
    pub fn embed_url(&self) -> String {
        format!(
            "{}{}?autoplay=1",
            YOUTUBE_EMBED_BASE_URL,
            urlencoding::encode(&self.trailer.key)
        )
    }
}
