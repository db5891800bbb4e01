use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::app::movie::{MovieList, MovieSummary, Video, VideoList};

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API request failed with status {status}: {message}")]
    Status { status: StatusCode, message: String },
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("failed to decode image: {0}")]
    Image(#[from] image::ImageError),
}

#[derive(Debug, Deserialize)]
struct TmdbErrorResponse {
    status_message: String,
}

/// Where the catalog gets its data from. Implemented over HTTP by
/// [`TmdbClient`]; tests substitute an in-memory source.
pub trait MovieSource: Send + Sync {
    fn popular(&self) -> Result<Vec<MovieSummary>, FetchError>;

    fn search(&self, query: &str) -> Result<Vec<MovieSummary>, FetchError>;

    fn videos(&self, movie_id: u64) -> Result<Vec<Video>, FetchError>;

    /// Raw bytes of an image hosted on the TMDB image CDN.
    fn image(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// Blocking TMDB v3 client. The key travels as the `api_key` query parameter.
#[derive(Debug)]
pub struct TmdbClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl TmdbClient {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, FetchError> {
        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T, FetchError> {
        let mut url = format!(
            "{}{}?api_key={}",
            self.base_url,
            path,
            urlencoding::encode(&self.api_key)
        );
        for (name, value) in query {
            url.push_str(&format!("&{}={}", name, urlencoding::encode(value)));
        }

        tracing::debug!(path, "TMDB API request");

        let response = self.http.get(&url).send()?;
        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            let message = match serde_json::from_str::<TmdbErrorResponse>(&body) {
                Ok(error) => error.status_message,
                Err(_) => body,
            };
            tracing::warn!(path, %status, %message, "TMDB API error");
            return Err(FetchError::Status { status, message });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

impl MovieSource for TmdbClient {
    fn popular(&self) -> Result<Vec<MovieSummary>, FetchError> {
        let list: MovieList = self.get_json("/movie/popular", &[])?;
        Ok(list.results)
    }

    fn search(&self, query: &str) -> Result<Vec<MovieSummary>, FetchError> {
        let list: MovieList = self.get_json("/search/movie", &[("query", query)])?;
        Ok(list.results)
    }

    fn videos(&self, movie_id: u64) -> Result<Vec<Video>, FetchError> {
        let list: VideoList = self.get_json(&format!("/movie/{}/videos", movie_id), &[])?;
        Ok(list.results)
    }

    fn image(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.http.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                message: format!("failed to download {}", url),
            });
        }
        Ok(response.bytes()?.to_vec())
    }
}
