// API client module: contains a small blocking HTTP client that talks to
// the remote photo catalog. Each call is a single GET round trip bounded
// by the transport's timeout; no state is kept between calls.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Production Photos API endpoint. Tests point [`ApiClient::base_url`] at
/// a local mock server instead.
pub const PHOTOS_URL: &str = "https://jsonplaceholder.typicode.com/photos";

/// Request timeout applied by [`ApiClient::from_env`], in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 5;

/// Simple API client that holds a reqwest blocking client and the base URL
/// of the photo catalog. `base_url` is public so callers (and tests) can
/// redirect the client at a different endpoint.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    pub base_url: String,
}

/// A single photo record as returned by the Photos API. Field names follow
/// the API's camelCase convention on the wire, so rendered output matches
/// what the server sent.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub album_id: i64,
    pub id: i64,
    pub title: String,
    pub url: String,
    pub thumbnail_url: String,
}

/// Ways a fetch can fail, classified by where the round trip broke down.
/// Each variant keeps the underlying cause so callers can inspect both the
/// category and the original diagnostic.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The configured endpoint could not be turned into a request URL.
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] url::ParseError),

    /// The transport could not complete the round trip (DNS failure,
    /// connection refused, timeout).
    #[error("failed to perform request: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// The API answered with something other than 200 OK.
    #[error("request failed with status code {0}")]
    InvalidStatus(StatusCode),

    /// The response body was not a well-formed list of photos.
    #[error("failed to decode response body: {0}")]
    DecodeFailed(#[from] serde_json::Error),
}

impl ApiClient {
    /// Create an ApiClient around the given transport, pointed at the
    /// production catalog. The transport should carry a request timeout;
    /// it bounds every call made through this client.
    pub fn new(client: Client) -> Self {
        ApiClient {
            client,
            base_url: PHOTOS_URL.to_string(),
        }
    }

    /// Create an ApiClient with a 5 second request timeout, honoring the
    /// `PHOTOS_API_URL` environment variable as an endpoint override.
    pub fn from_env() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to build HTTP client")?;
        let mut api = ApiClient::new(client);
        if let Ok(endpoint) = std::env::var("PHOTOS_API_URL") {
            api.base_url = endpoint;
        }
        Ok(api)
    }

    /// Fetch photos matching `filters`, a mapping of filter field name to
    /// the values accepted for that field. Every value becomes one repeated
    /// query parameter under its key: the server ORs values within a key
    /// and ANDs across keys. An empty mapping fetches the whole catalog.
    ///
    /// Recognized keys are `id`, `albumId`, `title`, `url` and
    /// `thumbnailUrl`; anything else is passed through untouched and
    /// ignored by the server. Records come back in server order and are
    /// decoded all-or-nothing.
    pub fn fetch_photos(&self, filters: &[(String, Vec<String>)]) -> Result<Vec<Photo>, ApiError> {
        let mut url = Url::parse(&self.base_url)?;
        if filters.iter().any(|(_, values)| !values.is_empty()) {
            let mut query = url.query_pairs_mut();
            for (key, values) in filters {
                for value in values {
                    query.append_pair(key, value);
                }
            }
        }

        let response = self.client.get(url).send()?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(ApiError::InvalidStatus(status));
        }

        let body = response.text()?;
        let photos: Vec<Photo> = serde_json::from_str(&body)?;
        Ok(photos)
    }
}
