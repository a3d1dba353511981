//! Reqwest-backed user directory adapter.
//!
//! Owns transport details only: URL construction, the status check and JSON
//! decoding. One GET per lookup; no retry, no timeout, no caching.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::ports::{UserSource, UserSourceError};
use crate::domain::{UserId, UserRecord};

/// Directory queried when no base URL is configured.
pub const DEFAULT_USERS_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

const DEFAULT_USER_AGENT: &str = "hello-kit/0.1";

/// Failures while building a [`UserHttpSource`].
#[derive(Debug, thiserror::Error)]
pub enum UserHttpSourceBuildError {
    /// The base URL cannot carry path segments (for example `mailto:`).
    #[error("user directory base URL cannot carry a path: {0}")]
    InvalidBaseUrl(Url),
    /// The base URL did not parse.
    #[error("invalid user directory base URL: {0}")]
    ParseBaseUrl(#[from] url::ParseError),
    /// The reqwest client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// User source performing `GET {base}/users/{id}`.
#[derive(Debug, Clone)]
pub struct UserHttpSource {
    client: Client,
    base_url: Url,
}

impl UserHttpSource {
    /// Build an adapter for the directory at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error when the base URL cannot take path segments or when
    /// the reqwest client cannot be constructed.
    pub fn new(base_url: Url) -> Result<Self, UserHttpSourceBuildError> {
        if base_url.cannot_be_a_base() {
            return Err(UserHttpSourceBuildError::InvalidBaseUrl(base_url));
        }
        let client = Client::builder().user_agent(DEFAULT_USER_AGENT).build()?;
        Ok(Self { client, base_url })
    }

    /// Build an adapter for [`DEFAULT_USERS_BASE_URL`].
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_default_base() -> Result<Self, UserHttpSourceBuildError> {
        Self::new(Url::parse(DEFAULT_USERS_BASE_URL)?)
    }

    /// Directory base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL the adapter requests for `id`.
    ///
    /// The identifier is percent-encoded as one path segment, so `a/b`
    /// cannot escape the `users` collection.
    #[must_use]
    pub fn user_url(&self, id: &UserId) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("users").push(id.as_ref());
        }
        url
    }
}

#[async_trait]
impl UserSource for UserHttpSource {
    async fn fetch_user(&self, id: &UserId) -> Result<UserRecord, UserSourceError> {
        let url = self.user_url(id);
        debug!(%url, "requesting user record");
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(map_status_error(status));
        }

        let body = response.bytes().await.map_err(map_transport_error)?;
        parse_record(body.as_ref())
    }
}

fn parse_record(body: &[u8]) -> Result<UserRecord, UserSourceError> {
    serde_json::from_slice::<Value>(body)
        .map(UserRecord::new)
        .map_err(|error| UserSourceError::decode(format!("invalid user JSON payload: {error}")))
}

fn map_transport_error(error: reqwest::Error) -> UserSourceError {
    UserSourceError::transport(error.to_string())
}

fn map_status_error(status: StatusCode) -> UserSourceError {
    warn!(
        status = status.as_u16(),
        "user directory answered with a non-success status"
    );
    UserSourceError::response_not_ok(status.as_u16())
}
