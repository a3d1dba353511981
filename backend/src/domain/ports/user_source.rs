//! Driven port for looking users up in the remote directory.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{UserId, UserRecord};

/// Message reported whenever the directory answers with a non-success status.
///
/// Mirrors the display text of [`UserSourceError::ResponseNotOk`].
pub const RESPONSE_NOT_OK_MESSAGE: &str = "Network response was no gud owo";

define_port_error! {
    /// Errors surfaced while calling the user directory.
    pub enum UserSourceError {
        /// The directory answered with a non-success status.
        ResponseNotOk { status: u16 } => "Network response was no gud owo",
        /// The request failed before a response arrived.
        Transport { message: String } => "user directory transport failed: {message}",
        /// The response body was not valid JSON.
        Decode { message: String } => "user directory response decode failed: {message}",
    }
}

/// Port for fetching one user record.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Fetch the record stored under `id`.
    ///
    /// Implementations issue at most one request per call and never retry.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use hello_kit::domain::UserId;
    /// use hello_kit::domain::ports::{FixtureUserSource, UserSource};
    ///
    /// let record = FixtureUserSource.fetch_user(&UserId::from(1)).await?;
    /// assert_eq!(record.as_value()["id"], 1);
    /// # Ok::<(), hello_kit::domain::ports::UserSourceError>(())
    /// ```
    async fn fetch_user(&self, id: &UserId) -> Result<UserRecord, UserSourceError>;
}

/// Fixture implementation echoing the identifier back in a minimal record.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureUserSource;

#[async_trait]
impl UserSource for FixtureUserSource {
    async fn fetch_user(&self, id: &UserId) -> Result<UserRecord, UserSourceError> {
        let id_value = id
            .as_ref()
            .parse::<u64>()
            .map_or_else(|_| serde_json::json!(id.as_ref()), serde_json::Value::from);
        Ok(UserRecord::new(serde_json::json!({ "id": id_value })))
    }
}
