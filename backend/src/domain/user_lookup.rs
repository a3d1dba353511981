//! Use-case fetching user records from the remote directory.

use std::sync::Arc;

use tracing::{debug, warn};

use super::ports::{UserSource, UserSourceError};
use super::{Error, UserId, UserRecord};

impl From<UserSourceError> for Error {
    fn from(value: UserSourceError) -> Self {
        match value {
            UserSourceError::ResponseNotOk { .. } | UserSourceError::Transport { .. } => {
                Self::service_unavailable(value.to_string())
            }
            UserSourceError::Decode { .. } => Self::internal(value.to_string()),
        }
    }
}

/// Fetch one record from `source`.
///
/// Performs exactly one lookup and surfaces port failures untouched.
///
/// # Errors
///
/// Returns whatever [`UserSourceError`] the source reports.
pub async fn fetch_user_data(
    source: &dyn UserSource,
    id: &UserId,
) -> Result<UserRecord, UserSourceError> {
    source.fetch_user(id).await
}

/// Service wrapping a [`UserSource`] for inbound adapters.
#[derive(Clone)]
pub struct UserLookupService {
    source: Arc<dyn UserSource>,
}

impl UserLookupService {
    /// Build the service around a source.
    #[must_use]
    pub fn new(source: Arc<dyn UserSource>) -> Self {
        Self { source }
    }

    /// Look `id` up, translating failures into domain errors.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] with code `service_unavailable` when the directory is
    /// unreachable or answers with a non-success status, and `internal_error`
    /// when its body cannot be decoded. The message is the port error's.
    pub async fn fetch_user_data(&self, id: &UserId) -> Result<UserRecord, Error> {
        debug!(user_id = %id, "fetching user record");
        fetch_user_data(self.source.as_ref(), id)
            .await
            .map_err(|err| {
                warn!(user_id = %id, error = %err, "user lookup failed");
                Error::from(err)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::MockUserSource;
    use mockall::predicate::eq;
    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn leanne() -> UserRecord {
        UserRecord::new(json!({
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
        }))
    }

    #[rstest]
    #[tokio::test]
    async fn returns_the_record_from_a_single_call(leanne: UserRecord) {
        let mut source = MockUserSource::new();
        let expected = leanne.clone();
        source
            .expect_fetch_user()
            .with(eq(UserId::from(1)))
            .times(1)
            .return_once(move |_| Ok(expected));

        let service = UserLookupService::new(Arc::new(source));
        let record = service
            .fetch_user_data(&UserId::from(1))
            .await
            .expect("lookup succeeds");

        assert_eq!(record, leanne);
    }

    #[rstest]
    #[case::not_ok(
        UserSourceError::response_not_ok(500_u16),
        ErrorCode::ServiceUnavailable
    )]
    #[case::transport(UserSourceError::transport("refused"), ErrorCode::ServiceUnavailable)]
    #[case::decode(UserSourceError::decode("eof"), ErrorCode::InternalError)]
    #[tokio::test]
    async fn maps_port_failures(#[case] failure: UserSourceError, #[case] code: ErrorCode) {
        let message = failure.to_string();
        let mut source = MockUserSource::new();
        source
            .expect_fetch_user()
            .times(1)
            .return_once(move |_| Err(failure));

        let service = UserLookupService::new(Arc::new(source));
        let err = service
            .fetch_user_data(&UserId::from(9999))
            .await
            .expect_err("lookup fails");

        assert_eq!(err.code(), code);
        assert_eq!(err.message(), message);
    }

    #[rstest]
    #[tokio::test]
    async fn free_function_passes_port_errors_through() {
        let mut source = MockUserSource::new();
        source
            .expect_fetch_user()
            .times(1)
            .return_once(|_| Err(UserSourceError::response_not_ok(404_u16)));

        let err = fetch_user_data(&source, &UserId::from(9999))
            .await
            .expect_err("lookup fails");

        assert_eq!(err.to_string(), "Network response was no gud owo");
    }
}
