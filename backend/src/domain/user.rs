//! Remote user directory data model.
//!
//! The directory owns the record shape; this crate only names the key it
//! looks records up by.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Validation errors returned by [`UserId::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserIdValidationError {
    /// The identifier was empty.
    #[error("user id must not be empty")]
    Empty,
    /// The identifier carried leading or trailing whitespace.
    #[error("user id must not contain surrounding whitespace")]
    SurroundingWhitespace,
}

/// Key of a record in the remote user directory.
///
/// Any non-empty text is accepted; the outbound adapter percent-encodes it as
/// a single path segment.
///
/// # Examples
/// ```
/// use hello_kit::domain::UserId;
///
/// assert_eq!(UserId::from(1_u64).as_ref(), "1");
/// assert!(UserId::new(" 1").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Validate and construct an identifier.
    ///
    /// # Errors
    ///
    /// Rejects empty identifiers and identifiers padded with whitespace.
    pub fn new(id: impl Into<String>) -> Result<Self, UserIdValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(UserIdValidationError::Empty);
        }
        if id.trim() != id {
            return Err(UserIdValidationError::SurroundingWhitespace);
        }
        Ok(Self(id))
    }
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserId {
    type Error = UserIdValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// User record exactly as the directory returned it.
///
/// Typically carries `id`, `name`, `username` and `email`, but no field is
/// checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object, example = json!({
    "id": 1,
    "name": "Leanne Graham",
    "username": "Bret",
    "email": "Sincere@april.biz"
}))]
pub struct UserRecord(Value);

impl UserRecord {
    /// Wrap a decoded JSON body.
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    /// Borrow the raw JSON.
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    /// Unwrap the raw JSON.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for UserRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case::numeric("1")]
    #[case::large("9999")]
    #[case::text("bret")]
    #[case::needs_encoding("a/b c")]
    fn accepts_non_blank_ids(#[case] raw: &str) {
        let id = UserId::new(raw).expect("valid id");
        assert_eq!(id.as_ref(), raw);
    }

    #[rstest]
    #[case::empty("", UserIdValidationError::Empty)]
    #[case::padded(" 1 ", UserIdValidationError::SurroundingWhitespace)]
    #[case::blank("  ", UserIdValidationError::SurroundingWhitespace)]
    fn rejects_invalid_ids(#[case] raw: &str, #[case] expected: UserIdValidationError) {
        assert_eq!(UserId::new(raw), Err(expected));
    }

    #[rstest]
    fn deserialisation_validates() {
        assert!(serde_json::from_value::<UserId>(json!("")).is_err());
        let id: UserId = serde_json::from_value(json!("2")).expect("valid id");
        assert_eq!(id, UserId::from(2));
    }

    #[rstest]
    fn records_serialise_transparently() {
        let body = json!({ "id": 1, "name": "Leanne Graham" });
        let record = UserRecord::from(body.clone());
        assert_eq!(serde_json::to_value(&record).expect("serialise"), body);
        assert_eq!(record.into_value(), body);
    }
}
