//! Identity guard that only lets JSON numbers through.

use serde_json::{Number, Value, json};

use super::{Error, input_type};

/// Rejection raised by [`only_numbers`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumberGuardError {
    /// The value was not a JSON number.
    #[error("Input must be a number")]
    NotANumber {
        /// Classification of the rejected value, for diagnostics.
        found: super::InputKind,
    },
}

impl From<NumberGuardError> for Error {
    fn from(value: NumberGuardError) -> Self {
        match &value {
            NumberGuardError::NotANumber { found } => {
                Self::invalid_request(value.to_string()).with_details(json!({ "found": found }))
            }
        }
    }
}

/// Return `value` unchanged when it is a number.
///
/// No coercion happens: numeric-looking text is rejected.
///
/// # Errors
///
/// Returns [`NumberGuardError::NotANumber`] for every non-number value.
///
/// # Examples
/// ```
/// use hello_kit::domain::only_numbers;
/// use serde_json::json;
///
/// assert_eq!(only_numbers(json!(242)).expect("number").as_u64(), Some(242));
/// let err = only_numbers(json!("242")).expect_err("text is rejected");
/// assert_eq!(err.to_string(), "Input must be a number");
/// ```
pub fn only_numbers(value: Value) -> Result<Number, NumberGuardError> {
    match value {
        Value::Number(number) => Ok(number),
        other => Err(NumberGuardError::NotANumber {
            found: input_type(&other),
        }),
    }
}
