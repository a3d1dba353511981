//! Classification of arbitrary JSON values into coarse input kinds.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use super::numeric_literal::is_numeric_literal;

/// Label describing what kind of value an input is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    /// A JSON number, or text holding nothing but a numeric literal.
    Number,
    /// Any other text, including blank text.
    String,
    /// Everything else: null, booleans, arrays, objects.
    Unknown,
}

impl InputKind {
    /// Lowercase label as exposed to callers.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::String => "string",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify `value`.
///
/// Text is a number when, trimmed, it is a complete literal as defined in
/// [`numeric_literal`](super::numeric_literal); blank text stays a string.
/// The function is total.
///
/// # Examples
/// ```
/// use hello_kit::domain::{InputKind, input_type};
/// use serde_json::json;
///
/// assert_eq!(input_type(&json!("  456  ")), InputKind::Number);
/// assert_eq!(input_type(&json!("abc123")), InputKind::String);
/// assert_eq!(input_type(&json!(42)), InputKind::Number);
/// assert_eq!(input_type(&json!([])), InputKind::Unknown);
/// ```
#[must_use]
pub fn input_type(value: &Value) -> InputKind {
    match value {
        Value::String(text) if is_numeric_literal(text) => InputKind::Number,
        Value::String(_) => InputKind::String,
        Value::Number(_) => InputKind::Number,
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => InputKind::Unknown,
    }
}
