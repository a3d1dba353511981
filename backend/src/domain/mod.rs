//! Domain primitives and use-cases.
//!
//! Purpose: hold every behaviour of the service free of transport concerns.
//! Inbound adapters call into these functions; outbound adapters implement
//! the traits in [`ports`].
//!
//! Public surface:
//! - `input_type` / `InputKind`: classify arbitrary JSON values.
//! - `only_numbers`: identity guard for JSON numbers.
//! - `settle` / `Settlement`: an async result settled at creation.
//! - `UserLookupService` / `fetch_user_data`: remote user lookups.
//! - `Error` / `ErrorCode`: transport-agnostic failures.

pub mod error;
pub mod input_kind;
pub mod number_guard;
pub mod numeric_literal;
pub mod ports;
pub mod settlement;
pub mod trace_id;
pub mod user;
pub mod user_lookup;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::input_kind::{InputKind, input_type};
pub use self::number_guard::{NumberGuardError, only_numbers};
pub use self::settlement::{PromiseRejected, RESOLVED_MESSAGE, Settlement, settle};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{UserId, UserIdValidationError, UserRecord};
pub use self::user_lookup::{UserLookupService, fetch_user_data};
