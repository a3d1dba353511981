//! User directory outbound adapters.
//!
//! This module provides a thin HTTP implementation of the `UserSource` port.

mod http_source;

pub use http_source::{DEFAULT_USERS_BASE_URL, UserHttpSource, UserHttpSourceBuildError};
