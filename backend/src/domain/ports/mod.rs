//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod user_source;

#[cfg(test)]
pub use user_source::MockUserSource;
pub use user_source::{FixtureUserSource, RESPONSE_NOT_OK_MESSAGE, UserSource, UserSourceError};
