//! HTTP inbound adapter exposing the shell and REST endpoints.

pub mod error;
pub mod health;
pub mod shell;
pub mod state;
pub mod users;
pub mod utilities;

pub use error::ApiResult;
