//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **users**: reqwest-backed client for the remote user directory
//!
//! Adapters translate between transport representations and domain types.
//! They contain no business logic.

pub mod users;
