//! Shared HTTP adapter state.
//!
//! Handlers receive this through `actix_web::web::Data`, so they depend on
//! domain services only and stay testable without I/O.

use std::sync::Arc;

use crate::domain::UserLookupService;
use crate::domain::ports::UserSource;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Remote user lookups.
    pub users: UserLookupService,
}

impl HttpState {
    /// Build state around a user source.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use hello_kit::domain::ports::FixtureUserSource;
    /// use hello_kit::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(Arc::new(FixtureUserSource));
    /// let _users = state.users.clone();
    /// ```
    #[must_use]
    pub fn new(users: Arc<dyn UserSource>) -> Self {
        Self {
            users: UserLookupService::new(users),
        }
    }
}
