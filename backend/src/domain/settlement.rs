//! Asynchronous result that is already settled when it is created.
//!
//! Useful for exercising both the success and the failure path of async
//! callers without any I/O.

use futures_util::future::{Ready, ready};

/// Payload carried by a resolved settlement.
pub const RESOLVED_MESSAGE: &str = "Promise resolved";

/// Outcome requested from [`settle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Settlement {
    /// Settle successfully.
    #[default]
    Resolve,
    /// Settle with [`PromiseRejected`].
    Reject,
}

impl From<bool> for Settlement {
    fn from(should_resolve: bool) -> Self {
        if should_resolve {
            Self::Resolve
        } else {
            Self::Reject
        }
    }
}

/// Failure payload of a rejected settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Promise rejected")]
pub struct PromiseRejected;

/// Produce a future that is ready on first poll.
///
/// # Examples
/// ```
/// use hello_kit::domain::{PromiseRejected, Settlement, settle};
///
/// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
/// assert_eq!(settle(Settlement::default()).await, Ok("Promise resolved"));
/// assert_eq!(settle(false.into()).await, Err(PromiseRejected));
/// # });
/// ```
#[must_use = "the settlement does nothing unless awaited"]
pub fn settle(settlement: Settlement) -> Ready<Result<&'static str, PromiseRejected>> {
    ready(match settlement {
        Settlement::Resolve => Ok(RESOLVED_MESSAGE),
        Settlement::Reject => Err(PromiseRejected),
    })
}
