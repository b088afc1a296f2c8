//! Turning a panicking computation into an explicit failure.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;

/// A panic captured by [`attempt`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct Panicked {
    message: String,
}

impl Panicked {
    /// The panic message, or `"unknown panic"` when the payload was not text.
    pub fn message(&self) -> &str {
        &self.message
    }

    fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|text| (*text).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        Self { message }
    }
}

/// Runs `computation`, returning its value or the panic it raised.
///
/// This is the bridge from code whose signature hides its failure to code
/// that returns it. The computation should not leave shared state
/// half-updated when it panics; `attempt` asserts unwind safety on its
/// behalf.
///
/// # Examples
///
/// ```rust
/// use presence::fallible::attempt;
///
/// assert_eq!(attempt(|| 100), Ok(100));
///
/// let failure = attempt(|| -> i32 { panic!("Threw exception") }).unwrap_err();
/// assert_eq!(failure.message(), "Threw exception");
/// ```
///
/// # Errors
///
/// Returns [`Panicked`] carrying the panic message if `computation` panics.
pub fn attempt<T, F>(computation: F) -> Result<T, Panicked>
where
    F: FnOnce() -> T,
{
    panic::catch_unwind(AssertUnwindSafe(computation)).map_err(|payload| {
        let panicked = Panicked::from_payload(&*payload);
        tracing::warn!(reason = panicked.message(), "computation panicked");
        panicked
    })
}
