//! Explicit failure values in place of hidden exceptions.
//!
//! A function returning `i32` may still fail by panicking, and nothing in
//! its signature says so. A function returning `Result<i32, E>` forces the
//! caller to handle the failure before it can reach the value. This module
//! provides the pieces that make the explicit style pleasant:
//!
//! - [`ResultExt`]: `ensure`, `check`, `tap` and `tap_error` combinators
//! - [`combine`]: run several validations and collect every failure
//! - [`attempt`]: turn a panicking computation into an explicit failure
//! - [`workers`]: hidden-failure and explicit-failure functions side by side
//!
//! # Examples
//!
//! ```rust
//! use presence::fallible::{ResultExt, workers};
//!
//! let message = workers::returns_number_or_fails(false)
//!     .ensure(|n| *n > 0, |n| workers::ExampleError::TooSmall { value: *n, minimum: 1 })
//!     .map(|n| format!("Here is the success: {n}"))
//!     .unwrap_or_else(|error| format!("Process was unsuccessful: {error}"));
//!
//! assert_eq!(message, "Here is the success: 100");
//! ```

mod attempt;
mod combine;
mod result_ext;
pub mod workers;

pub use attempt::{Panicked, attempt};
pub use combine::{CombinedFailure, combine};
pub use result_ext::ResultExt;
