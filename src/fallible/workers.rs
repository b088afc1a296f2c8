//! Hidden failure versus explicit failure, side by side.
//!
//! The `hidden_*` functions all return a plain `i32`. One of them panics,
//! and nothing at the call site tells you which. The `explicit_*` functions
//! put their failure case in the return type, so the compiler makes the
//! caller deal with it.

use thiserror::Error;

use super::attempt::{Panicked, attempt};

/// Failures raised by the worker illustrations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ExampleError {
    /// The worker was asked to fail.
    #[error("{0}")]
    Threw(String),

    /// A value fell below the minimum a validation accepts.
    #[error("Number too small: {value} is not above {minimum}")]
    TooSmall {
        /// The rejected value.
        value: i32,
        /// The exclusive lower bound.
        minimum: i32,
    },
}

/// Message carried by every failure the workers raise on request.
pub const THREW_EXCEPTION: &str = "Threw exception";

// =============================================================================
// Single-result workers
// =============================================================================

/// Returns `100`, or an explicit failure when `will_fail` is set.
///
/// # Errors
///
/// Returns [`ExampleError::Threw`] when `will_fail` is `true`.
pub fn returns_number_or_fails(will_fail: bool) -> Result<i32, ExampleError> {
    if will_fail {
        return Err(ExampleError::Threw(THREW_EXCEPTION.to_string()));
    }
    Ok(100)
}

/// Returns `100`, or panics when `will_panic` is set.
///
/// # Panics
///
/// Panics with [`THREW_EXCEPTION`] when `will_panic` is `true`. The return
/// type gives no hint of this.
pub fn returns_number_or_panics(will_panic: bool) -> i32 {
    assert!(!will_panic, "{THREW_EXCEPTION}");
    100
}

/// Wraps [`returns_number_or_panics`] so its failure becomes a value.
///
/// # Errors
///
/// Returns [`Panicked`] when `will_panic` is `true`.
pub fn returns_result_of_int(will_panic: bool) -> Result<i32, Panicked> {
    attempt(|| returns_number_or_panics(will_panic))
}

/// Accepts values strictly above `minimum`.
///
/// # Errors
///
/// Returns [`ExampleError::TooSmall`] when `value <= minimum`.
pub const fn above(value: i32, minimum: i32) -> Result<(), ExampleError> {
    if value > minimum {
        Ok(())
    } else {
        Err(ExampleError::TooSmall { value, minimum })
    }
}

// =============================================================================
// Hidden failure
// =============================================================================

/// Always panics. The signature does not say so.
///
/// # Panics
///
/// Always.
pub fn hidden_work_one() -> i32 {
    panic!("{THREW_EXCEPTION}")
}

/// Returns `200`.
pub const fn hidden_work_two() -> i32 {
    200
}

/// Returns `300`.
pub const fn hidden_work_three() -> i32 {
    300
}

// =============================================================================
// Explicit failure
// =============================================================================

/// Returns `400`.
pub const fn explicit_work_one() -> i32 {
    400
}

/// Returns `500`, and says in its type that it could have failed.
///
/// # Errors
///
/// This worker currently always succeeds; callers still have to handle
/// the failure case.
pub const fn explicit_work_two() -> Result<i32, ExampleError> {
    Ok(500)
}

/// Returns `600`.
pub const fn explicit_work_three() -> i32 {
    600
}

/// Extracts the value of [`explicit_work_two`], falling back to `0`.
pub fn explicit_method_two() -> i32 {
    explicit_work_two()
        .inspect_err(|error| tracing::debug!(%error, "falling back to 0"))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(false, Ok(100))]
    #[case(true, Err(ExampleError::Threw(THREW_EXCEPTION.to_string())))]
    fn returns_number_or_fails_is_explicit(
        #[case] will_fail: bool,
        #[case] expected: Result<i32, ExampleError>,
    ) {
        assert_eq!(returns_number_or_fails(will_fail), expected);
    }

    #[rstest]
    #[should_panic(expected = "Threw exception")]
    fn hidden_work_one_panics() {
        let _ = hidden_work_one();
    }

    #[rstest]
    fn explicit_method_two_extracts_value() {
        assert_eq!(explicit_method_two(), 500);
    }

    #[rstest]
    #[case(501, 500, true)]
    #[case(500, 500, false)]
    fn above_is_strict(#[case] value: i32, #[case] minimum: i32, #[case] accepted: bool) {
        assert_eq!(above(value, minimum).is_ok(), accepted);
    }
}
