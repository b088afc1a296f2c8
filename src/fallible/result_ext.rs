//! Combinators over `Result` for validation pipelines.

/// Extension methods for `Result<T, E>`.
///
/// Every method returns the result itself (possibly turned into a failure),
/// so the happy path and the failure path stay visible in one chain.
///
/// # Examples
///
/// ```rust
/// use presence::fallible::ResultExt;
///
/// let mut log = Vec::new();
/// let outcome: Result<f64, String> = Ok(25.0)
///     .ensure(|w| *w > 0.0, |w| format!("Weight is not more than {w}"))
///     .tap_error(|error| log.push(error.clone()))
///     .map(|w| w * 10.0);
///
/// assert_eq!(outcome, Ok(250.0));
/// assert!(log.is_empty());
/// ```
pub trait ResultExt<T, E>: Sized {
    /// Turns a success into a failure when `predicate` does not hold.
    ///
    /// The error is built from the rejected value. Failures pass through
    /// without calling either function.
    fn ensure<P, F>(self, predicate: P, error: F) -> Result<T, E>
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(&T) -> E;

    /// Runs a fallible validation against the value, keeping the value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::fallible::ResultExt;
    ///
    /// let validated: Result<i32, String> =
    ///     Ok(100).check(|n| if *n > 500 { Ok(()) } else { Err("Number too small".to_string()) });
    /// assert_eq!(validated, Err("Number too small".to_string()));
    /// ```
    fn check<U, V, F>(self, validation: F) -> Result<T, E>
    where
        F: FnOnce(&T) -> Result<U, V>,
        E: From<V>;

    /// Observes the success value without changing the result.
    fn tap<F>(self, action: F) -> Result<T, E>
    where
        F: FnOnce(&T);

    /// Observes the failure without changing the result.
    fn tap_error<F>(self, action: F) -> Result<T, E>
    where
        F: FnOnce(&E);
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn ensure<P, F>(self, predicate: P, error: F) -> Self
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(&T) -> E,
    {
        let value = self?;
        if predicate(&value) {
            Ok(value)
        } else {
            Err(error(&value))
        }
    }

    #[inline]
    fn check<U, V, F>(self, validation: F) -> Self
    where
        F: FnOnce(&T) -> Result<U, V>,
        E: From<V>,
    {
        let value = self?;
        validation(&value)?;
        Ok(value)
    }

    #[inline]
    fn tap<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        self.inspect(action)
    }

    #[inline]
    fn tap_error<F>(self, action: F) -> Self
    where
        F: FnOnce(&E),
    {
        self.inspect_err(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Ok(5), Ok(5))]
    #[case(Ok(-5), Err("rejected -5".to_string()))]
    #[case(Err("earlier".to_string()), Err("earlier".to_string()))]
    fn ensure_rejects_failing_values(
        #[case] input: Result<i32, String>,
        #[case] expected: Result<i32, String>,
    ) {
        let result = input.ensure(|n| *n > 0, |n| format!("rejected {n}"));
        assert_eq!(result, expected);
    }

    #[rstest]
    fn check_skips_validation_on_failure() {
        let mut calls = 0;
        let result: Result<i32, String> = Err("first".to_string()).check(|_| {
            calls += 1;
            Ok::<(), String>(())
        });
        assert_eq!(result, Err("first".to_string()));
        assert_eq!(calls, 0);
    }

    #[rstest]
    fn tap_and_tap_error_fire_on_their_side_only() {
        let mut seen = Vec::new();
        let _ = Ok::<i32, String>(1)
            .tap(|n| seen.push(format!("ok {n}")))
            .tap_error(|e| seen.push(format!("err {e}")));
        let _ = Err::<i32, String>("boom".to_string())
            .tap(|n| seen.push(format!("ok {n}")))
            .tap_error(|e| seen.push(format!("err {e}")));
        assert_eq!(seen, vec!["ok 1".to_string(), "err boom".to_string()]);
    }
}
