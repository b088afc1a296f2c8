//! Aggregating several validations into one result.

use std::fmt;

/// Every failure produced by a [`combine`] call, in input order.
///
/// Displays as the failures joined with `", "`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombinedFailure<E> {
    failures: Vec<E>,
}

impl<E> CombinedFailure<E> {
    /// Returns the collected failures.
    pub fn failures(&self) -> &[E] {
        &self.failures
    }

    /// Consumes the aggregate, returning the collected failures.
    pub fn into_failures(self) -> Vec<E> {
        self.failures
    }

    /// Returns the number of collected failures. Never zero.
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// Always `false`; an empty aggregate is never produced.
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }
}

impl<E: fmt::Display> fmt::Display for CombinedFailure<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, failure) in self.failures.iter().enumerate() {
            if index > 0 {
                formatter.write_str(", ")?;
            }
            write!(formatter, "{failure}")?;
        }
        Ok(())
    }
}

impl<E: fmt::Debug + fmt::Display> std::error::Error for CombinedFailure<E> {}

/// Succeeds only if every input succeeds.
///
/// All inputs are inspected; the failure holds every error rather than
/// only the first one.
///
/// # Examples
///
/// ```rust
/// use presence::fallible::combine;
///
/// let at_least = |value: i32, minimum: i32| {
///     if value > minimum { Ok(()) } else { Err(format!("{value} is not above {minimum}")) }
/// };
///
/// assert_eq!(combine([at_least(600, 500), at_least(600, 100)]), Ok(()));
///
/// let failure = combine([at_least(100, 500), at_least(100, 50), at_least(100, 200)]).unwrap_err();
/// assert_eq!(failure.to_string(), "100 is not above 500, 100 is not above 200");
/// ```
///
/// # Errors
///
/// Returns a [`CombinedFailure`] holding every error when at least one
/// input failed.
pub fn combine<E, I>(results: I) -> Result<(), CombinedFailure<E>>
where
    I: IntoIterator<Item = Result<(), E>>,
{
    let failures: Vec<E> = results.into_iter().filter_map(Result::err).collect();

    if failures.is_empty() {
        Ok(())
    } else {
        tracing::debug!(failures = failures.len(), "combined validation failed");
        Err(CombinedFailure { failures })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn empty_input_succeeds() {
        let results: Vec<Result<(), String>> = Vec::new();
        assert_eq!(combine(results), Ok(()));
    }

    #[rstest]
    fn failures_keep_input_order() {
        let failure = combine([Err("first"), Ok(()), Err("second")]).unwrap_err();
        assert_eq!(failure.failures(), &["first", "second"]);
        assert_eq!(failure.len(), 2);
        assert!(!failure.is_empty());
    }

    #[rstest]
    fn display_joins_with_comma() {
        let failure = combine([Err(1), Err(2), Err(3)]).unwrap_err();
        assert_eq!(failure.to_string(), "1, 2, 3");
    }
}
