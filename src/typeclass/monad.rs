//! Monad type class - sequencing computations that may produce absence.
//!
//! # Laws
//!
//! ```text
//! pure(a).flat_map(f) == f(a)                              // left identity
//! m.flat_map(pure) == m                                    // right identity
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))  // associativity
//! ```

use super::applicative::Applicative;
use crate::optional::OptionalValue;

/// A type class for applicatives whose next step may depend on the
/// previous value.
///
/// # Examples
///
/// ```rust
/// use presence::optional::OptionalValue;
/// use presence::typeclass::Monad;
///
/// fn positive(weight: f64) -> OptionalValue<f64> {
///     if weight > 0.0 { OptionalValue::present(weight) } else { OptionalValue::absent() }
/// }
///
/// assert_eq!(OptionalValue::present(25.0).flat_map(positive), OptionalValue::present(25.0));
/// assert!(OptionalValue::present(-1.0).flat_map(positive).is_absent());
/// ```
pub trait Monad: Applicative {
    /// Applies a function to the held value and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Sequences two computations, discarding the first value.
    ///
    /// Absence in `self` propagates and `next` is not returned.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        self.and_then(function)
    }
}

impl<A> Monad for OptionalValue<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> OptionalValue<B>
    where
        F: FnOnce(A) -> OptionalValue<B>,
    {
        self.and_then(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn then_propagates_absence() {
        let first: OptionalValue<i32> = OptionalValue::absent();
        assert!(first.then(OptionalValue::present("next")).is_absent());
    }

    #[rstest]
    fn then_returns_next_when_present() {
        let result = OptionalValue::present(1).then(OptionalValue::present("next"));
        assert_eq!(result, OptionalValue::present("next"));
    }
}
