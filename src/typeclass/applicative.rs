//! Applicative type class - lifting values and combining independent containers.
//!
//! # Laws
//!
//! ```text
//! pure(x).fmap(f) == pure(f(x))
//! fa.map2(pure(()), |a, _| a) == fa
//! ```
//!
//! # Examples
//!
//! ```rust
//! use presence::optional::OptionalValue;
//! use presence::typeclass::Applicative;
//!
//! let price = OptionalValue::present(30.00);
//! let weight: OptionalValue<f64> = OptionalValue::absent();
//!
//! // Any absent input makes the combination absent
//! assert!(price.map2(weight, |p, w| p * w).is_absent());
//! ```

use super::functor::Functor;
use crate::optional::OptionalValue;

/// A type class for functors that can lift plain values and combine two
/// independent containers.
pub trait Applicative: Functor {
    /// Lifts a value into the applicative context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two containers with a binary function.
    ///
    /// The function is only invoked when both containers hold a value.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Pairs the values of two containers.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }
}

// =============================================================================
// OptionalValue<A> Implementation
// =============================================================================

impl<A> Applicative for OptionalValue<A> {
    #[inline]
    fn pure<B>(value: B) -> OptionalValue<B> {
        OptionalValue::present(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: OptionalValue<B>, function: F) -> OptionalValue<C>
    where
        F: FnOnce(A, B) -> C,
    {
        self.and_then(|a| other.map(|b| function(a, b)))
    }
}
