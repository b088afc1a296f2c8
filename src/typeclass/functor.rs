//! Functor type class - mapping over the held value.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use presence::optional::OptionalValue;
//! use presence::typeclass::Functor;
//!
//! let weight = OptionalValue::present(2.5);
//! assert_eq!(weight.fmap(|kg| kg * 1000.0), OptionalValue::present(2500.0));
//!
//! // Absence is preserved
//! let missing: OptionalValue<f64> = OptionalValue::absent();
//! assert!(missing.fmap(|kg| kg * 1000.0).is_absent());
//! ```

use super::higher::TypeConstructor;
use crate::optional::OptionalValue;

/// A type class for types that can have a function mapped over their contents.
///
/// The structure (present or absent) is never changed by mapping.
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor.
    ///
    /// Useful when the functor must stay usable afterwards, or when the
    /// inner type does not implement `Clone`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::OptionalValue;
    /// use presence::typeclass::Functor;
    ///
    /// let name = OptionalValue::present(String::from("parcel"));
    /// let length = name.fmap_ref(|text| text.len());
    /// assert_eq!(length, OptionalValue::present(6));
    /// assert!(name.is_present());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the held value with a constant, keeping the structure.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the held value, keeping only the structure.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Option<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

// =============================================================================
// OptionalValue<A> Implementation
// =============================================================================

impl<A> Functor for OptionalValue<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> OptionalValue<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> OptionalValue<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn fmap_transforms_present_value() {
        let result = OptionalValue::present(21).fmap(|n| n * 2);
        assert_eq!(result, OptionalValue::present(42));
    }

    #[rstest]
    fn fmap_never_calls_function_when_absent() {
        let mut calls = 0;
        let result = OptionalValue::<i32>::absent().fmap(|n| {
            calls += 1;
            n
        });
        assert!(result.is_absent());
        assert_eq!(calls, 0);
    }

    #[rstest]
    fn void_keeps_structure() {
        assert_eq!(OptionalValue::present("x").void(), OptionalValue::present(()));
        assert!(OptionalValue::<&str>::absent().void().is_absent());
    }

    #[rstest]
    fn option_fmap_ref_borrows() {
        let value = Some(String::from("hello"));
        assert_eq!(value.fmap_ref(|text| text.len()), Some(5));
        assert_eq!(value, Some(String::from("hello")));
    }
}
