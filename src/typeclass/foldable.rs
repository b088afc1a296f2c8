//! Foldable type class - reducing a container to a summary value.
//!
//! A present container folds its single value; an absent one returns the
//! initial accumulator untouched.

use super::higher::TypeConstructor;
use crate::optional::OptionalValue;

/// A type class for structures that can be folded to a summary value.
///
/// # Examples
///
/// ```rust
/// use presence::optional::OptionalValue;
/// use presence::typeclass::Foldable;
///
/// let weight = OptionalValue::present(25.0);
/// assert_eq!(weight.fold_left(5.0, |total, w| total + w), 30.0);
///
/// let missing: OptionalValue<f64> = OptionalValue::absent();
/// assert_eq!(missing.fold_left(5.0, |total, w| total + w), 5.0);
/// ```
pub trait Foldable: TypeConstructor {
    /// Folds the structure from left to right with an accumulator.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds the structure from right to left with an accumulator.
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Returns the number of held elements.
    #[inline]
    fn length(self) -> usize
    where
        Self: Sized,
    {
        self.fold_left(0, |count, _| count + 1)
    }

    /// Returns whether the structure holds no elements.
    #[inline]
    fn is_empty(self) -> bool
    where
        Self: Sized,
    {
        self.length() == 0
    }

    /// Returns whether any held element satisfies the predicate.
    #[inline]
    fn exists<F>(self, mut predicate: F) -> bool
    where
        Self: Sized,
        F: FnMut(&Self::Inner) -> bool,
    {
        self.fold_left(false, |found, element| found || predicate(&element))
    }
}

impl<A> Foldable for Option<A> {
    #[inline]
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Some(value) => function(init, value),
            None => init,
        }
    }

    #[inline]
    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Some(value) => function(value, init),
            None => init,
        }
    }
}

impl<A> Foldable for OptionalValue<A> {
    #[inline]
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        self.into_iter().fold(init, &mut function)
    }

    #[inline]
    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        self.into_iter()
            .fold(init, |accumulator, element| function(element, accumulator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn length_counts_present_value() {
        assert_eq!(OptionalValue::present('x').length(), 1);
        assert_eq!(OptionalValue::<char>::absent().length(), 0);
    }

    #[rstest]
    fn is_empty_matches_absence() {
        assert!(OptionalValue::<u8>::absent().is_empty());
        assert!(!OptionalValue::present(1_u8).is_empty());
    }

    #[rstest]
    fn exists_mirrors_is_present_and() {
        let weight = OptionalValue::present(25.0);
        assert_eq!(weight.exists(|w| *w > 0.0), weight.is_present_and(|w| *w > 0.0));
        assert!(!OptionalValue::<f64>::absent().exists(|_| true));
    }

    #[rstest]
    fn fold_right_builds_from_the_right() {
        let result = Some(3).fold_right(String::from("!"), |n, tail| format!("{n}{tail}"));
        assert_eq!(result, "3!");
    }
}
