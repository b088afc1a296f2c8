//! The `OptionalValue<T>` container.

use std::fmt;

use super::iter::{IntoIter, Iter};

/// Internal discriminant. Kept private so that the only ways to build an
/// [`OptionalValue`] are [`OptionalValue::present`] and
/// [`OptionalValue::absent`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Slot<T> {
    Absent,
    Present(T),
}

/// An immutable value that is either present or absent.
///
/// `OptionalValue<T>` makes "no value" a representable state instead of a
/// runtime failure. A present instance always carries exactly one `T`; an
/// absent instance carries nothing. Once constructed, an instance never
/// changes its case or its value.
///
/// # Construction
///
/// There are exactly two construction paths:
///
/// - [`OptionalValue::present`] wraps a genuine value
/// - [`OptionalValue::absent`] represents missing data
///
/// Nullable sources enter through [`OptionalValue::from_nullable`] (or the
/// equivalent `From<Option<T>>`), which maps `None` to absent, so absence has
/// a single representation.
///
/// The representation is private, so a present instance cannot be forged
/// without a value:
///
/// ```compile_fail
/// use presence::optional::OptionalValue;
///
/// let forged = OptionalValue::<f64> { slot: None };
/// ```
///
/// # Examples
///
/// ```rust
/// use presence::optional::OptionalValue;
///
/// let present = OptionalValue::present(5);
/// assert!(present.is_present());
/// assert!(!present.is_absent());
///
/// let absent: OptionalValue<i32> = OptionalValue::absent();
/// assert!(absent.is_absent());
/// assert!(!absent.is_present_and(|_| true));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OptionalValue<T> {
    slot: Slot<T>,
}

static_assertions::assert_impl_all!(OptionalValue<f64>: Send, Sync, Copy);
static_assertions::assert_impl_all!(OptionalValue<String>: Send, Sync, Clone);

impl<T> OptionalValue<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a present instance wrapping `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::OptionalValue;
    ///
    /// let weight = OptionalValue::present(25.00);
    /// assert!(weight.is_present());
    /// ```
    #[inline]
    pub const fn present(value: T) -> Self {
        Self {
            slot: Slot::Present(value),
        }
    }

    /// Creates an absent instance.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::OptionalValue;
    ///
    /// let weight: OptionalValue<f64> = OptionalValue::absent();
    /// assert!(weight.is_absent());
    /// ```
    #[inline]
    pub const fn absent() -> Self {
        Self { slot: Slot::Absent }
    }

    /// Creates an instance from a nullable source.
    ///
    /// `Some(value)` becomes present and `None` becomes absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::OptionalValue;
    ///
    /// assert!(OptionalValue::from_nullable(Some(3)).is_present());
    /// assert!(OptionalValue::<i32>::from_nullable(None).is_absent());
    /// ```
    #[inline]
    pub fn from_nullable(value: Option<T>) -> Self {
        value.map_or_else(Self::absent, Self::present)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns `true` if a value is held.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self.slot, Slot::Present(_))
    }

    /// Returns `true` if no value is held.
    ///
    /// Always the negation of [`is_present`](Self::is_present).
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self.slot, Slot::Absent)
    }

    /// Returns `predicate(value)` if present, and `false` if absent.
    ///
    /// The predicate is never invoked on an absent instance.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::OptionalValue;
    ///
    /// let weight = OptionalValue::present(25.00);
    /// assert!(weight.is_present_and(|w| *w > 0.0));
    /// assert!(!weight.is_present_and(|w| *w > 100.0));
    ///
    /// let mut calls = 0;
    /// let absent: OptionalValue<f64> = OptionalValue::absent();
    /// assert!(!absent.is_present_and(|_| {
    ///     calls += 1;
    ///     true
    /// }));
    /// assert_eq!(calls, 0);
    /// ```
    #[inline]
    pub fn is_present_and<F>(&self, predicate: F) -> bool
    where
        F: FnOnce(&T) -> bool,
    {
        match &self.slot {
            Slot::Present(value) => predicate(value),
            Slot::Absent => false,
        }
    }

    // =========================================================================
    // Branching
    // =========================================================================

    /// Invokes `action` with the held value if present.
    ///
    /// Returns the same instance either way, so an absent handler can be
    /// chained with [`when_absent`](Self::when_absent).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::OptionalValue;
    ///
    /// let mut seen = Vec::new();
    /// OptionalValue::present(5)
    ///     .when_present(|value| seen.push(*value))
    ///     .when_absent(|| seen.push(-1));
    /// assert_eq!(seen, vec![5]);
    /// ```
    #[inline]
    pub fn when_present<F>(&self, action: F) -> &Self
    where
        F: FnOnce(&T),
    {
        if let Slot::Present(value) = &self.slot {
            action(value);
        }
        self
    }

    /// Invokes `action` if absent.
    ///
    /// Returns the same instance either way.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::OptionalValue;
    ///
    /// let mut missing = false;
    /// OptionalValue::<f64>::absent().when_absent(|| missing = true);
    /// assert!(missing);
    /// ```
    #[inline]
    pub fn when_absent<F>(&self, action: F) -> &Self
    where
        F: FnOnce(),
    {
        if self.is_absent() {
            action();
        }
        self
    }

    /// Eliminates the container by applying one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::OptionalValue;
    ///
    /// let describe = |weight: OptionalValue<f64>| {
    ///     weight.match_with(|w| format!("{w} kg"), || "no weight".to_string())
    /// };
    /// assert_eq!(describe(OptionalValue::present(2.5)), "2.5 kg");
    /// assert_eq!(describe(OptionalValue::absent()), "no weight");
    /// ```
    #[inline]
    pub fn match_with<U, P, A>(self, on_present: P, on_absent: A) -> U
    where
        P: FnOnce(T) -> U,
        A: FnOnce() -> U,
    {
        match self.slot {
            Slot::Present(value) => on_present(value),
            Slot::Absent => on_absent(),
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns a reference to the held value, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::OptionalValue;
    ///
    /// let weight = OptionalValue::present(5.0);
    /// if let Some(w) = weight.value() {
    ///     assert_eq!(*w, 5.0);
    /// }
    /// ```
    #[inline]
    pub const fn value(&self) -> Option<&T> {
        match &self.slot {
            Slot::Present(value) => Some(value),
            Slot::Absent => None,
        }
    }

    /// Converts into a standard `Option`, consuming the container.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self.slot {
            Slot::Present(value) => Some(value),
            Slot::Absent => None,
        }
    }

    /// Returns the held value, or `default` if absent.
    #[inline]
    pub fn value_or(self, default: T) -> T {
        self.into_option().unwrap_or(default)
    }

    /// Returns the held value, or computes one if absent.
    #[inline]
    pub fn value_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.into_option().unwrap_or_else(default)
    }

    /// Converts into a `Result`, using `error` for the absent case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::OptionalValue;
    ///
    /// let weight: OptionalValue<f64> = OptionalValue::absent();
    /// assert_eq!(weight.ok_or("No weight set"), Err("No weight set"));
    /// ```
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Result<T, E> {
        self.into_option().ok_or(error)
    }

    /// Converts into a `Result`, computing the error lazily for the absent case.
    #[inline]
    pub fn ok_or_else<E, F>(self, error: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        self.into_option().ok_or_else(error)
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Borrows the held value, producing an `OptionalValue<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> OptionalValue<&T> {
        match &self.slot {
            Slot::Present(value) => OptionalValue::present(value),
            Slot::Absent => OptionalValue::absent(),
        }
    }

    /// Applies `function` to the held value, preserving absence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::OptionalValue;
    ///
    /// let grams = OptionalValue::present(2.5).map(|kg| kg * 1000.0);
    /// assert_eq!(grams, OptionalValue::present(2500.0));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> OptionalValue<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.slot {
            Slot::Present(value) => OptionalValue::present(function(value)),
            Slot::Absent => OptionalValue::absent(),
        }
    }

    /// Chains a computation that may itself produce absence.
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> OptionalValue<U>
    where
        F: FnOnce(T) -> OptionalValue<U>,
    {
        match self.slot {
            Slot::Present(value) => function(value),
            Slot::Absent => OptionalValue::absent(),
        }
    }

    /// Keeps the value only if it satisfies `predicate`.
    #[inline]
    pub fn filter<F>(self, predicate: F) -> Self
    where
        F: FnOnce(&T) -> bool,
    {
        match self.slot {
            Slot::Present(value) => {
                if predicate(&value) {
                    Self::present(value)
                } else {
                    Self::absent()
                }
            }
            Slot::Absent => Self::absent(),
        }
    }

    /// Returns `self` if present, otherwise `alternative`.
    #[inline]
    pub fn or(self, alternative: Self) -> Self {
        if self.is_present() { self } else { alternative }
    }

    /// Returns `self` if present, otherwise the result of `alternative`.
    #[inline]
    pub fn or_else<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        if self.is_present() { self } else { alternative() }
    }

    /// Iterates over the held value (zero or one items).
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.value())
    }
}

impl<T> OptionalValue<Option<T>> {
    /// Collapses a present-but-null value into absence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use presence::optional::OptionalValue;
    ///
    /// let nested: OptionalValue<Option<i32>> = OptionalValue::present(None);
    /// assert!(nested.flatten().is_absent());
    /// ```
    #[inline]
    pub fn flatten(self) -> OptionalValue<T> {
        self.and_then(OptionalValue::from_nullable)
    }
}

impl<T> OptionalValue<OptionalValue<T>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten_nested(self) -> OptionalValue<T> {
        self.and_then(|inner| inner)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for OptionalValue<T> {
    /// Absent.
    #[inline]
    fn default() -> Self {
        Self::absent()
    }
}

impl<T> From<Option<T>> for OptionalValue<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::from_nullable(value)
    }
}

impl<T> From<OptionalValue<T>> for Option<T> {
    #[inline]
    fn from(value: OptionalValue<T>) -> Self {
        value.into_option()
    }
}

impl<T: fmt::Debug> fmt::Debug for OptionalValue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.slot {
            Slot::Present(value) => formatter.debug_tuple("Present").field(value).finish(),
            Slot::Absent => formatter.write_str("Absent"),
        }
    }
}

impl<T: fmt::Display> fmt::Display for OptionalValue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.slot {
            Slot::Present(value) => fmt::Display::fmt(value, formatter),
            Slot::Absent => formatter.write_str("<absent>"),
        }
    }
}

impl<T> IntoIterator for OptionalValue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.into_option())
    }
}

impl<'a, T> IntoIterator for &'a OptionalValue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T> serde::Serialize for OptionalValue<T>
where
    T: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match &self.slot {
            Slot::Present(value) => serializer.serialize_some(value),
            Slot::Absent => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for OptionalValue<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Option<T> as serde::Deserialize>::deserialize(deserializer).map(Self::from_nullable)
    }
}

// =============================================================================
// Tests
// =============================================================================
