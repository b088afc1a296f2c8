//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Option<_>` or `OptionalValue<_>` as type
//! constructors directly. [`TypeConstructor`] records the applied type and
//! how to re-apply the same constructor to another type.
//!
//! # Example
//!
//! ```rust
//! use presence::optional::OptionalValue;
//! use presence::typeclass::TypeConstructor;
//!
//! fn emptied<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let weight = OptionalValue::present(25.00);
//! let label: OptionalValue<String> = emptied(weight);
//! assert!(label.is_absent());
//! ```

use crate::optional::OptionalValue;

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` should be `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<A> TypeConstructor for OptionalValue<A> {
    type Inner = A;
    type WithType<B> = OptionalValue<B>;
}
