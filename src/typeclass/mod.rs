//! Type class traits over present/absent containers.
//!
//! This module provides the type classes that let [`OptionalValue`] and the
//! standard `Option` be composed through the same abstractions:
//!
//! - [`Functor`]: Mapping over the held value
//! - [`Applicative`]: Lifting values and combining independent containers
//! - [`Monad`]: Sequencing computations that may produce absence
//! - [`Foldable`]: Reducing a container to a summary value
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) to emulate them,
//! which is what allows `Functor` and `Monad` to be written once for every
//! container.
//!
//! # Examples
//!
//! ```rust
//! use presence::optional::OptionalValue;
//! use presence::typeclass::{Applicative, Foldable, Functor, Monad};
//!
//! let price = OptionalValue::present(30.00);
//! let weight = OptionalValue::present(25.00);
//!
//! let per_kilogram = price.map2(weight, |p, w| p / w);
//! assert!(per_kilogram.is_present());
//!
//! let shipping = weight
//!     .fmap(|w| w * 10.0)
//!     .flat_map(|cost| if cost > 0.0 { OptionalValue::present(cost) } else { OptionalValue::absent() });
//! assert_eq!(shipping.fold_left(0.0, |_, cost| cost), 250.0);
//! ```
//!
//! [`OptionalValue`]: crate::optional::OptionalValue

mod applicative;
mod foldable;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
