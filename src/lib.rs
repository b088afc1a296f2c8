//! # presence
//!
//! Explicit absence and explicit failure for Rust.
//!
//! ## Overview
//!
//! This library collects the alternatives to nullable references and hidden
//! exceptions in one place:
//!
//! - **Optional values**: [`OptionalValue`](optional::OptionalValue), an
//!   immutable present/absent container with fluent branching combinators
//! - **Type Classes**: Functor, Applicative, Monad and Foldable for optional values
//! - **Fallible operations**: combinators over `Result`, failure aggregation,
//!   and panic capture for code whose signature hides its failure
//! - **Closed-variant dispatch**: a product catalog delivered without
//!   null checks or caller-side type switches
//!
//! ## Feature Flags
//!
//! - `optional`: The `OptionalValue` container
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `fallible`: `Result` combinators and worker illustrations
//! - `delivery`: Catalog and delivery dispatch
//! - `serde`: Serialization support
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use presence::prelude::*;
//!
//! let weight = OptionalValue::present(25.00);
//! assert!(weight.is_present_and(|w| *w > 0.0));
//!
//! let mut shipped = false;
//! weight
//!     .when_present(|_| shipped = true)
//!     .when_absent(|| unreachable!());
//! assert!(shipped);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use presence::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "optional")]
    pub use crate::optional::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "fallible")]
    pub use crate::fallible::*;

    #[cfg(feature = "delivery")]
    pub use crate::catalog::*;

    #[cfg(feature = "delivery")]
    pub use crate::delivery::*;
}

#[cfg(feature = "optional")]
pub mod optional;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "fallible")]
pub mod fallible;

#[cfg(feature = "delivery")]
pub mod delivery;

#[cfg(feature = "delivery")]
pub mod catalog;
