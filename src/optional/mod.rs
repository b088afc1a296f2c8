//! Optional values - explicit absence without sentinel values.
//!
//! This module provides [`OptionalValue`], an immutable container that is
//! either *present* (holding exactly one value) or *absent* (holding
//! nothing). Absence is a checked state of the container itself, never a
//! special value of the wrapped type.
//!
//! # Examples
//!
//! ```rust
//! use presence::optional::OptionalValue;
//!
//! let weight: OptionalValue<f64> = OptionalValue::present(25.00);
//! let no_weight: OptionalValue<f64> = OptionalValue::absent();
//!
//! assert!(weight.is_present_and(|w| *w > 0.0));
//! assert!(!weight.is_present_and(|w| *w > 100.0));
//! assert!(no_weight.is_absent());
//!
//! // Both branches handled in one fluent expression
//! let mut label = String::new();
//! no_weight
//!     .when_present(|w| label = format!("{w} kg"))
//!     .when_absent(|| label = "digital".to_string());
//! assert_eq!(label, "digital");
//! ```

mod iter;
mod value;

pub use iter::{IntoIter, Iter};
pub use value::OptionalValue;
