//! A product catalog whose weight is an [`OptionalValue`].
//!
//! A catalog item is sold either as a physical or a digital good, and the
//! only difference is whether it has a weight. With a nullable weight,
//! every use site repeats the null check; with an [`OptionalValue`], the
//! check happens once, in [`CatalogItem::into_product`], and the rest of
//! the code works with the closed [`Product`](crate::delivery::Product)
//! variants.
//!
//! # Examples
//!
//! ```rust
//! use presence::catalog::CatalogItem;
//! use presence::delivery::DeliveryMethod;
//!
//! let items = vec![
//!     CatalogItem::digital("Functional product", 50.00),
//!     CatalogItem::physical("Physical product", 30.00, 25.00),
//! ];
//!
//! let labels: Vec<String> = items.iter().map(CatalogItem::weight_label).collect();
//! assert_eq!(labels, vec!["no weight (digital)", "25 kg"]);
//!
//! let methods: Vec<DeliveryMethod> = items
//!     .into_iter()
//!     .map(|item| item.into_product().delivery_method())
//!     .collect();
//! assert_eq!(methods, vec![DeliveryMethod::Email, DeliveryMethod::Courier]);
//! ```
//!
//! [`OptionalValue`]: crate::optional::OptionalValue

mod item;

pub use item::{CatalogItem, WeightError};
