//! Delivery dispatch over a closed set of product variants.
//!
//! A product is either physical (it has a weight and goes by courier) or
//! digital (it goes by email). Instead of a nullable weight checked at every
//! use, or a class hierarchy with virtual overrides, the cases form the
//! [`Product`] enum and [`Product::deliver`] is the single dispatch point.
//! Adding a variant makes every non-exhaustive `match` a compile error.
//!
//! # Examples
//!
//! ```rust
//! use presence::delivery::{
//!     DeliveryConfig, DeliveryHandler, DeliveryMethod, DigitalProduct, PhysicalProduct, Product,
//! };
//!
//! let handler = DeliveryHandler::from_config(&DeliveryConfig::default());
//! let products = vec![
//!     Product::Digital(DigitalProduct::new("Digital Product", 5.00)),
//!     Product::Physical(PhysicalProduct::new("Physical Product", 10.00, 20.00)),
//! ];
//!
//! let methods: Vec<DeliveryMethod> = handler
//!     .deliver_all(&products)
//!     .into_iter()
//!     .map(|receipt| receipt.map(|r| r.method))
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! assert_eq!(methods, vec![DeliveryMethod::Email, DeliveryMethod::Courier]);
//! ```

mod config;
mod error;
mod handler;
mod product;
mod service;

pub use config::{COURIER_MAX_WEIGHT_KEY, DeliveryConfig, EMAIL_SENDER_KEY};
pub use error::{ConfigError, DeliveryError};
pub use handler::DeliveryHandler;
pub use product::{DeliveryMethod, DigitalProduct, PhysicalProduct, Product};
pub use service::{CourierService, DeliveryReceipt, DeliveryService, EmailService};
