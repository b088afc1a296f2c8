//! Delivery and configuration errors.

use thiserror::Error;

/// A delivery service refused a product.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum DeliveryError {
    /// A physical product's weight is zero, negative, or not a number.
    #[error("cannot ship {product}: weight {weight} kg is not positive")]
    InvalidWeight {
        /// Product name.
        product: String,
        /// The offending weight.
        weight: f64,
    },

    /// A physical product is heavier than the courier accepts.
    #[error("cannot ship {product}: {weight} kg exceeds the {limit} kg courier limit")]
    Overweight {
        /// Product name.
        product: String,
        /// The product's weight.
        weight: f64,
        /// The configured courier limit.
        limit: f64,
    },

    /// The product has no name to address the delivery with.
    #[error("cannot deliver an unnamed product")]
    Unnamed,
}

/// Configuration could not be loaded.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A variable is set to a value that cannot be used.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the variable.
        key: String,
        /// Why the value was rejected.
        message: String,
    },
}
