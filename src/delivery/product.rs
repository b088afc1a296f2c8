//! Product variants and their delivery dispatch.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::DeliveryError;
use super::handler::DeliveryHandler;
use super::service::{DeliveryReceipt, DeliveryService};

/// A product shipped to a physical address.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PhysicalProduct {
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: f64,
    /// Shipping weight in kilograms.
    pub weight: f64,
}

impl PhysicalProduct {
    /// Creates a physical product.
    pub fn new(name: impl Into<String>, price: f64, weight: f64) -> Self {
        Self {
            name: name.into(),
            price,
            weight,
        }
    }
}

/// A product sent to an email address. It has no weight at all.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DigitalProduct {
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: f64,
}

impl DigitalProduct {
    /// Creates a digital product.
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// How a product reaches its customer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DeliveryMethod {
    /// Handed to a courier.
    Courier,
    /// Sent by email.
    Email,
}

impl fmt::Display for DeliveryMethod {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Courier => formatter.write_str("Delivered to physical address"),
            Self::Email => formatter.write_str("Sent to email address"),
        }
    }
}

/// Every kind of product the catalog sells.
///
/// # Examples
///
/// ```rust
/// use presence::delivery::{DigitalProduct, PhysicalProduct, Product};
///
/// let product = Product::Physical(PhysicalProduct::new("Lamp", 30.00, 2.5));
/// assert_eq!(product.delivery_method().to_string(), "Delivered to physical address");
///
/// let product = Product::Digital(DigitalProduct::new("E-book", 9.99));
/// assert_eq!(product.delivery_method().to_string(), "Sent to email address");
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Product {
    /// Shipped by courier.
    Physical(PhysicalProduct),
    /// Sent by email.
    Digital(DigitalProduct),
}

impl Product {
    /// Returns the product's display name.
    pub fn name(&self) -> &str {
        match self {
            Self::Physical(product) => &product.name,
            Self::Digital(product) => &product.name,
        }
    }

    /// Returns the product's unit price.
    pub const fn price(&self) -> f64 {
        match self {
            Self::Physical(product) => product.price,
            Self::Digital(product) => product.price,
        }
    }

    /// Returns how this product is delivered.
    pub const fn delivery_method(&self) -> DeliveryMethod {
        match self {
            Self::Physical(_) => DeliveryMethod::Courier,
            Self::Digital(_) => DeliveryMethod::Email,
        }
    }

    /// Delivers this product through the handler's matching service.
    ///
    /// # Errors
    ///
    /// Returns the [`DeliveryError`] raised by the service that handled the
    /// product.
    pub fn deliver<C, M>(&self, handler: &DeliveryHandler<C, M>) -> Result<DeliveryReceipt, DeliveryError>
    where
        C: DeliveryService<PhysicalProduct>,
        M: DeliveryService<DigitalProduct>,
    {
        match self {
            Self::Physical(product) => handler.deliver_physical(product),
            Self::Digital(product) => handler.deliver_digital(product),
        }
    }
}

impl From<PhysicalProduct> for Product {
    fn from(product: PhysicalProduct) -> Self {
        Self::Physical(product)
    }
}

impl From<DigitalProduct> for Product {
    fn from(product: DigitalProduct) -> Self {
        Self::Digital(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn accessors_read_through_variants() {
        let physical: Product = PhysicalProduct::new("Lamp", 30.0, 2.5).into();
        let digital: Product = DigitalProduct::new("E-book", 9.5).into();

        assert_eq!(physical.name(), "Lamp");
        assert!((physical.price() - 30.0).abs() < f64::EPSILON);
        assert_eq!(digital.name(), "E-book");
        assert_eq!(digital.delivery_method(), DeliveryMethod::Email);
    }
}
