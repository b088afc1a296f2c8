//! Catalog items.

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::delivery::{DigitalProduct, PhysicalProduct, Product};
use crate::fallible::ResultExt;
use crate::optional::OptionalValue;

/// Why a catalog item's weight cannot be used for shipping.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum WeightError {
    /// The item has no weight.
    #[error("No weight set")]
    Missing,

    /// The weight is zero, negative, or not a number.
    #[error("Weight {0} is not more than 0")]
    NotPositive(f64),
}

/// An item offered for sale.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CatalogItem {
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: f64,
    /// Shipping weight in kilograms; absent for digital goods.
    pub weight: OptionalValue<f64>,
}

impl CatalogItem {
    /// Creates an item with an explicit weight state.
    pub fn new(name: impl Into<String>, price: f64, weight: OptionalValue<f64>) -> Self {
        Self {
            name: name.into(),
            price,
            weight,
        }
    }

    /// Creates an item that ships with the given weight.
    pub fn physical(name: impl Into<String>, price: f64, weight: f64) -> Self {
        Self::new(name, price, OptionalValue::present(weight))
    }

    /// Creates an item without a weight.
    pub fn digital(name: impl Into<String>, price: f64) -> Self {
        Self::new(name, price, OptionalValue::absent())
    }

    /// Creates an item from a record whose weight column may be null.
    ///
    /// This is the only place a nullable weight is accepted.
    pub fn from_record(name: impl Into<String>, price: f64, weight: Option<f64>) -> Self {
        Self::new(name, price, weight.into())
    }

    /// Describes the weight, handling both cases in one chain.
    pub fn weight_label(&self) -> String {
        let mut label = String::new();
        self.weight
            .when_present(|weight| label = format!("{weight} kg"))
            .when_absent(|| label = "no weight (digital)".to_string());
        label
    }

    /// Shipping cost at `rate_per_kg`; absent for digital items.
    pub fn shipping_cost(&self, rate_per_kg: f64) -> OptionalValue<f64> {
        self.weight.map(|weight| weight * rate_per_kg)
    }

    /// Returns the weight if it is usable for shipping.
    ///
    /// # Errors
    ///
    /// Returns [`WeightError::Missing`] for digital items and
    /// [`WeightError::NotPositive`] for a weight that is not above zero.
    pub fn shipping_weight(&self) -> Result<f64, WeightError> {
        self.weight
            .ok_or(WeightError::Missing)
            .ensure(|weight| *weight > 0.0, |weight| WeightError::NotPositive(*weight))
    }

    /// Converts into the matching delivery variant.
    ///
    /// A present weight makes a physical product, an absent one a digital
    /// product.
    pub fn into_product(self) -> Product {
        match self.weight.into_option() {
            Some(weight) => Product::Physical(PhysicalProduct {
                name: self.name,
                price: self.price,
                weight,
            }),
            None => Product::Digital(DigitalProduct {
                name: self.name,
                price: self.price,
            }),
        }
    }
}
