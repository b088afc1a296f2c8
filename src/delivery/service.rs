//! Delivery services, one per product variant.

use super::config::DeliveryConfig;
use super::error::DeliveryError;
use super::product::{DeliveryMethod, DigitalProduct, PhysicalProduct};

/// Proof that a product was handed over for delivery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeliveryReceipt {
    /// Name of the delivered product.
    pub product: String,
    /// How it was delivered.
    pub method: DeliveryMethod,
    /// Service-specific detail, such as the sender address.
    pub detail: String,
}

/// A service able to deliver products of type `P`.
pub trait DeliveryService<P> {
    /// Hands `product` over for delivery.
    ///
    /// # Errors
    ///
    /// Returns a [`DeliveryError`] when the service refuses the product.
    fn send(&self, product: &P) -> Result<DeliveryReceipt, DeliveryError>;
}

impl<P, S: DeliveryService<P> + ?Sized> DeliveryService<P> for &S {
    fn send(&self, product: &P) -> Result<DeliveryReceipt, DeliveryError> {
        (**self).send(product)
    }
}

/// Ships physical products, up to a weight limit.
#[derive(Clone, Debug, PartialEq)]
pub struct CourierService {
    max_weight_kg: f64,
}

impl CourierService {
    /// Creates a courier accepting parcels up to `max_weight_kg`.
    pub const fn new(max_weight_kg: f64) -> Self {
        Self { max_weight_kg }
    }

    /// Creates a courier using the configured weight limit.
    pub const fn from_config(config: &DeliveryConfig) -> Self {
        Self::new(config.courier_max_weight_kg)
    }

    /// Returns the weight limit in kilograms.
    pub const fn max_weight_kg(&self) -> f64 {
        self.max_weight_kg
    }
}

impl DeliveryService<PhysicalProduct> for CourierService {
    fn send(&self, product: &PhysicalProduct) -> Result<DeliveryReceipt, DeliveryError> {
        if product.name.is_empty() {
            return Err(DeliveryError::Unnamed);
        }
        if product.weight.is_nan() || product.weight <= 0.0 {
            tracing::warn!(product = %product.name, weight = product.weight, "rejected parcel weight");
            return Err(DeliveryError::InvalidWeight {
                product: product.name.clone(),
                weight: product.weight,
            });
        }
        if product.weight > self.max_weight_kg {
            tracing::warn!(
                product = %product.name,
                weight = product.weight,
                limit = self.max_weight_kg,
                "parcel over courier limit"
            );
            return Err(DeliveryError::Overweight {
                product: product.name.clone(),
                weight: product.weight,
                limit: self.max_weight_kg,
            });
        }

        tracing::info!(product = %product.name, weight = product.weight, "parcel handed to courier");
        Ok(DeliveryReceipt {
            product: product.name.clone(),
            method: DeliveryMethod::Courier,
            detail: format!("{} kg parcel", product.weight),
        })
    }
}

/// Sends digital products from a fixed sender address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailService {
    sender: String,
}

impl EmailService {
    /// Creates an email service sending from `sender`.
    pub fn new(sender: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
        }
    }

    /// Creates an email service using the configured sender address.
    pub fn from_config(config: &DeliveryConfig) -> Self {
        Self::new(config.email_sender.clone())
    }

    /// Returns the sender address.
    pub fn sender(&self) -> &str {
        &self.sender
    }
}

impl DeliveryService<DigitalProduct> for EmailService {
    fn send(&self, product: &DigitalProduct) -> Result<DeliveryReceipt, DeliveryError> {
        if product.name.is_empty() {
            return Err(DeliveryError::Unnamed);
        }

        tracing::info!(product = %product.name, sender = %self.sender, "download link emailed");
        Ok(DeliveryReceipt {
            product: product.name.clone(),
            method: DeliveryMethod::Email,
            detail: format!("sent from {}", self.sender),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0)]
    #[case(-1.0)]
    #[case(f64::NAN)]
    fn courier_rejects_non_positive_weight(#[case] weight: f64) {
        let courier = CourierService::new(30.0);
        let result = courier.send(&PhysicalProduct::new("Lamp", 10.0, weight));
        assert!(matches!(result, Err(DeliveryError::InvalidWeight { .. })));
    }

    #[rstest]
    fn courier_rejects_overweight_parcel() {
        let courier = CourierService::new(30.0);
        let result = courier.send(&PhysicalProduct::new("Piano", 900.0, 250.0));
        assert_eq!(
            result,
            Err(DeliveryError::Overweight {
                product: "Piano".to_string(),
                weight: 250.0,
                limit: 30.0,
            })
        );
    }

    #[rstest]
    fn courier_accepts_weight_at_limit() {
        let courier = CourierService::new(30.0);
        let receipt = courier.send(&PhysicalProduct::new("Desk", 120.0, 30.0)).unwrap();
        assert_eq!(receipt.method, DeliveryMethod::Courier);
        assert_eq!(receipt.detail, "30 kg parcel");
    }

    #[rstest]
    fn email_receipt_names_sender() {
        let email = EmailService::new("shop@example.com");
        let receipt = email.send(&DigitalProduct::new("E-book", 9.5)).unwrap();
        assert_eq!(receipt.detail, "sent from shop@example.com");
    }

    #[rstest]
    fn unnamed_products_are_refused() {
        let email = EmailService::new("shop@example.com");
        assert_eq!(email.send(&DigitalProduct::new("", 1.0)), Err(DeliveryError::Unnamed));
    }
}
