//! The delivery handler routing each variant to its service.

use super::config::DeliveryConfig;
use super::error::DeliveryError;
use super::product::{DigitalProduct, PhysicalProduct, Product};
use super::service::{CourierService, DeliveryReceipt, DeliveryService, EmailService};

/// Owns one service per product variant.
///
/// The service types are generic so tests and callers can substitute
/// their own implementations.
#[derive(Clone, Debug)]
pub struct DeliveryHandler<C = CourierService, M = EmailService> {
    courier: C,
    email: M,
}

impl DeliveryHandler {
    /// Builds the default courier and email services from `config`.
    pub fn from_config(config: &DeliveryConfig) -> Self {
        Self::new(CourierService::from_config(config), EmailService::from_config(config))
    }
}

impl<C, M> DeliveryHandler<C, M>
where
    C: DeliveryService<PhysicalProduct>,
    M: DeliveryService<DigitalProduct>,
{
    /// Creates a handler from its two services.
    pub const fn new(courier: C, email: M) -> Self {
        Self { courier, email }
    }

    /// Delivers a physical product by courier.
    ///
    /// # Errors
    ///
    /// Propagates the courier's [`DeliveryError`].
    pub fn deliver_physical(&self, product: &PhysicalProduct) -> Result<DeliveryReceipt, DeliveryError> {
        tracing::debug!(product = %product.name, "dispatching physical product");
        self.courier.send(product)
    }

    /// Delivers a digital product by email.
    ///
    /// # Errors
    ///
    /// Propagates the email service's [`DeliveryError`].
    pub fn deliver_digital(&self, product: &DigitalProduct) -> Result<DeliveryReceipt, DeliveryError> {
        tracing::debug!(product = %product.name, "dispatching digital product");
        self.email.send(product)
    }

    /// Delivers any product; equivalent to [`Product::deliver`].
    ///
    /// # Errors
    ///
    /// Propagates the [`DeliveryError`] of the service that handled it.
    pub fn deliver(&self, product: &Product) -> Result<DeliveryReceipt, DeliveryError> {
        product.deliver(self)
    }

    /// Delivers every product, returning one result per product in order.
    ///
    /// A failed delivery does not stop the remaining ones.
    pub fn deliver_all<'a, I>(&self, products: I) -> Vec<Result<DeliveryReceipt, DeliveryError>>
    where
        I: IntoIterator<Item = &'a Product>,
    {
        let results: Vec<_> = products.into_iter().map(|product| product.deliver(self)).collect();
        let failed = results.iter().filter(|result| result.is_err()).count();
        tracing::info!(delivered = results.len() - failed, failed, "delivery batch finished");
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delivery::DeliveryMethod;
    use rstest::{fixture, rstest};
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingService {
        sent: RefCell<Vec<String>>,
    }

    impl DeliveryService<PhysicalProduct> for RecordingService {
        fn send(&self, product: &PhysicalProduct) -> Result<DeliveryReceipt, DeliveryError> {
            self.sent.borrow_mut().push(product.name.clone());
            Ok(DeliveryReceipt {
                product: product.name.clone(),
                method: DeliveryMethod::Courier,
                detail: String::new(),
            })
        }
    }

    impl DeliveryService<DigitalProduct> for RecordingService {
        fn send(&self, product: &DigitalProduct) -> Result<DeliveryReceipt, DeliveryError> {
            self.sent.borrow_mut().push(product.name.clone());
            Ok(DeliveryReceipt {
                product: product.name.clone(),
                method: DeliveryMethod::Email,
                detail: String::new(),
            })
        }
    }

    #[fixture]
    fn products() -> Vec<Product> {
        vec![
            Product::Digital(DigitalProduct::new("Digital Product", 5.00)),
            Product::Physical(PhysicalProduct::new("Physical Product", 10.00, 50.00)),
        ]
    }

    #[rstest]
    fn each_variant_reaches_only_its_service(products: Vec<Product>) {
        let courier = RecordingService::default();
        let email = RecordingService::default();
        let handler = DeliveryHandler::new(&courier, &email);

        for product in &products {
            handler.deliver(product).unwrap();
        }

        assert_eq!(*courier.sent.borrow(), vec!["Physical Product".to_string()]);
        assert_eq!(*email.sent.borrow(), vec!["Digital Product".to_string()]);
    }

    #[rstest]
    fn deliver_all_keeps_going_after_failure(products: Vec<Product>) {
        // 50 kg exceeds a 30 kg limit.
        let handler = DeliveryHandler::from_config(&DeliveryConfig::default());
        let results = handler.deliver_all(&products);

        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(DeliveryError::Overweight { .. })));
    }
}
