//! Integration tests for catalog items and delivery dispatch.
//!
//! A product's weight decides how it is delivered. These tests walk the
//! same catalog through the optional-weight view and the closed-variant
//! view, and check that neither needs a null check at the call site.

#![cfg(feature = "delivery")]

mod common;

use common::{CapturedLogs, init_tracing};
use presence::catalog::{CatalogItem, WeightError};
use presence::delivery::{
    DeliveryConfig, DeliveryError, DeliveryHandler, DeliveryMethod, DigitalProduct,
    PhysicalProduct, Product,
};
use presence::optional::OptionalValue;
use rstest::{fixture, rstest};
use std::cell::Cell;

#[fixture]
fn catalog() -> Vec<CatalogItem> {
    vec![
        CatalogItem::new("Functional product", 50.00, OptionalValue::absent()),
        CatalogItem::new("Physical product", 30.00, OptionalValue::present(25.00)),
    ]
}

#[fixture]
fn handler() -> DeliveryHandler {
    DeliveryHandler::from_config(&DeliveryConfig::default())
}

// =============================================================================
// Optional weight
// =============================================================================

#[rstest]
fn each_item_takes_exactly_one_branch(catalog: Vec<CatalogItem>) {
    let physical = Cell::new(0);
    let digital = Cell::new(0);

    for item in &catalog {
        item.weight
            .when_present(|_| physical.set(physical.get() + 1))
            .when_absent(|| digital.set(digital.get() + 1));
    }

    assert_eq!(physical.get(), 1);
    assert_eq!(digital.get(), 1);
}

#[rstest]
fn positive_weights_only_on_physical_items(catalog: Vec<CatalogItem>) {
    let positive: Vec<bool> = catalog
        .iter()
        .map(|item| item.weight.is_present_and(|w| *w > 0.0))
        .collect();
    assert_eq!(positive, vec![false, true]);
}

#[rstest]
fn weight_to_result_then_ensure_then_map(catalog: Vec<CatalogItem>) {
    let shipping: Vec<Result<f64, WeightError>> = catalog
        .iter()
        .map(|item| item.shipping_weight().map(|w| w * 10.0))
        .collect();
    assert_eq!(shipping, vec![Err(WeightError::Missing), Ok(250.0)]);
    assert_eq!(WeightError::Missing.to_string(), "No weight set");
}

// =============================================================================
// Closed-variant dispatch
// =============================================================================

#[rstest]
fn catalog_items_become_matching_variants(catalog: Vec<CatalogItem>) {
    let products: Vec<Product> = catalog.into_iter().map(CatalogItem::into_product).collect();
    assert_eq!(
        products,
        vec![
            Product::Digital(DigitalProduct::new("Functional product", 50.00)),
            Product::Physical(PhysicalProduct::new("Physical product", 30.00, 25.00)),
        ]
    );
}

#[rstest]
fn products_deliver_through_single_dispatch(handler: DeliveryHandler) {
    init_tracing();
    let products = vec![
        Product::Digital(DigitalProduct::new("Digital Product", 5.00)),
        Product::Physical(PhysicalProduct::new("Physical Product", 10.00, 20.00)),
    ];

    let methods: Vec<DeliveryMethod> = products
        .iter()
        .map(|product| product.deliver(&handler).map(|receipt| receipt.method))
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(methods, vec![DeliveryMethod::Email, DeliveryMethod::Courier]);
    assert_eq!(methods[0].to_string(), "Sent to email address");
    assert_eq!(methods[1].to_string(), "Delivered to physical address");
}

#[rstest]
fn configured_limit_rejects_heavy_parcels() {
    let config = DeliveryConfig {
        courier_max_weight_kg: 10.0,
        ..DeliveryConfig::default()
    };
    let handler = DeliveryHandler::from_config(&config);

    let result = handler.deliver(&Product::Physical(PhysicalProduct::new("Crate", 80.0, 12.0)));

    assert_eq!(
        result.map_err(|error| error.to_string()),
        Err("cannot ship Crate: 12 kg exceeds the 10 kg courier limit".to_string())
    );
}

#[rstest]
fn deliver_all_logs_batch_summary(catalog: Vec<CatalogItem>, handler: DeliveryHandler) {
    let logs = CapturedLogs::default();
    let products: Vec<Product> = catalog.into_iter().map(CatalogItem::into_product).collect();

    let results = logs.capture(|| handler.deliver_all(&products));

    assert!(results.iter().all(Result::is_ok));
    let output = logs.contents();
    assert!(output.contains("delivery batch finished"), "unexpected log output: {output}");
    assert!(output.contains("download link emailed"));
    assert!(output.contains("parcel handed to courier"));
}

#[rstest]
fn receipts_carry_configured_sender() {
    let config = DeliveryConfig::from_lookup(|key| {
        (key == presence::delivery::EMAIL_SENDER_KEY).then(|| "shop@example.com".to_string())
    })
    .unwrap();
    let handler = DeliveryHandler::from_config(&config);

    let receipt = handler
        .deliver_digital(&DigitalProduct::new("E-book", 9.99))
        .unwrap();

    assert_eq!(receipt.detail, "sent from shop@example.com");
}

#[rstest]
fn invalid_weight_surfaces_as_delivery_error(handler: DeliveryHandler) {
    let item = CatalogItem::physical("Feather", 1.0, 0.0);
    let result = item.into_product().deliver(&handler);
    assert!(matches!(result, Err(DeliveryError::InvalidWeight { .. })));
}
