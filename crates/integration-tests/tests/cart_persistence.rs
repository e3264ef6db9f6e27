//! Cart state over a real data directory, across simulated reloads.
//!
//! Every `storefront.cart()` call opens a fresh store over the same
//! directory, so consecutive calls behave like page reloads.

#![allow(clippy::unwrap_used)]

use twenzee_core::{Money, ProductId, ShippingMethod};
use twenzee_integration_tests::TestStorefront;
use twenzee_storefront::storage::{CART_KEY, StorageBackend as _};

#[test]
fn test_cart_survives_reload() {
    let storefront = TestStorefront::new();

    let mut cart = storefront.cart();
    cart.add_item(storefront.product(1), "M", 2);
    cart.add_item(storefront.product(2), "L", 1);
    drop(cart);

    let reloaded = storefront.cart();
    assert_eq!(reloaded.items().len(), 2);
    assert_eq!(reloaded.count(), 3);
    assert_eq!(reloaded.items()[0].name, "Oversized Hoodie");
}

#[test]
fn test_merge_persists_across_reload() {
    let storefront = TestStorefront::new();

    storefront.cart().add_item(storefront.product(2), "M", 1);
    storefront.cart().add_item(storefront.product(2), "M", 2);

    let cart = storefront.cart();
    assert_eq!(cart.items().len(), 1);
    assert_eq!(cart.items()[0].quantity, 3);
}

#[test]
fn test_removal_persists_across_reload() {
    let storefront = TestStorefront::new();

    let mut cart = storefront.cart();
    cart.add_item(storefront.product(1), "M", 1);
    cart.add_item(storefront.product(2), "S", 1);
    drop(cart);

    assert!(storefront.cart().remove_item(ProductId::new(1), "M"));

    let cart = storefront.cart();
    assert_eq!(cart.items().len(), 1);
    assert_eq!(cart.items()[0].id, ProductId::new(2));
}

#[test]
fn test_summary_from_reloaded_state() {
    let storefront = TestStorefront::new();

    let mut cart = storefront.cart();
    cart.add_item(storefront.product(2), "M", 2);
    cart.add_item(storefront.product(4), "One Size", 1);
    drop(cart);

    // 2 x 2000 + 1500 = 5500; tax 880; standard shipping 299.
    let summary = storefront.cart().summary(ShippingMethod::Standard);
    assert_eq!(summary.subtotal, Money::from_major(5500));
    assert_eq!(summary.tax, Money::from_major(880));
    assert_eq!(summary.shipping, Money::from_major(299));
    assert_eq!(summary.total, Money::from_major(6679));
}

#[test]
fn test_free_shipping_on_disk_backed_cart() {
    let storefront = TestStorefront::new();

    let mut cart = storefront.cart();
    cart.add_item(storefront.product(3), "32", 2);
    drop(cart);

    // Subtotal 11000 clears the 10000 threshold.
    let summary = storefront.cart().summary(ShippingMethod::Express);
    assert_eq!(summary.shipping, Money::ZERO);
}

#[test]
fn test_corrupted_cart_file_degrades_to_empty() {
    let storefront = TestStorefront::new();
    storefront.cart().add_item(storefront.product(1), "M", 1);

    let store = twenzee_storefront::storage::FileStore::new(storefront.data_path());
    store.write(CART_KEY, "{broken json").unwrap();

    let cart = storefront.cart();
    assert!(cart.is_empty());

    // The store is usable again after the degrade.
    let mut cart = storefront.cart();
    cart.add_item(storefront.product(2), "S", 1);
    assert_eq!(storefront.cart().count(), 1);
}
