//! Integration tests for Twenzee.
//!
//! The unit tests in `twenzee-storefront` run against in-memory storage;
//! the tests here exercise the full stack over a real data directory,
//! including process restarts simulated by reopening every store from
//! disk.
//!
//! Run with: `cargo test -p twenzee-integration-tests`

#![cfg_attr(not(test), forbid(unsafe_code))]

use tempfile::TempDir;
use twenzee_core::{Money, ProductId};
use twenzee_storefront::cart::CartStore;
use twenzee_storefront::catalog::{Catalog, Product};
use twenzee_storefront::checkout::{CheckoutCoordinator, CustomerInfoCache};
use twenzee_storefront::orders::OrderLog;
use twenzee_storefront::storage::FileStore;

/// A storefront over a throwaway data directory.
///
/// Every accessor opens a fresh store over the same directory, so calling
/// one twice behaves like a page reload.
pub struct TestStorefront {
    data_dir: TempDir,
    pub catalog: Catalog,
}

impl TestStorefront {
    /// Set up a data directory seeded with a small catalog file.
    ///
    /// # Panics
    ///
    /// Panics when the temporary directory cannot be created or seeded.
    #[must_use]
    pub fn new() -> Self {
        let data_dir = tempfile::tempdir().expect("Failed to create data dir");
        let products = seed_products();
        let catalog_path = data_dir.path().join("catalog.json");
        std::fs::write(
            &catalog_path,
            serde_json::to_string(&products).expect("Failed to serialize catalog"),
        )
        .expect("Failed to seed catalog");
        let catalog = Catalog::load(&catalog_path).expect("Failed to load catalog");
        Self { data_dir, catalog }
    }

    /// The data directory backing every store.
    #[must_use]
    pub fn data_path(&self) -> &std::path::Path {
        self.data_dir.path()
    }

    fn store(&self) -> FileStore {
        FileStore::new(self.data_dir.path())
    }

    /// Open the cart from disk.
    #[must_use]
    pub fn cart(&self) -> CartStore {
        CartStore::open(Box::new(self.store()))
    }

    /// Open the order log from disk.
    #[must_use]
    pub fn order_log(&self) -> OrderLog {
        OrderLog::open(Box::new(self.store()))
    }

    /// Open the customer-info cache from disk.
    #[must_use]
    pub fn customer_info(&self) -> CustomerInfoCache {
        CustomerInfoCache::open(Box::new(self.store()))
    }

    /// Build a fresh checkout coordinator over disk-backed stores.
    #[must_use]
    pub fn checkout(&self) -> CheckoutCoordinator {
        CheckoutCoordinator::new(self.order_log(), self.customer_info())
    }

    /// A seeded product by id.
    ///
    /// # Panics
    ///
    /// Panics when the id is not in the seeded catalog.
    #[must_use]
    pub fn product(&self, id: i32) -> &Product {
        self.catalog
            .get(ProductId::new(id))
            .expect("Product not in seeded catalog")
    }
}

impl Default for TestStorefront {
    fn default() -> Self {
        Self::new()
    }
}

fn seed_products() -> Vec<Product> {
    vec![
        product(1, "Oversized Hoodie", 4500, "hoodies", &["M", "L", "XL"]),
        product(2, "Graphic Tee", 2000, "tees", &["S", "M", "L"]),
        product(3, "Cargo Pants", 5500, "pants", &["30", "32", "34"]),
        product(4, "Snapback Cap", 1500, "accessories", &["One Size"]),
    ]
}

fn product(id: i32, name: &str, price: i64, category: &str, sizes: &[&str]) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        price: Money::from_major(price),
        original_price: None,
        images: vec![format!("assets/images/product-{id}.jpg")],
        category: category.to_string(),
        sizes: sizes.iter().map(ToString::to_string).collect(),
        rating: 4.5,
        review_count: 12,
        is_new: false,
        is_trending: false,
        in_stock: true,
        description: String::new(),
        features: None,
    }
}
