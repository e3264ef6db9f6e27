//! CLI command implementations.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod orders;

use twenzee_storefront::cart::{CartStore, CartSummary};
use twenzee_storefront::catalog::Catalog;
use twenzee_storefront::checkout::CustomerInfoCache;
use twenzee_storefront::config::StorefrontConfig;
use twenzee_storefront::error::Result;
use twenzee_storefront::orders::OrderLog;
use twenzee_storefront::storage::FileStore;

/// Shared command context: configuration plus the file-backed storage
/// every store opens over.
pub struct Context {
    config: StorefrontConfig,
    store: FileStore,
}

impl Context {
    /// Load configuration and set up storage.
    pub fn init() -> Result<Self> {
        let config = StorefrontConfig::from_env()?;
        let store = FileStore::new(config.data_dir.clone());
        Ok(Self { config, store })
    }

    /// Load the product catalog from disk.
    pub fn catalog(&self) -> Result<Catalog> {
        Ok(Catalog::load(&self.config.catalog_path)?)
    }

    /// Open the cart over the shared storage.
    pub fn cart(&self) -> CartStore {
        CartStore::open(Box::new(self.store.clone()))
    }

    /// Open the order log over the shared storage.
    pub fn order_log(&self) -> OrderLog {
        OrderLog::open(Box::new(self.store.clone()))
    }

    /// Open the customer-info cache over the shared storage.
    pub fn customer_info(&self) -> CustomerInfoCache {
        CustomerInfoCache::open(Box::new(self.store.clone()))
    }
}

/// Render a pricing summary the way the cart page does.
pub fn print_summary(summary: &CartSummary) {
    println!(
        "Subtotal ({} item{}): {}",
        summary.count,
        if summary.count == 1 { "" } else { "s" },
        summary.subtotal
    );
    println!("Tax (16%): {}", summary.tax);
    if summary.shipping.is_zero() {
        println!("Shipping: FREE");
        println!("You qualified for free shipping!");
    } else {
        println!("Shipping ({}): {}", summary.shipping_method, summary.shipping);
    }
    println!("Total: {}", summary.total);
}
