//! Cart store: line items, pricing, and durable persistence.
//!
//! The cart is the sole owner of its line items. Every mutator persists
//! the full item list before returning and fires the count-changed
//! notification, so a read on the very next event (a navbar badge, a
//! checkout summary) always sees consistent state.
//!
//! Pricing is derived, never stored: [`CartStore::summary`] recomputes
//! subtotal, tax, shipping, and total on every call.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use twenzee_core::{Money, ProductId, ShippingMethod};

use crate::catalog::Product;
use crate::storage::{CART_KEY, StorageBackend, load_or_default};

/// Flat tax applied to the subtotal (16%).
#[must_use]
pub fn tax_rate() -> Decimal {
    Decimal::new(16, 2)
}

/// Orders at or above this subtotal ship free.
#[must_use]
pub fn free_shipping_threshold() -> Money {
    Money::from_major(10_000)
}

/// Flat shipping rate for a method, below the free-shipping threshold.
#[must_use]
pub fn shipping_rate(method: ShippingMethod) -> Money {
    match method {
        ShippingMethod::Standard => Money::from_major(299),
        ShippingMethod::Express => Money::from_major(599),
    }
}

/// One row in the cart, keyed by `(id, size)`.
///
/// Wire field names match the persisted cart record exactly:
/// `id, name, price, image, size, quantity, addedAt`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Product this line refers to.
    pub id: ProductId,
    /// Product name at the time it was added.
    pub name: String,
    /// Unit price at the time it was added.
    pub price: Money,
    /// Primary product image reference.
    pub image: String,
    /// Selected size; part of the line identity.
    pub size: String,
    /// Always >= 1. A quantity that would reach 0 removes the line.
    pub quantity: u32,
    /// When the line was first added. Merging keeps the original.
    pub added_at: DateTime<Utc>,
}

impl LineItem {
    /// Line total: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.price * self.quantity
    }

    fn matches(&self, id: ProductId, size: &str) -> bool {
        self.id == id && self.size == size
    }
}

/// Derived pricing breakdown for a chosen shipping method.
///
/// Pure function of the cart contents; recomputed on every read and never
/// persisted on its own. It is snapshotted into an order record at
/// checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    /// Line items, in insertion order.
    pub items: Vec<LineItem>,
    /// Total unit count across all lines.
    pub count: u32,
    /// Sum of line totals.
    pub subtotal: Money,
    /// 16% of the subtotal, rounded to the nearest whole unit.
    pub tax: Money,
    /// Zero at or above the free-shipping threshold, else the flat rate.
    pub shipping: Money,
    /// Method the shipping quote was computed for.
    pub shipping_method: ShippingMethod,
    /// Subtotal + tax + shipping.
    pub total: Money,
}

/// The shopping cart: owns the line items and their persistence.
pub struct CartStore {
    items: Vec<LineItem>,
    backend: Box<dyn StorageBackend>,
    count_listeners: Vec<Box<dyn Fn(u32)>>,
}

impl CartStore {
    /// Open the cart over a storage backend, loading any persisted items.
    ///
    /// Malformed persisted data degrades to an empty cart with a logged
    /// diagnostic; the user flow continues uninterrupted.
    #[must_use]
    pub fn open(backend: Box<dyn StorageBackend>) -> Self {
        let items: Vec<LineItem> = load_or_default(backend.as_ref(), CART_KEY);
        tracing::debug!(lines = items.len(), "Cart loaded");
        Self {
            items,
            backend,
            count_listeners: Vec::new(),
        }
    }

    /// Register a callback fired with the new unit count after every
    /// mutation. The canonical consumer is a cart badge that must track
    /// the count without polling.
    pub fn on_count_changed(&mut self, listener: impl Fn(u32) + 'static) {
        self.count_listeners.push(Box::new(listener));
    }

    /// Add a product in the given size.
    ///
    /// If a line with the same `(id, size)` already exists its quantity
    /// increases by `quantity`; otherwise a new line is appended. Returns
    /// `false` without mutating anything when `quantity` is 0 or `size`
    /// is blank.
    pub fn add_item(&mut self, product: &Product, size: &str, quantity: u32) -> bool {
        if quantity == 0 || size.trim().is_empty() {
            tracing::warn!(product = %product.id, size, quantity, "Rejected invalid add to cart");
            return false;
        }

        if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.matches(product.id, size))
        {
            item.quantity += quantity;
        } else {
            self.items.push(LineItem {
                id: product.id,
                name: product.name.clone(),
                price: product.price,
                image: product.images.first().cloned().unwrap_or_default(),
                size: size.to_string(),
                quantity,
                added_at: Utc::now(),
            });
        }

        self.persist_and_notify();
        true
    }

    /// Remove the line matching `(id, size)`. Returns whether a removal
    /// occurred; no match is a no-op, not an error.
    pub fn remove_item(&mut self, id: ProductId, size: &str) -> bool {
        let Some(index) = self.items.iter().position(|item| item.matches(id, size)) else {
            return false;
        };
        self.items.remove(index);
        self.persist_and_notify();
        true
    }

    /// Set the quantity of the matching line exactly.
    ///
    /// A quantity of 0 removes the line instead; a quantity below 1 never
    /// exists in the cart.
    pub fn update_quantity(&mut self, id: ProductId, size: &str, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove_item(id, size);
        }

        let Some(item) = self.items.iter_mut().find(|item| item.matches(id, size)) else {
            return false;
        };
        item.quantity = quantity;
        self.persist_and_notify();
        true
    }

    /// Increment the matching line's quantity by one.
    pub fn increase_quantity(&mut self, id: ProductId, size: &str) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.matches(id, size)) else {
            return false;
        };
        item.quantity += 1;
        self.persist_and_notify();
        true
    }

    /// Decrement the matching line's quantity by one; decrementing from 1
    /// removes the line.
    pub fn decrease_quantity(&mut self, id: ProductId, size: &str) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.matches(id, size)) else {
            return false;
        };
        if item.quantity > 1 {
            item.quantity -= 1;
            self.persist_and_notify();
            true
        } else {
            self.remove_item(id, size)
        }
    }

    /// Empty the cart and persist the empty state.
    pub fn clear(&mut self) {
        self.items.clear();
        self.persist_and_notify();
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Total unit count across all lines.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Compute the pricing breakdown for a shipping method.
    #[must_use]
    pub fn summary(&self, method: ShippingMethod) -> CartSummary {
        let subtotal: Money = self.items.iter().map(LineItem::line_total).sum();
        let tax = (subtotal * tax_rate()).round_half_up();
        let shipping = if subtotal >= free_shipping_threshold() {
            Money::ZERO
        } else {
            shipping_rate(method)
        };

        CartSummary {
            items: self.items.clone(),
            count: self.count(),
            subtotal,
            tax,
            shipping,
            shipping_method: method,
            total: subtotal + tax + shipping,
        }
    }

    /// Persist the full item list.
    ///
    /// Returns `false` when the durable write failed; the in-memory state
    /// stays correct either way, and the failure is logged so a caller
    /// can surface a durability warning. Listeners are not notified; the
    /// count-changed signal belongs to mutations, and a bare re-save
    /// changes nothing.
    pub fn save(&self) -> bool {
        match serde_json::to_string(&self.items) {
            Ok(raw) => match self.backend.write(CART_KEY, &raw) {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!(error = %e, "Cart write failed; state kept in memory only");
                    false
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, "Cart serialization failed");
                false
            }
        }
    }

    /// Every mutator ends here: persist, then fire the count signal.
    fn persist_and_notify(&self) {
        self.save();
        let count = self.count();
        for listener in &self.count_listeners {
            listener(count);
        }
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("items", &self.items)
            .field("listeners", &self.count_listeners.len())
            .finish_non_exhaustive()
    }
}
