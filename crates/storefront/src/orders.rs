//! Append-only order log.
//!
//! One [`OrderRecord`] is written per successful checkout. Records are
//! immutable snapshots: nothing in this system ever mutates or deletes
//! one after it lands in the log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use twenzee_core::{PaymentMethod, ShippingMethod};

use crate::cart::CartSummary;
use crate::storage::{ORDERS_KEY, StorageBackend, load_or_default};

/// Customer contact details captured at submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
    pub full_name: String,
    pub email: String,
    pub phone: String,
}

/// Shipping destination captured at submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub address: String,
    pub city: String,
    pub postal: String,
    pub country: String,
}

/// An immutable order, written once on successful checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    /// `ORD-<millisecond-timestamp>`.
    pub id: String,
    /// Submission time.
    pub date: DateTime<Utc>,
    pub customer: CustomerDetails,
    pub shipping: ShippingAddress,
    pub shipping_method: ShippingMethod,
    pub payment_method: PaymentMethod,
    /// Cart summary snapshot at submission time.
    pub order: CartSummary,
}

/// Build an order id from the submission time.
#[must_use]
pub fn order_id(at: DateTime<Utc>) -> String {
    format!("ORD-{}", at.timestamp_millis())
}

/// The persisted order log.
pub struct OrderLog {
    backend: Box<dyn StorageBackend>,
}

impl OrderLog {
    /// Open the log over a storage backend.
    #[must_use]
    pub fn open(backend: Box<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// All recorded orders, oldest first.
    ///
    /// Malformed stored data degrades to an empty log with a logged
    /// diagnostic.
    #[must_use]
    pub fn all(&self) -> Vec<OrderRecord> {
        load_or_default(self.backend.as_ref(), ORDERS_KEY)
    }

    /// Append an order and persist the full log.
    ///
    /// Returns `false` when the durable write failed; the order is still
    /// considered placed (the caller holds the record), but durability is
    /// not guaranteed and a warning is logged.
    pub fn append(&self, record: &OrderRecord) -> bool {
        let mut orders = self.all();
        orders.push(record.clone());

        match serde_json::to_string(&orders) {
            Ok(raw) => match self.backend.write(ORDERS_KEY, &raw) {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!(order = %record.id, error = %e, "Order log write failed");
                    false
                }
            },
            Err(e) => {
                tracing::warn!(order = %record.id, error = %e, "Order serialization failed");
                false
            }
        }
    }
}

impl std::fmt::Debug for OrderLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderLog").finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use twenzee_core::Money;

    use super::*;
    use crate::storage::MemoryStore;

    fn sample_order(id: &str) -> OrderRecord {
        let now = Utc::now();
        OrderRecord {
            id: id.to_string(),
            date: now,
            customer: CustomerDetails {
                full_name: "Ayesha Khan".to_string(),
                email: "ayesha@example.com".to_string(),
                phone: "0300-1234567".to_string(),
            },
            shipping: ShippingAddress {
                address: "12 Mall Road".to_string(),
                city: "Lahore".to_string(),
                postal: "54000".to_string(),
                country: "Pakistan".to_string(),
            },
            shipping_method: ShippingMethod::Standard,
            payment_method: PaymentMethod::Cod,
            order: CartSummary {
                items: Vec::new(),
                count: 0,
                subtotal: Money::ZERO,
                tax: Money::ZERO,
                shipping: Money::from_major(299),
                shipping_method: ShippingMethod::Standard,
                total: Money::from_major(299),
            },
        }
    }

    #[test]
    fn test_order_id_format() {
        let at = DateTime::from_timestamp_millis(1_700_000_000_000).unwrap();
        assert_eq!(order_id(at), "ORD-1700000000000");
    }

    #[test]
    fn test_append_accumulates() {
        let store = MemoryStore::new();
        let log = OrderLog::open(Box::new(store.clone()));

        assert!(log.append(&sample_order("ORD-1")));
        assert!(log.append(&sample_order("ORD-2")));

        let all = log.all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, "ORD-1");
        assert_eq!(all[1].id, "ORD-2");
    }

    #[test]
    fn test_survives_reopen() {
        let store = MemoryStore::new();
        OrderLog::open(Box::new(store.clone())).append(&sample_order("ORD-1"));

        let reopened = OrderLog::open(Box::new(store));
        assert_eq!(reopened.all().len(), 1);
    }

    #[test]
    fn test_malformed_log_degrades_to_empty() {
        let store = MemoryStore::new();
        store.write(ORDERS_KEY, "oops").unwrap();
        let log = OrderLog::open(Box::new(store));
        assert!(log.all().is_empty());
    }

    #[test]
    fn test_failed_write_reports_false() {
        let store = MemoryStore::new();
        let log = OrderLog::open(Box::new(store.clone()));
        store.fail_writes(true);
        assert!(!log.append(&sample_order("ORD-1")));
    }
}
