//! Persistence backend for storefront state.
//!
//! All state lives in three named slots: the cart, the order log, and the
//! customer-info cache. This module gives them one seam: a small string
//! key-value interface with one durable slot per key, file-backed in
//! production and in-memory in tests.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Storage key for the serialized cart line items.
pub const CART_KEY: &str = "twenzee_cart";

/// Storage key for the append-only order log.
pub const ORDERS_KEY: &str = "twenzee_orders";

/// Storage key for the customer-info prefill cache.
pub const CUSTOMER_INFO_KEY: &str = "twenzee_customer_info";

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend could not be read.
    #[error("storage read failed for key {key}: {reason}")]
    Read {
        /// Storage key being read.
        key: String,
        /// Underlying failure description.
        reason: String,
    },

    /// The backend could not be written (e.g. disk full, quota exceeded).
    #[error("storage write failed for key {key}: {reason}")]
    Write {
        /// Storage key being written.
        key: String,
        /// Underlying failure description.
        reason: String,
    },
}

/// A durable string slot per key.
///
/// Implementations must make a completed `write` visible to every
/// subsequent `read` of the same key, including reads from a freshly
/// constructed backend over the same underlying storage (the "reload"
/// case).
pub trait StorageBackend {
    /// Read the stored value for `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Read`] if the backend itself fails; a
    /// missing key is `Ok(None)`, not an error.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Durably replace the stored value for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Write`] if the value could not be made
    /// durable. Callers keep their in-memory state either way.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Load and deserialize a stored JSON value, degrading to the default on
/// missing or malformed data.
///
/// Malformed content is an operator diagnostic, never a user-facing
/// error: a cart that fails to parse reads as an empty cart, and the
/// order log and customer-info cache degrade the same way.
pub fn load_or_default<T>(backend: &dyn StorageBackend, key: &str) -> T
where
    T: serde::de::DeserializeOwned + Default,
{
    match backend.read(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "Malformed stored data, starting empty");
                T::default()
            }
        },
        Ok(None) => T::default(),
        Err(e) => {
            tracing::warn!(key, error = %e, "Storage read failed, starting empty");
            T::default()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_load_or_default_missing_key() {
        let store = MemoryStore::new();
        let items: Vec<i32> = load_or_default(&store, CART_KEY);
        assert!(items.is_empty());
    }

    #[test]
    fn test_load_or_default_malformed() {
        let store = MemoryStore::new();
        store.write(CART_KEY, "{not json").unwrap();
        let items: Vec<i32> = load_or_default(&store, CART_KEY);
        assert!(items.is_empty());
    }

    #[test]
    fn test_load_or_default_valid() {
        let store = MemoryStore::new();
        store.write(CART_KEY, "[1,2,3]").unwrap();
        let items: Vec<i32> = load_or_default(&store, CART_KEY);
        assert_eq!(items, vec![1, 2, 3]);
    }
}
