//! In-memory storage fake for tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use super::{StorageBackend, StorageError};

/// In-memory key-value storage.
///
/// Clones share the same underlying map, so a test can keep a handle,
/// hand a clone to a store, and later build a second store over the same
/// data to simulate a page reload. [`Self::fail_writes`] simulates a
/// quota-exceeded backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<HashMap<String, String>>>,
    writes_fail: Rc<Cell<bool>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail (or succeed again).
    pub fn fail_writes(&self, fail: bool) {
        self.writes_fail.set(fail);
    }

    /// Direct snapshot of a stored value, bypassing the trait.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl StorageBackend for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.writes_fail.get() {
            return Err(StorageError::Write {
                key: key.to_string(),
                reason: "simulated quota exceeded".to_string(),
            });
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
