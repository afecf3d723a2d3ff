//! Key-value storage backends for the persisted transcript.
//!
//! SYSTEM CONTEXT
//! ==============
//! History code talks to a [`KeyValueStore`] rather than to `localStorage`
//! directly, so the browser backend and the in-memory backend used off-browser
//! and in tests share one persistence path.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::ChatError;

/// Minimal string key-value store in the shape of the Web Storage API.
pub trait KeyValueStore {
    /// Read `key`, `Ok(None)` when absent.
    ///
    /// # Errors
    ///
    /// Returns a [`ChatError`] when the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, ChatError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`ChatError`] when the backend rejects the write (quota, privacy mode).
    fn set_item(&self, key: &str, value: &str) -> Result<(), ChatError>;
}

/// In-memory store; the off-browser backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, ChatError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), ChatError> {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// `window.localStorage`.
#[cfg(feature = "csr")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

#[cfg(feature = "csr")]
impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, ChatError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(ChatError::StorageUnavailable)
    }
}

#[cfg(feature = "csr")]
impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, ChatError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| ChatError::Storage { op: "read", detail: format!("{e:?}") })
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), ChatError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| ChatError::Storage { op: "write", detail: format!("{e:?}") })
    }
}

/// The store the widget persists into on this platform.
pub fn platform_store() -> Box<dyn KeyValueStore> {
    #[cfg(feature = "csr")]
    {
        Box::new(LocalStorage)
    }
    #[cfg(not(feature = "csr"))]
    {
        Box::new(MemoryStore::default())
    }
}
