//! Browser `localStorage` implementation for WebAssembly.

use super::{KeyValueStore, StorageError, StorageResult};

/// `window.localStorage`-backed storage for WebAssembly.
///
/// Note: This is intentionally not Send/Sync since WASM is single-threaded
/// and `web_sys::Storage` handles are not thread-safe.
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    /// Acquire the page's `localStorage` handle.
    pub fn new() -> StorageResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("No window object".to_string()))?;

        let storage = window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("localStorage error: {:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage not available".to_string()))?;

        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::Other(format!("Failed to read {}: {:?}", key, e)))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        // Fails with a QuotaExceededError when the origin is out of space.
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::Io(format!("Failed to write {}: {:?}", key, e)))
    }
}
