pub mod consent;
pub mod history;

use web_sys::window;

/// The slice of the Web Storage API the page relies on.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove_item(&self, key: &str) -> Result<(), String>;
}

/// `window.localStorage`. Every call degrades to a no-op when storage is
/// unavailable (private browsing, disabled cookies).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        window().and_then(|w| w.local_storage().ok()).flatten()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(key).ok()).flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        if let Some(storage) = Self::storage() {
            storage
                .set_item(key, value)
                .map_err(|_| format!("Failed to store '{key}'"))?;
        }
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), String> {
        if let Some(storage) = Self::storage() {
            storage
                .remove_item(key)
                .map_err(|_| format!("Failed to remove '{key}'"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub use memory::MemoryStorage;
