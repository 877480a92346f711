//! `localStorage`-backed preference store.

use portfolio::error::StoreError;
use portfolio::store::PreferenceStore;
use web_sys::Storage;

pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    /// Bind to `window.localStorage`. Private browsing modes may deny
    /// access; the store then reads as empty and rejects writes.
    pub fn new(window: &web_sys::Window) -> Self {
        Self { storage: window.local_storage().ok().flatten() }
    }
}

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|err| StoreError::Write(format!("{err:?}")))
    }
}
