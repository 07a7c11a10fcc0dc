//! `localStorage`-backed preference store.

use web_sys::{Storage, Window};

use crate::dom::PreferenceStore;
use crate::error::PageError;

pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    #[must_use]
    pub fn new(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("localStorage unavailable: {err:?}");
                None
            }
        };
        Self { storage }
    }
}

impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Option<String> {
        match self.storage.as_ref()?.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("localStorage read of {key:?} failed: {err:?}");
                None
            }
        }
    }

    fn store(&self, key: &str, value: &str) -> Result<(), PageError> {
        let storage = self.storage.as_ref().ok_or_else(|| PageError::Storage("localStorage unavailable".into()))?;
        storage
            .set_item(key, value)
            .map_err(|err| PageError::Storage(format!("{err:?}")))
    }
}
