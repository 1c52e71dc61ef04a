//! # Browser `localStorage` store
//!
//! [`LocalStorageStore`] is the [`KeyValueStore`] used on the **web platform**. It
//! reads and writes `window.localStorage` through `web-sys`.
//!
//! ## Error handling
//!
//! Reads swallow errors and return `None`, so an unavailable storage area (private
//! browsing, disabled cookies) looks like an anonymous session. Failed writes are
//! logged. The authoritative state always lives on the backend.

use web_sys::Storage;

use crate::session::KeyValueStore;

/// `window.localStorage`-backed KeyValueStore.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable, dropping write to {key}");
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            tracing::warn!("localStorage write to {key} failed: {e:?}");
        }
    }

    fn remove(&self, key: &str) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if let Err(e) = storage.remove_item(key) {
            tracing::warn!("localStorage remove of {key} failed: {e:?}");
        }
    }
}
