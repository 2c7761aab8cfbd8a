//! Browser-backed stores. Values are kept as raw strings so the persisted
//! format matches what other pages of the demo wrote before.

use gloo_storage::{LocalStorage, SessionStorage, Storage};

use super::KeyValueStore;

/// localStorage, durable across reloads.
pub struct LocalStore;

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(err) = LocalStorage::raw().set_item(key, value) {
            tracing::warn!("localStorage write failed for {key}: {err:?}");
        }
    }

    fn remove(&self, key: &str) {
        if let Err(err) = LocalStorage::raw().remove_item(key) {
            tracing::warn!("localStorage remove failed for {key}: {err:?}");
        }
    }
}

/// sessionStorage, cleared at the end of the browsing session.
pub struct SessionStore;

impl KeyValueStore for SessionStore {
    fn get(&self, key: &str) -> Option<String> {
        SessionStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(err) = SessionStorage::raw().set_item(key, value) {
            tracing::warn!("sessionStorage write failed for {key}: {err:?}");
        }
    }

    fn remove(&self, key: &str) {
        if let Err(err) = SessionStorage::raw().remove_item(key) {
            tracing::warn!("sessionStorage remove failed for {key}: {err:?}");
        }
    }
}
