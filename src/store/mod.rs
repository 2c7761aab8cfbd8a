//! Key-value storage ports shared by all three views.
//!
//! The views never reach into browser storage directly: each one receives
//! handles to a persistent store and a session-scoped store and talks to them
//! through the [`KeyValueStore`] trait. On wasm these are backed by
//! localStorage/sessionStorage; on native the persistent store is a SQLite
//! key-value table and the session store is an in-process map. Every persisted
//! key has a typed record with an explicit decode step that falls back to a
//! typed default instead of surfacing a raw blob.

use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Mutex;

use crate::library::LibraryTrack;

#[cfg(not(target_arch = "wasm32"))]
mod native;
#[cfg(target_arch = "wasm32")]
mod web;

/// Well-known keys in the persistent store.
pub const FAVORITES_KEY: &str = "favorites";
pub const USER_SETTINGS_KEY: &str = "userSettings";
pub const SEARCH_QUERY_KEY: &str = "searchQuery";
/// Well-known key in the session store.
pub const SELECTED_SONG_KEY: &str = "selectedSong";

/// A string key-value store. Both storage scopes and the test fake implement
/// this, so components can be exercised without a browser.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// The persistent store, durable across reloads.
pub fn local_store() -> Rc<dyn KeyValueStore> {
    #[cfg(target_arch = "wasm32")]
    return Rc::new(web::LocalStore);
    #[cfg(not(target_arch = "wasm32"))]
    Rc::new(native::SqliteStore)
}

/// The session store, cleared when the browsing session ends. On native the
/// process lifetime is the session.
pub fn session_store() -> Rc<dyn KeyValueStore> {
    #[cfg(target_arch = "wasm32")]
    return Rc::new(web::SessionStore);
    #[cfg(not(target_arch = "wasm32"))]
    Rc::new(MemoryStore::default())
}

/// In-memory store used for the native session scope and as a drop-in fake in
/// tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.remove(key);
    }
}

/// Set of favorited track ids, persisted as a JSON array under
/// [`FAVORITES_KEY`]. Absent or unreadable data decodes to the empty set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Favorites(Vec<u32>);

impl Favorites {
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let Some(raw) = store.get(FAVORITES_KEY) else {
            return Self::default();
        };
        match serde_json::from_str(&raw) {
            Ok(ids) => Self(ids),
            Err(err) => {
                tracing::warn!("discarding unreadable favorites: {err}");
                Self::default()
            }
        }
    }

    /// Add `id` if absent, remove it if present, and persist the result.
    /// Returns the resulting set so the caller can confirm it to the user.
    pub fn toggle(store: &dyn KeyValueStore, id: u32) -> Self {
        let mut favorites = Self::load(store);
        match favorites.0.iter().position(|&fav| fav == id) {
            Some(index) => {
                favorites.0.remove(index);
            }
            None => favorites.0.push(id),
        }
        favorites.save(store);
        favorites
    }

    fn save(&self, store: &dyn KeyValueStore) {
        if let Ok(raw) = serde_json::to_string(&self.0) {
            store.set(FAVORITES_KEY, &raw);
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.0.contains(&id)
    }

    pub fn ids(&self) -> &[u32] {
        &self.0
    }
}

/// Snapshot the selected library track into the session store, overwriting
/// any previous selection.
pub fn save_selected_song(store: &dyn KeyValueStore, track: &LibraryTrack) {
    match serde_json::to_string(track) {
        Ok(raw) => store.set(SELECTED_SONG_KEY, &raw),
        Err(err) => tracing::warn!("failed to serialize selected song: {err}"),
    }
}

/// Read back the last selected track, if any. Unreadable data is silently
/// ignored; the key is never cleared by reading.
pub fn load_selected_song(store: &dyn KeyValueStore) -> Option<LibraryTrack> {
    let raw = store.get(SELECTED_SONG_KEY)?;
    serde_json::from_str(&raw).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn favorites_default_to_empty() {
        let store = MemoryStore::default();
        assert_eq!(Favorites::load(&store), Favorites::default());
    }

    #[test]
    fn favorites_toggle_adds_then_removes() {
        let store = MemoryStore::default();

        let favorites = Favorites::toggle(&store, 2);
        assert_eq!(favorites.ids(), &[2]);
        assert!(favorites.contains(2));

        // Toggling the same id twice restores the prior state.
        let favorites = Favorites::toggle(&store, 2);
        assert_eq!(favorites.ids(), &[] as &[u32]);

        // The persisted representation round-trips through the store.
        Favorites::toggle(&store, 1);
        let favorites = Favorites::toggle(&store, 3);
        assert_eq!(favorites.ids(), &[1, 3]);
        assert_eq!(Favorites::load(&store).ids(), &[1, 3]);
    }

    #[test]
    fn unreadable_favorites_decode_to_empty() {
        let store = MemoryStore::default();
        store.set(FAVORITES_KEY, "not json");
        assert_eq!(Favorites::load(&store), Favorites::default());
    }

    #[test]
    fn selected_song_round_trips_through_session_store() {
        let store = MemoryStore::default();
        let track = LibraryTrack {
            id: 102,
            title: "Electric Night".to_string(),
            artist: "Synthwave".to_string(),
            length: 220,
            tags: vec!["energetic".to_string()],
            body: None,
        };

        save_selected_song(&store, &track);
        assert_eq!(load_selected_song(&store), Some(track));
    }

    #[test]
    fn unreadable_selected_song_is_ignored() {
        let store = MemoryStore::default();
        store.set(SELECTED_SONG_KEY, "{broken");
        assert_eq!(load_selected_song(&store), None);
    }

    #[test]
    fn memory_store_overwrites_and_removes() {
        let store = MemoryStore::default();
        store.set("k", "a");
        store.set("k", "b");
        assert_eq!(store.get("k").as_deref(), Some("b"));
        store.remove("k");
        assert_eq!(store.get("k"), None);
    }
}
