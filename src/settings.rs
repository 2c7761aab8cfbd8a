//! User settings: validation, persistence, and the load-time decode of
//! whatever an earlier session saved.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::{KeyValueStore, USER_SETTINGS_KEY};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UserSettings {
    pub name: String,
    pub email: String,
    pub genre: String,
}

/// Result of decoding the persisted settings record.
#[derive(Debug, Clone, PartialEq)]
pub enum SavedSettings {
    /// Nothing has been saved yet.
    Missing,
    /// A record exists but is not valid JSON.
    Invalid,
    Valid(UserSettings),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Name is required.")]
    EmptyName,
    #[error("Please enter a valid email.")]
    InvalidEmail,
}

pub fn load_saved(store: &dyn KeyValueStore) -> SavedSettings {
    let Some(raw) = store.get(USER_SETTINGS_KEY) else {
        return SavedSettings::Missing;
    };
    match serde_json::from_str(&raw) {
        Ok(settings) => SavedSettings::Valid(settings),
        Err(err) => {
            tracing::warn!("saved settings are not valid JSON: {err}");
            SavedSettings::Invalid
        }
    }
}

/// Validate and persist the settings record. Validation failure blocks the
/// save entirely: the store is left untouched.
pub fn submit(
    store: &dyn KeyValueStore,
    name: &str,
    email: &str,
    genre: &str,
) -> Result<UserSettings, SettingsError> {
    let name = name.trim();
    let email = email.trim();

    if name.is_empty() {
        return Err(SettingsError::EmptyName);
    }
    if !validate_email(email) {
        return Err(SettingsError::InvalidEmail);
    }

    let settings = UserSettings {
        name: name.to_string(),
        email: email.to_string(),
        genre: genre.trim().to_string(),
    };
    match serde_json::to_string(&settings) {
        Ok(raw) => store.set(USER_SETTINGS_KEY, &raw),
        Err(err) => tracing::warn!("failed to serialize settings: {err}"),
    }
    Ok(settings)
}

pub fn clear(store: &dyn KeyValueStore) {
    store.remove(USER_SETTINGS_KEY);
}

/// Permissive shape check: one or more non-space, non-`@` characters, an `@`,
/// the same again, a dot, and a non-empty tail. Not full RFC validation.
pub fn validate_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.contains(char::is_whitespace) {
        return false;
    }
    if domain.contains('@') || domain.contains(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
