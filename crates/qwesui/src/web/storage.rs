//! [`PreferenceStore`] over `window.localStorage`.
//!
//! Values are stored as plain strings (`light` / `dark`), not JSON, so pages that read
//! the key directly keep working.

use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;

use crate::host::{PreferenceStore, StorageError};

/// Browser local storage.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalPreferences;

impl LocalPreferences {
    fn raw() -> Result<web_sys::Storage, StorageError> {
        // `LocalStorage::raw` throws when storage is disabled; probe first.
        match window().local_storage() {
            Ok(Some(_)) => Ok(LocalStorage::raw()),
            _ => Err(StorageError::Unavailable),
        }
    }
}

impl PreferenceStore for LocalPreferences {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::raw()?
            .get_item(key)
            .map_err(|err| StorageError::ReadFailed {
                key: key.to_string(),
                detail: format!("{err:?}"),
            })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::raw()?
            .set_item(key, value)
            .map_err(|err| StorageError::WriteRejected {
                key: key.to_string(),
                detail: format!("{err:?}"),
            })
    }
}
