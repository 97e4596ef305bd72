use log::warn;
use web_sys::{window, Storage};

use super::preference::{AmbientSignal, DisplayMode, PreferenceStorage, RootMarker, StorageError};

const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<Storage, StorageError> {
        window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl PreferenceStorage for LocalStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }
}

/// `prefers-color-scheme` media query.
#[derive(Clone, Copy, Debug, Default)]
pub struct MediaQuerySignal;

impl AmbientSignal for MediaQuerySignal {
    fn prefers_dark(&self) -> Option<bool> {
        window()
            .and_then(|w| w.match_media(PREFERS_DARK_QUERY).ok().flatten())
            .map(|query| query.matches())
    }
}

/// Class list of `<html>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRoot;

impl RootMarker for DocumentRoot {
    fn mark(&self, mode: DisplayMode) {
        let Some(root) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let classes = root.class_list();
        let [a, b] = DisplayMode::ALL.map(|m| m.root_class());
        if let Err(e) = classes.remove_2(a, b) {
            warn!("failed to clear mode classes: {:?}", e);
        }
        if let Err(e) = classes.add_1(mode.root_class()) {
            warn!("failed to set {}: {:?}", mode.root_class(), e);
        }
    }
}
