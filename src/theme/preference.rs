use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;

/// Light/dark visual theme of the whole site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Dark,
    Light,
}

impl DisplayMode {
    pub const ALL: [DisplayMode; 2] = [DisplayMode::Dark, DisplayMode::Light];

    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::Dark => "dark",
            DisplayMode::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Dark => DisplayMode::Light,
            DisplayMode::Light => DisplayMode::Dark,
        }
    }

    /// Class placed on the document root while this mode is active.
    pub fn root_class(&self) -> &'static str {
        match self {
            DisplayMode::Dark => "dark-mode",
            DisplayMode::Light => "light-mode",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown display mode: {0:?}")]
pub struct ParseModeError(pub String);

impl FromStr for DisplayMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(DisplayMode::Dark),
            "light" => Ok(DisplayMode::Light),
            other => Err(ParseModeError(other.to_string())),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("failed to read {key}: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write {key}: {reason}")]
    Write { key: String, reason: String },
}

/// Durable client-side key/value slot.
#[cfg_attr(test, mockall::automock)]
pub trait PreferenceStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Platform colour-scheme preference. `None` when the platform reports nothing.
#[cfg_attr(test, mockall::automock)]
pub trait AmbientSignal {
    fn prefers_dark(&self) -> Option<bool>;
}

/// Reflects the active mode somewhere downstream styling can see it.
#[cfg_attr(test, mockall::automock)]
pub trait RootMarker {
    fn mark(&self, mode: DisplayMode);
}

/// Where the mode came from during `initialize`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeSource {
    Persisted,
    Ambient,
    Default,
}

/// Single source of truth for the display mode.
///
/// Built once per session and shared through context; every mutation is
/// written back to storage and mirrored onto the root marker. Storage
/// failures never reach the caller.
pub struct PreferenceStore<S, A, M> {
    storage: S,
    ambient: A,
    marker: M,
    key: String,
    mode: DisplayMode,
}

impl<S, A, M> PreferenceStore<S, A, M>
where
    S: PreferenceStorage,
    A: AmbientSignal,
    M: RootMarker,
{
    pub fn new(storage: S, ambient: A, marker: M) -> Self {
        Self::with_key(storage, ambient, marker, config::get_theme_storage_key())
    }

    pub fn with_key(storage: S, ambient: A, marker: M, key: impl Into<String>) -> Self {
        Self {
            storage,
            ambient,
            marker,
            key: key.into(),
            mode: DisplayMode::default(),
        }
    }

    /// Resolves the mode (persisted, then ambient, then dark) and marks the root.
    pub fn initialize(&mut self) -> DisplayMode {
        let (mode, source) = self.resolve();
        info!("display mode {} resolved from {:?}", mode, source);
        self.mode = mode;
        self.marker.mark(mode);
        mode
    }

    pub fn current_mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn toggle_mode(&mut self) -> DisplayMode {
        self.set_mode(self.mode.toggled())
    }

    pub fn set_mode(&mut self, mode: DisplayMode) -> DisplayMode {
        debug!("display mode {} -> {}", self.mode, mode);
        self.mode = mode;
        if let Err(e) = self.storage.save(&self.key, mode.as_str()) {
            warn!("display mode not persisted: {}", e);
        }
        self.marker.mark(mode);
        mode
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    fn resolve(&self) -> (DisplayMode, ModeSource) {
        match self.storage.load(&self.key) {
            Ok(Some(saved)) => match saved.parse::<DisplayMode>() {
                Ok(mode) => return (mode, ModeSource::Persisted),
                Err(e) => warn!("ignoring persisted value: {}", e),
            },
            Ok(None) => {}
            Err(e) => warn!("display mode storage unreadable: {}", e),
        }
        match self.ambient.prefers_dark() {
            Some(true) => (DisplayMode::Dark, ModeSource::Ambient),
            Some(false) => (DisplayMode::Light, ModeSource::Ambient),
            None => (DisplayMode::default(), ModeSource::Default),
        }
    }
}

/// In-memory storage. Clones share the same slots, so a clone handed to a
/// second store behaves like a later session on the same device.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    slots: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.get(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Ambient signal with a fixed answer.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedSignal(pub Option<bool>);

impl AmbientSignal for FixedSignal {
    fn prefers_dark(&self) -> Option<bool> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    const KEY: &str = "test-theme";

    fn quiet_marker() -> MockRootMarker {
        let mut marker = MockRootMarker::new();
        marker.expect_mark().return_const(());
        marker
    }

    fn store_with(
        storage: MemoryStorage,
        prefers_dark: Option<bool>,
    ) -> PreferenceStore<MemoryStorage, FixedSignal, MockRootMarker> {
        PreferenceStore::with_key(storage, FixedSignal(prefers_dark), quiet_marker(), KEY)
    }

    #[test]
    fn test_mode_parse_and_display() {
        assert_eq!("dark".parse::<DisplayMode>(), Ok(DisplayMode::Dark));
        assert_eq!("light".parse::<DisplayMode>(), Ok(DisplayMode::Light));
        assert!("Dark".parse::<DisplayMode>().is_err());
        assert_eq!(DisplayMode::Light.to_string(), "light");
        assert_eq!(DisplayMode::Dark.root_class(), "dark-mode");
    }

    #[test]
    fn test_toggle_parity() {
        for start in DisplayMode::ALL {
            let storage = MemoryStorage::new();
            storage.save(KEY, start.as_str()).unwrap();
            let mut store = store_with(storage, None);
            assert_eq!(store.initialize(), start);

            for n in 1..=7 {
                let mode = store.toggle_mode();
                let expected = if n % 2 == 0 { start } else { start.toggled() };
                assert_eq!(mode, expected, "after {} toggles", n);
                assert_eq!(store.current_mode(), expected);
            }
        }
    }

    #[test]
    fn test_persisted_value_beats_ambient_signal() {
        for ambient in [Some(true), Some(false), None] {
            let storage = MemoryStorage::new();
            storage.save(KEY, "light").unwrap();
            let mut store = store_with(storage, ambient);
            assert_eq!(store.initialize(), DisplayMode::Light);
            assert_eq!(store.current_mode(), DisplayMode::Light);
        }
    }

    #[test]
    fn test_ambient_signal_without_persisted_value() {
        let mut dark = store_with(MemoryStorage::new(), Some(true));
        assert_eq!(dark.initialize(), DisplayMode::Dark);

        let mut light = store_with(MemoryStorage::new(), Some(false));
        assert_eq!(light.initialize(), DisplayMode::Light);

        let mut silent = store_with(MemoryStorage::new(), None);
        assert_eq!(silent.initialize(), DisplayMode::Dark);
    }

    #[test]
    fn test_garbage_persisted_value_is_ignored() {
        let storage = MemoryStorage::new();
        storage.save(KEY, "sepia").unwrap();
        let mut store = store_with(storage, Some(false));
        assert_eq!(store.initialize(), DisplayMode::Light);
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let storage = MemoryStorage::new();
        storage.save(KEY, "light").unwrap();
        let mut store = store_with(storage, Some(true));
        assert_eq!(store.initialize(), DisplayMode::Light);
        assert_eq!(store.initialize(), DisplayMode::Light);
    }

    #[test]
    fn test_initialize_does_not_persist() {
        let storage = MemoryStorage::new();
        let mut store = store_with(storage.clone(), Some(false));
        store.initialize();
        assert_eq!(storage.get(KEY), None);
    }

    #[test]
    fn test_toggle_persists_and_marks_root() {
        let mut storage = MockPreferenceStorage::new();
        storage
            .expect_load()
            .with(eq(KEY))
            .returning(|_| Ok(None));
        storage
            .expect_save()
            .with(eq(KEY), eq("dark"))
            .times(1)
            .returning(|_, _| Ok(()));

        let mut marker = MockRootMarker::new();
        let mut seq = mockall::Sequence::new();
        marker
            .expect_mark()
            .with(eq(DisplayMode::Light))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        marker
            .expect_mark()
            .with(eq(DisplayMode::Dark))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        let mut store = PreferenceStore::with_key(storage, FixedSignal(Some(false)), marker, KEY);
        assert_eq!(store.initialize(), DisplayMode::Light);
        assert_eq!(store.toggle_mode(), DisplayMode::Dark);
    }

    #[test]
    fn test_unavailable_storage_degrades_to_memory() {
        let mut storage = MockPreferenceStorage::new();
        storage
            .expect_load()
            .returning(|_| Err(StorageError::Unavailable));
        storage
            .expect_save()
            .returning(|_, _| Err(StorageError::Unavailable));

        let mut ambient = MockAmbientSignal::new();
        ambient.expect_prefers_dark().times(1).return_const(Some(false));

        let mut store = PreferenceStore::with_key(storage, ambient, quiet_marker(), KEY);
        assert_eq!(store.initialize(), DisplayMode::Light);
        assert_eq!(store.toggle_mode(), DisplayMode::Dark);
        assert_eq!(store.current_mode(), DisplayMode::Dark);
    }

    #[test]
    fn test_ambient_not_consulted_when_persisted() {
        let storage = MemoryStorage::new();
        storage.save(KEY, "dark").unwrap();
        let mut ambient = MockAmbientSignal::new();
        ambient.expect_prefers_dark().never();

        let mut store = PreferenceStore::with_key(storage, ambient, quiet_marker(), KEY);
        assert_eq!(store.initialize(), DisplayMode::Dark);
    }

    #[test]
    fn test_set_mode_writes_through() {
        let storage = MemoryStorage::new();
        let mut store = store_with(storage.clone(), None);
        store.initialize();
        store.set_mode(DisplayMode::Light);
        assert_eq!(storage.get(KEY).as_deref(), Some("light"));
    }
}
