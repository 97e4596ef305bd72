//! Display mode preference: the store itself, its browser bindings and the
//! Yew context that hands it to the page tree.

pub mod browser;
pub mod context;
pub mod preference;

pub use context::{use_theme, ThemeHandle, ThemePicker, ThemeProvider, ThemeToggle};
pub use preference::{
    AmbientSignal, DisplayMode, FixedSignal, MemoryStorage, ModeSource, ParseModeError,
    PreferenceStorage, PreferenceStore, RootMarker, StorageError,
};
