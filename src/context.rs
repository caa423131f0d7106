//! App-wide state shared through Dioxus context.
//!
//! The [`App`](crate::app::App) component provides the preference store and
//! the animation timing once; pages read them with the hooks below.
//!
//! ## Usage
//!
//! ```ignore
//! let theme = use_theme();
//! let mut prefs = use_preferences();
//! prefs.write().toggle()?;
//! ```

use std::path::{Path, PathBuf};

use dioxus::prelude::*;
use vitrine_core::{AnimationTiming, PreferenceStore, Storage, Theme};

/// File name of the preference database inside the data directory.
pub const PREFERENCES_FILE: &str = "vitrine.redb";

/// Get the data directory for the application.
/// Uses the global data dir set from command line args.
pub fn get_data_dir() -> PathBuf {
    crate::get_data_dir()
}

/// Open the on-disk preference store, or an in-memory one if the database
/// cannot be opened. The theme toggle works either way; only persistence
/// across restarts is lost.
pub fn open_preferences(data_dir: &Path) -> PreferenceStore {
    let path = data_dir.join(PREFERENCES_FILE);
    match Storage::new(&path) {
        Ok(storage) => {
            tracing::info!(path = %path.display(), "preference store opened");
            PreferenceStore::open(storage)
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                "Failed to open preference store, theme will not persist: {}",
                e
            );
            PreferenceStore::in_memory()
        }
    }
}

/// Hook to access the preference store from context.
pub fn use_preferences() -> Signal<PreferenceStore> {
    use_context::<Signal<PreferenceStore>>()
}

/// Current theme. Reading it subscribes the caller to theme changes.
pub fn use_theme() -> Theme {
    use_preferences().read().get()
}

/// Flip the theme and persist it. A failed write is logged; the new theme
/// still applies for the rest of the session.
pub fn toggle_theme(mut prefs: Signal<PreferenceStore>) {
    if let Err(e) = prefs.write().toggle() {
        tracing::warn!("Failed to persist theme preference: {}", e);
    }
}

/// Hook to access the animation timing from context.
pub fn use_timing() -> AnimationTiming {
    use_context::<AnimationTiming>()
}
