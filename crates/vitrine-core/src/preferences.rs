//! Theme preference: an in-memory source of truth, persisted on change.
//!
//! The store never reads presentational state back. Every toggle control
//! renders from [`PreferenceStore::get`], so two toggles on one page cannot
//! drift apart.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use parking_lot::Mutex;

use crate::error::{VitrineError, VitrineResult};
use crate::storage::Storage;

/// Storage key for the theme preference.
pub const THEME_KEY: &str = "theme";

/// Site color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = VitrineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(VitrineError::InvalidTheme(other.to_string())),
        }
    }
}

/// A string key-value store for preferences.
pub trait PreferenceBackend: Send + Sync {
    fn load(&self, key: &str) -> VitrineResult<Option<String>>;
    fn save(&self, key: &str, value: &str) -> VitrineResult<()>;
}

impl PreferenceBackend for Storage {
    fn load(&self, key: &str) -> VitrineResult<Option<String>> {
        self.get_preference(key)
    }

    fn save(&self, key: &str, value: &str) -> VitrineResult<()> {
        self.set_preference(key, value)
    }
}

/// Volatile backend for tests and for running without a data directory.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceBackend for MemoryBackend {
    fn load(&self, key: &str) -> VitrineResult<Option<String>> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> VitrineResult<()> {
        self.values.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Holds the current theme and writes every change through to a backend.
pub struct PreferenceStore {
    backend: Box<dyn PreferenceBackend>,
    theme: Theme,
}

impl PreferenceStore {
    /// Read the stored theme from `backend`.
    ///
    /// A missing value, an unreadable backend, or an unrecognised value all
    /// fall back to [`Theme::Light`]; the latter two are logged.
    pub fn open(backend: impl PreferenceBackend + 'static) -> Self {
        let theme = match backend.load(THEME_KEY) {
            Ok(Some(value)) => value.parse().unwrap_or_else(|e: VitrineError| {
                tracing::warn!("Ignoring stored theme: {}", e);
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                tracing::warn!("Failed to read theme preference: {}", e);
                Theme::default()
            }
        };

        Self {
            backend: Box::new(backend),
            theme,
        }
    }

    pub fn in_memory() -> Self {
        Self::open(MemoryBackend::new())
    }

    pub fn get(&self) -> Theme {
        self.theme
    }

    /// Set and persist the theme.
    ///
    /// The in-memory value changes even if persisting fails, so the page stays
    /// consistent for the rest of the session.
    pub fn set(&mut self, theme: Theme) -> VitrineResult<()> {
        self.theme = theme;
        self.backend.save(THEME_KEY, theme.as_str())?;
        tracing::info!(theme = %theme, "theme preference saved");
        Ok(())
    }

    /// Flip the theme and return the new value.
    pub fn toggle(&mut self) -> VitrineResult<Theme> {
        let next = self.theme.toggled();
        self.set(next)?;
        Ok(next)
    }
}

impl fmt::Debug for PreferenceStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreferenceStore")
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}
