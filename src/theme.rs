//! Light/dark preference: resolution, toggling and persistence.
//!
//! Precedence on startup is persisted choice, then the system color scheme,
//! then [`DEFAULT_THEME`]. Once the user toggles, the choice is written back
//! and wins on every later load regardless of the system setting.

use std::fmt;
use std::str::FromStr;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{DEFAULT_THEME, THEME_STORAGE_KEY};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
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

    pub fn toggled(self) -> Theme {
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

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown theme {0:?}")]
pub struct ParseThemeError(String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("persistent storage is unavailable")]
    Unavailable,
    #[error("storage access failed: {0}")]
    Access(String),
}

/// Durable key-value storage for the preference.
pub trait PreferenceStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// The environment's color-scheme preference, if it states one.
pub trait SystemScheme {
    fn preferred(&self) -> Option<Theme>;
}

/// Where the active theme becomes visible (the document root class).
pub trait ThemeSurface {
    fn apply(&self, theme: Theme);
}

#[derive(Debug)]
pub struct ThemeStore<S, Q, D> {
    storage: S,
    system: Q,
    surface: D,
    current: Theme,
}

impl<S, Q, D> ThemeStore<S, Q, D>
where
    S: PreferenceStorage,
    Q: SystemScheme,
    D: ThemeSurface,
{
    pub fn new(storage: S, system: Q, surface: D) -> Self {
        Self {
            storage,
            system,
            surface,
            current: DEFAULT_THEME,
        }
    }

    pub fn resolve_initial(&mut self) -> Theme {
        let theme = match self.stored() {
            Some(theme) => {
                debug!("Using stored theme preference: {}", theme);
                theme
            }
            None => {
                let theme = self.system.preferred().unwrap_or(DEFAULT_THEME);
                debug!("No stored theme, falling back to {}", theme);
                theme
            }
        };
        self.current = theme;
        self.surface.apply(theme);
        info!("Resolved theme: {}", theme);
        theme
    }

    pub fn toggle(&mut self) -> Theme {
        self.set(self.current.toggled())
    }

    /// Makes `theme` current, persists it and applies it to the surface.
    pub fn set(&mut self, theme: Theme) -> Theme {
        self.current = theme;
        if let Err(e) = self.storage.save(THEME_STORAGE_KEY, theme.as_str()) {
            warn!("Could not persist theme {}: {}", theme, e);
        }
        self.surface.apply(theme);
        theme
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    fn stored(&self) -> Option<Theme> {
        match self.storage.load(THEME_STORAGE_KEY) {
            Ok(Some(raw)) => match raw.parse() {
                Ok(theme) => Some(theme),
                Err(e) => {
                    warn!("Ignoring stored theme: {}", e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!("Could not read theme preference: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStorage(RefCell<HashMap<String, String>>);

    impl MemoryStorage {
        fn with(key: &str, value: &str) -> Self {
            let storage = Self::default();
            storage.0.borrow_mut().insert(key.to_string(), value.to_string());
            storage
        }

        fn get(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }
    }

    impl PreferenceStorage for MemoryStorage {
        fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.get(key))
        }

        fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    struct DisabledStorage;

    impl PreferenceStorage for DisabledStorage {
        fn load(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn save(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Access("quota exceeded".to_string()))
        }
    }

    struct System(Option<Theme>);

    impl SystemScheme for System {
        fn preferred(&self) -> Option<Theme> {
            self.0
        }
    }

    #[derive(Default)]
    struct RootClass(RefCell<Vec<Theme>>);

    impl ThemeSurface for RootClass {
        fn apply(&self, theme: Theme) {
            self.0.borrow_mut().push(theme);
        }
    }

    impl RootClass {
        fn last(&self) -> Option<Theme> {
            self.0.borrow().last().copied()
        }
    }

    #[test]
    fn system_dark_wins_without_stored_preference() {
        let mut store = ThemeStore::new(
            MemoryStorage::default(),
            System(Some(Theme::Dark)),
            RootClass::default(),
        );
        assert_eq!(store.resolve_initial(), Theme::Dark);
        assert_eq!(store.surface().last(), Some(Theme::Dark));
        assert_eq!(store.storage().get(THEME_STORAGE_KEY), None);
    }

    #[test]
    fn stored_preference_beats_system() {
        let mut store = ThemeStore::new(
            MemoryStorage::with(THEME_STORAGE_KEY, "light"),
            System(Some(Theme::Dark)),
            RootClass::default(),
        );
        assert_eq!(store.resolve_initial(), Theme::Light);
        assert_eq!(store.current(), Theme::Light);
        assert_eq!(store.surface().last(), Some(Theme::Light));
    }

    #[test]
    fn default_applies_when_nothing_is_known() {
        let mut store = ThemeStore::new(MemoryStorage::default(), System(None), RootClass::default());
        assert_eq!(store.resolve_initial(), DEFAULT_THEME);
    }

    #[test]
    fn toggle_persists_and_applies() {
        let mut store = ThemeStore::new(
            MemoryStorage::default(),
            System(Some(Theme::Dark)),
            RootClass::default(),
        );
        store.resolve_initial();
        assert_eq!(store.toggle(), Theme::Light);
        assert_eq!(store.current(), Theme::Light);
        assert_eq!(store.storage().get(THEME_STORAGE_KEY).as_deref(), Some("light"));
        assert_eq!(store.surface().last(), Some(Theme::Light));
    }

    #[test]
    fn toggled_choice_survives_a_reload() {
        let mut first = ThemeStore::new(
            MemoryStorage::default(),
            System(Some(Theme::Dark)),
            RootClass::default(),
        );
        first.resolve_initial();
        first.toggle();
        let persisted = first.storage().get(THEME_STORAGE_KEY).unwrap();

        let mut reloaded = ThemeStore::new(
            MemoryStorage::with(THEME_STORAGE_KEY, &persisted),
            System(Some(Theme::Dark)),
            RootClass::default(),
        );
        assert_eq!(reloaded.resolve_initial(), Theme::Light);
    }

    #[test]
    fn garbage_in_storage_falls_back_to_system() {
        let mut store = ThemeStore::new(
            MemoryStorage::with(THEME_STORAGE_KEY, "sepia"),
            System(Some(Theme::Light)),
            RootClass::default(),
        );
        assert_eq!(store.resolve_initial(), Theme::Light);
    }

    #[test]
    fn disabled_storage_does_not_break_toggling() {
        let mut store = ThemeStore::new(DisabledStorage, System(Some(Theme::Light)), RootClass::default());
        assert_eq!(store.resolve_initial(), Theme::Light);
        assert_eq!(store.toggle(), Theme::Dark);
        assert_eq!(store.surface().last(), Some(Theme::Dark));
    }

    #[test]
    fn theme_string_forms() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(
            "Blue".parse::<Theme>(),
            Err(ParseThemeError("Blue".to_string()))
        );
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
        assert_eq!(Theme::Dark.toggled().to_string(), "light");
    }
}
