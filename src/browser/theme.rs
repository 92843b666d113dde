use log::warn;
use wasm_bindgen::JsValue;
use web_sys::{window, Storage};

use crate::config::{DARK_SCHEME_QUERY, LIGHT_SCHEME_QUERY};
use crate::theme::{PreferenceStorage, StorageError, SystemScheme, Theme, ThemeStore, ThemeSurface};

pub type BrowserThemeStore = ThemeStore<LocalStorage, MediaScheme, DocumentRoot>;

pub fn browser_theme_store() -> BrowserThemeStore {
    ThemeStore::new(LocalStorage, MediaScheme, DocumentRoot)
}

fn access_error(e: JsValue) -> StorageError {
    StorageError::Access(format!("{:?}", e))
}

/// The origin's `localStorage`.
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<Storage, StorageError> {
        window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(access_error)?
            .ok_or(StorageError::Unavailable)
    }
}

impl PreferenceStorage for LocalStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?.get_item(key).map_err(access_error)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?.set_item(key, value).map_err(access_error)
    }
}

/// `prefers-color-scheme`, read on demand.
pub struct MediaScheme;

impl MediaScheme {
    fn matches(query: &str) -> bool {
        window()
            .and_then(|w| w.match_media(query).ok().flatten())
            .map(|list| list.matches())
            .unwrap_or(false)
    }
}

impl SystemScheme for MediaScheme {
    fn preferred(&self) -> Option<Theme> {
        if Self::matches(DARK_SCHEME_QUERY) {
            Some(Theme::Dark)
        } else if Self::matches(LIGHT_SCHEME_QUERY) {
            Some(Theme::Light)
        } else {
            None
        }
    }
}

/// Class on `<html>`: exactly one of `light` / `dark`.
pub struct DocumentRoot;

impl ThemeSurface for DocumentRoot {
    fn apply(&self, theme: Theme) {
        let Some(root) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let classes = root.class_list();
        if let Err(e) = classes
            .remove_1(theme.toggled().as_str())
            .and_then(|_| classes.add_1(theme.as_str()))
        {
            warn!("Could not apply {} theme to document: {:?}", theme, e);
        }
    }
}
