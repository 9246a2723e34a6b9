//! Preference Store
//!
//! The theme is the only thing this page remembers between visits.
//! Storage sits behind a trait so the service can be exercised natively.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::config::THEME_STORAGE_KEY;
use crate::error::{UiError, UiResult};
use crate::models::Theme;

/// Minimal key-value persistence
pub trait PreferenceStorage {
    fn get_item(&self, key: &str) -> UiResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> UiResult<()>;
}

/// `window.localStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> UiResult<web_sys::Storage> {
        web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .ok_or(UiError::Storage)
    }
}

impl PreferenceStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> UiResult<Option<String>> {
        Self::storage()?.get_item(key).map_err(|_| UiError::Storage)
    }

    fn set_item(&self, key: &str, value: &str) -> UiResult<()> {
        Self::storage()?.set_item(key, value).map_err(|_| UiError::Storage)
    }
}

/// In-memory storage, used by tests
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl PreferenceStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> UiResult<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> UiResult<()> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Theme preference service
#[derive(Debug, Default)]
pub struct PreferenceService<S: PreferenceStorage> {
    storage: S,
}

impl<S: PreferenceStorage> PreferenceService<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Stored theme, dark when nothing (or nothing readable) is stored
    pub fn get(&self) -> Theme {
        match self.storage.get_item(THEME_STORAGE_KEY) {
            Ok(Some(raw)) => Theme::parse(&raw),
            Ok(None) => Theme::default(),
            Err(err) => {
                log::warn!("reading theme preference: {}", err);
                Theme::default()
            }
        }
    }

    pub fn set(&self, theme: Theme) {
        if let Err(err) = self.storage.set_item(THEME_STORAGE_KEY, theme.as_str()) {
            log::warn!("saving theme preference: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStorage;

    impl PreferenceStorage for BrokenStorage {
        fn get_item(&self, _key: &str) -> UiResult<Option<String>> {
            Err(UiError::Storage)
        }
        fn set_item(&self, _key: &str, _value: &str) -> UiResult<()> {
            Err(UiError::Storage)
        }
    }

    #[test]
    fn test_default_is_dark() {
        let prefs = PreferenceService::new(MemoryStorage::default());
        assert_eq!(prefs.get(), Theme::Dark);
    }

    #[test]
    fn test_set_is_idempotent() {
        let prefs = PreferenceService::new(MemoryStorage::default());
        prefs.set(Theme::Light);
        prefs.set(Theme::Light);
        assert_eq!(prefs.get(), Theme::Light);
    }

    #[test]
    fn test_toggle_sequence_persists_last_value() {
        let prefs = PreferenceService::new(MemoryStorage::default());
        let mut shown = prefs.get();
        for _ in 0..7 {
            shown = shown.toggled();
            prefs.set(shown);
            assert_eq!(prefs.get(), shown);
        }
        assert_eq!(shown, Theme::Light);
    }

    #[test]
    fn test_corrupted_value_reads_as_dark() {
        let storage = MemoryStorage::default();
        storage.set_item(THEME_STORAGE_KEY, "neon").unwrap();
        let prefs = PreferenceService::new(storage);
        assert_eq!(prefs.get(), Theme::Dark);
        prefs.set(Theme::Light);
        assert_eq!(prefs.get(), Theme::Light);
    }

    #[test]
    fn test_unavailable_storage_degrades() {
        let prefs = PreferenceService::new(BrokenStorage);
        assert_eq!(prefs.get(), Theme::Dark);
        prefs.set(Theme::Light);
        assert_eq!(prefs.get(), Theme::Dark);
    }
}
