//! Persisted display preferences
//!
//! [`ThemeStore`] owns the dark/light flag. It reads the stored choice once at
//! start-up, falls back to the OS preference when nothing is stored, and writes
//! every change straight back. Storage failures are logged and otherwise
//! ignored; the preference then lives only in memory.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

/// Storage key holding `"dark"` or `"light"`
pub const THEME_STORAGE_KEY: &str = "saby-theme";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,
    #[error("storage write failed: {0}")]
    WriteFailed(String),
}

/// Durable string key-value storage (browser local storage in production)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store, shared between clones
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store that has no backing storage at all, e.g. private browsing
#[derive(Clone, Copy, Debug, Default)]
pub struct UnavailableStore;

impl KeyValueStore for UnavailableStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

/// Decode a stored theme value
pub fn parse_theme(value: &str) -> Option<bool> {
    match value {
        "dark" => Some(true),
        "light" => Some(false),
        _ => None,
    }
}

pub fn theme_value(is_dark: bool) -> &'static str {
    if is_dark { "dark" } else { "light" }
}

pub struct ThemeStore<S: KeyValueStore> {
    store: S,
    is_dark: bool,
    explicit: bool,
}

impl<S: KeyValueStore> ThemeStore<S> {
    /// Load the stored preference, or adopt the OS preference when none is stored
    pub fn init(store: S, system_prefers_dark: bool) -> Self {
        let stored = store.get(THEME_STORAGE_KEY).as_deref().and_then(parse_theme);
        Self {
            store,
            is_dark: stored.unwrap_or(system_prefers_dark),
            explicit: stored.is_some(),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    /// True once the user (now or in an earlier session) picked a theme
    pub fn has_explicit_choice(&self) -> bool {
        self.explicit
    }

    pub fn set(&mut self, is_dark: bool) {
        self.is_dark = is_dark;
        self.explicit = true;
        if let Err(e) = self.store.set(THEME_STORAGE_KEY, theme_value(is_dark)) {
            leptos::logging::warn!("Theme preference not persisted: {}", e);
        }
    }

    pub fn toggle(&mut self) {
        self.set(!self.is_dark);
    }

    /// Follow an OS-level change, unless the user has chosen explicitly
    pub fn system_changed(&mut self, prefers_dark: bool) -> bool {
        if !self.explicit {
            self.is_dark = prefers_dark;
        }
        self.is_dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_reload_round_trip() {
        let store = MemoryStore::new();
        let mut theme = ThemeStore::init(store.clone(), false);
        theme.set(true);

        let reloaded = ThemeStore::init(store.clone(), false);
        assert!(reloaded.is_dark());
        assert_eq!(store.get(THEME_STORAGE_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn test_os_preference_used_when_nothing_stored() {
        assert!(ThemeStore::init(MemoryStore::new(), true).is_dark());
        assert!(!ThemeStore::init(MemoryStore::new(), false).is_dark());
    }

    #[test]
    fn test_stored_value_beats_os_preference() {
        let store = MemoryStore::new();
        store.set(THEME_STORAGE_KEY, "light").unwrap();
        let theme = ThemeStore::init(store, true);
        assert!(!theme.is_dark());
        assert!(theme.has_explicit_choice());
    }

    #[test]
    fn test_garbage_value_falls_back_to_os() {
        let store = MemoryStore::new();
        store.set(THEME_STORAGE_KEY, "purple").unwrap();
        assert!(ThemeStore::init(store, true).is_dark());
    }

    #[test]
    fn test_toggle_persists_each_change() {
        let store = MemoryStore::new();
        let mut theme = ThemeStore::init(store.clone(), false);
        theme.toggle();
        assert_eq!(store.get(THEME_STORAGE_KEY).as_deref(), Some("dark"));
        theme.toggle();
        assert_eq!(store.get(THEME_STORAGE_KEY).as_deref(), Some("light"));
        assert!(!theme.is_dark());
    }

    #[test]
    fn test_unavailable_storage_keeps_memory_state() {
        let mut theme = ThemeStore::init(UnavailableStore, false);
        theme.toggle();
        assert!(theme.is_dark());
    }

    #[test]
    fn test_system_change_only_without_explicit_choice() {
        let mut theme = ThemeStore::init(MemoryStore::new(), false);
        assert!(theme.system_changed(true));
        theme.set(false);
        assert!(!theme.system_changed(true));
    }
}
