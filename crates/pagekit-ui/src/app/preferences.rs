//! Persistence helpers for the theme preference.

use crate::core::theme::{ThemeName, ThemeStore};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use wasm_bindgen::JsValue;

/// `localStorage`-backed preference store.
///
/// Values are stored raw (not JSON-encoded) so server templates can read them
/// with `localStorage.getItem`.
pub(super) struct LocalThemeStore;

impl ThemeStore for LocalThemeStore {
    fn load(&self, key: &str) -> Option<String> {
        match LocalStorage::raw().get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log_storage_error("get", key, &err);
                None
            }
        }
    }

    fn save(&self, key: &str, theme: &ThemeName) {
        if let Err(err) = LocalStorage::raw().set_item(key, theme.as_str()) {
            log_storage_error("set", key, &err);
        }
    }
}

fn log_storage_error(operation: &'static str, key: &str, detail: &JsValue) {
    console::error!("storage operation failed", operation, key, detail);
}
