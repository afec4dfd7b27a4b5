use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage};

use viewstate::theme::{Theme, ThemeStore};

// values are stored raw rather than json-encoded, so that the persisted theme reads as
// plain "light" or "dark" to anything else inspecting the page's storage
pub fn set_local_storage(key: &str, value: &str) {
    LocalStorage::raw()
        .set_item(key, value)
        .unwrap_or_else(|err| console_error!(format!("Failed to set local storage {key}: {err:?}")))
}

pub fn get_local_storage(key: &str) -> anyhow::Result<Option<String>> {
    LocalStorage::raw().get_item(key).map_err(|err| {
        console_error!(format!("Failed to fetch local storage {key}: {err:?}"));
        anyhow::Error::msg("Local storage failure, see console log")
    })
}

// theme preference backed by local storage
pub struct LocalThemeStore {
    key: String,
}

impl LocalThemeStore {
    pub fn new(key: &str) -> Self {
        LocalThemeStore {
            key: key.to_owned(),
        }
    }
}

impl ThemeStore for LocalThemeStore {
    fn raw(&self) -> Option<String> {
        get_local_storage(&self.key).ok().flatten()
    }

    fn save(&mut self, theme: Theme) {
        set_local_storage(&self.key, theme.as_str())
    }
}
