//! Persisted player settings.
//!
//! A small JSON record in `localStorage`. Loading tolerates a missing store,
//! a missing key and corrupt payloads by handing back defaults; saving logs
//! failures to the console and otherwise ignores them — settings persistence
//! must never take the game down.

use serde::{Deserialize, Serialize};

/// localStorage key for the settings record.
pub const SETTINGS_KEY: &str = "mah-tiles.settings";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// `"auto"`, `"de"` or `"en"`.
    #[serde(default = "default_lang")]
    pub lang: String,
    #[serde(default = "default_sounds")]
    pub sounds: bool,
}

fn default_lang() -> String {
    "auto".to_string()
}

fn default_sounds() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            lang: default_lang(),
            sounds: default_sounds(),
        }
    }
}

/// Persistence seam for [`Settings`].
pub trait SettingsStore {
    fn save(&mut self, settings: &Settings);
}

/// Browser `localStorage` backend.
pub struct LocalStore;

impl LocalStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }

    /// Read the persisted record, falling back to defaults on any failure.
    pub fn load() -> Settings {
        Self::storage()
            .and_then(|s| s.get_item(SETTINGS_KEY).ok().flatten())
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default()
    }
}

impl SettingsStore for LocalStore {
    fn save(&mut self, settings: &Settings) {
        let Some(storage) = Self::storage() else {
            return;
        };
        match serde_json::to_string(settings) {
            Ok(json) => {
                if let Err(err) = storage.set_item(SETTINGS_KEY, &json) {
                    web_sys::console::warn_1(&err);
                }
            }
            Err(err) => {
                web_sys::console::warn_1(&err.to_string().into());
            }
        }
    }
}
