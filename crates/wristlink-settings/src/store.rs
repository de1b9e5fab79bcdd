//! Durable key/value store for the preference set.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::types::{Preferences, SettingsError};

const KEY_LIGHT_COLOR_SCHEME: &str = "lightColorScheme";
const KEY_DEGREE_CELSIUS: &str = "degreeCelsius";
const STORE_FILE: &str = "preferences.json";

/// File-backed store holding the two preference keys with
/// boolean-as-string values, mirroring the form's historical local
/// storage contract.
///
/// `set` is called at most once per form submission and `get` only at
/// form load, so last-write-wins is the only guarantee needed.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    /// Store rooted at `dir` (the file is created on first `set`).
    pub fn new(dir: &Path) -> Self {
        Self {
            path: dir.join(STORE_FILE),
        }
    }

    /// Store under the platform config directory.
    pub fn open_default() -> Result<Self, SettingsError> {
        let dir = dirs::config_dir()
            .ok_or_else(|| SettingsError::Storage("no config directory".to_string()))?
            .join("wristlink");
        Ok(Self::new(&dir))
    }

    /// Read the stored preference set.
    ///
    /// Returns `None` when nothing has been stored yet or the backing
    /// file is unreadable or malformed - callers fall back to built-in
    /// defaults. Absent is deliberately distinct from `false`.
    pub fn get(&self) -> Option<Preferences> {
        let raw = fs::read_to_string(&self.path).ok()?;
        let map: BTreeMap<String, String> = serde_json::from_str(&raw).ok()?;

        let light_color_scheme = map.get(KEY_LIGHT_COLOR_SCHEME)?.parse().ok()?;
        let degree_celsius = map.get(KEY_DEGREE_CELSIUS)?.parse().ok()?;

        Some(Preferences {
            light_color_scheme,
            degree_celsius,
        })
    }

    /// Overwrite both keys wholesale.
    pub fn set(&self, prefs: &Preferences) -> Result<(), SettingsError> {
        let mut map = BTreeMap::new();
        map.insert(
            KEY_LIGHT_COLOR_SCHEME,
            prefs.light_color_scheme.to_string(),
        );
        map.insert(KEY_DEGREE_CELSIUS, prefs.degree_celsius.to_string());

        let json = serde_json::to_string_pretty(&map)
            .map_err(|e| SettingsError::Storage(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| SettingsError::Storage(e.to_string()))?;
        }
        fs::write(&self.path, json).map_err(|e| SettingsError::Storage(e.to_string()))?;

        tracing::debug!("Stored preferences at {}", self.path.display());
        Ok(())
    }
}
