use serde::{Deserialize, Serialize};

/// The two user preferences carried between the configuration form and
/// the device. Field names match the form's wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub light_color_scheme: bool,
    pub degree_celsius: bool,
}

impl Default for Preferences {
    /// Built-in defaults, applied in memory only until the form is first
    /// submitted. Distinct from a stored `false`: an empty store means
    /// "use these", not "both off".
    fn default() -> Self {
        Self {
            light_color_scheme: true,
            degree_celsius: true,
        }
    }
}

/// Settings errors
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Encode error: {0}")]
    Encode(String),
    #[error("Malformed return payload: {0}")]
    Decode(String),
}
