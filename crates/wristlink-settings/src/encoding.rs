//! Return-URL handoff.
//!
//! The configuration surface communicates back to the coordinator by
//! navigating to `{return_location}{percent-encoded JSON preferences}` -
//! a one-shot, fire-and-forget message passed by URL. This module owns
//! both sides of that encoding contract.

use crate::types::{Preferences, SettingsError};

/// Sentinel navigated to when the opener supplied no return location.
pub const DEFAULT_RETURN_LOCATION: &str = "pebblejs://close#";

/// Query parameter the opening page uses to supply the return location.
pub const RETURN_PARAM: &str = "return_to";

/// Read the return location from the opening page's query string.
///
/// Accepts the query with or without the leading `?`. A missing, empty,
/// or unreadable parameter yields the close sentinel verbatim, so a
/// submit always has somewhere to navigate.
pub fn return_location(query: &str) -> String {
    url::form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
        .find(|(name, value)| name == RETURN_PARAM && !value.is_empty())
        .map(|(_, value)| value.into_owned())
        .unwrap_or_else(|| DEFAULT_RETURN_LOCATION.to_string())
}

/// Serialize `prefs` and append the percent-encoded text to `base`.
pub fn encode_return_url(base: &str, prefs: &Preferences) -> Result<String, SettingsError> {
    let json = serde_json::to_string(prefs).map_err(|e| SettingsError::Encode(e.to_string()))?;
    Ok(format!("{}{}", base, urlencoding::encode(&json)))
}

/// Decode the payload the configuration surface handed back.
pub fn decode_return_payload(payload: &str) -> Result<Preferences, SettingsError> {
    let json = urlencoding::decode(payload).map_err(|e| SettingsError::Decode(e.to_string()))?;
    serde_json::from_str(&json).map_err(|e| SettingsError::Decode(e.to_string()))
}
