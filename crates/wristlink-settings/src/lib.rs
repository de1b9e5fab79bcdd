//! User preferences: durable store, form controller, and the return-URL
//! handoff the configuration surface uses to reach the coordinator.

pub mod encoding;
pub mod form;
pub mod store;
pub mod types;

pub use encoding::{
    decode_return_payload, encode_return_url, return_location, DEFAULT_RETURN_LOCATION,
    RETURN_PARAM,
};
pub use form::FormController;
pub use store::PreferenceStore;
pub use types::{Preferences, SettingsError};
