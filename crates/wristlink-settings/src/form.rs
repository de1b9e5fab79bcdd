//! Controller behind the two-field configuration form.
//!
//! Owns no markup. Binds stored preferences to selector state on load,
//! and turns a submit into a persisted preference set plus the
//! navigation target for the one-shot return handoff.

use crate::encoding::{encode_return_url, return_location};
use crate::store::PreferenceStore;
use crate::types::Preferences;

pub struct FormController {
    store: PreferenceStore,
}

impl FormController {
    pub fn new(store: PreferenceStore) -> Self {
        Self { store }
    }

    /// Selector state at form load: stored values when present, built-in
    /// defaults otherwise.
    pub fn load(&self) -> Preferences {
        self.store.get().unwrap_or_default()
    }

    /// Persist `selection` and compose the navigation target.
    ///
    /// Persistence is best-effort: a storage failure is logged and the
    /// submission still navigates, so the device gets the new settings
    /// even when the store does not. `query` is the form page's own
    /// query string, supplying the return location.
    pub fn submit(&self, selection: Preferences, query: &str) -> String {
        if let Err(e) = self.store.set(&selection) {
            tracing::warn!("Failed to persist preferences: {}", e);
        }

        let base = return_location(query);
        match encode_return_url(&base, &selection) {
            Ok(url) => url,
            Err(e) => {
                // Still navigate; an empty payload beats a dead form.
                tracing::warn!("Failed to encode preferences: {}", e);
                base
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;
    use crate::encoding::{decode_return_payload, DEFAULT_RETURN_LOCATION};

    fn controller(dir: &std::path::Path) -> FormController {
        FormController::new(PreferenceStore::new(dir))
    }

    #[test]
    fn test_load_uses_defaults_when_store_empty() {
        let dir = tempfile::tempdir().unwrap();
        let form = controller(dir.path());

        assert_eq!(form.load(), Preferences::default());
    }

    #[test]
    fn test_load_prefers_stored_values() {
        let dir = tempfile::tempdir().unwrap();
        let form = controller(dir.path());

        let stored = Preferences {
            light_color_scheme: false,
            degree_celsius: false,
        };
        form.submit(stored, "");

        assert_eq!(form.load(), stored);
    }

    #[test]
    fn test_submit_persists_and_builds_sentinel_url() {
        let dir = tempfile::tempdir().unwrap();
        let form = controller(dir.path());

        let selection = Preferences {
            light_color_scheme: true,
            degree_celsius: false,
        };
        let url = form.submit(selection, "");

        assert!(url.starts_with(DEFAULT_RETURN_LOCATION));
        let payload = url.strip_prefix(DEFAULT_RETURN_LOCATION).unwrap();
        assert_eq!(decode_return_payload(payload).unwrap(), selection);
    }

    #[test]
    fn test_submit_honors_supplied_return_location() {
        let dir = tempfile::tempdir().unwrap();
        let form = controller(dir.path());

        let url = form.submit(
            Preferences::default(),
            "?return_to=myapp%3A%2F%2Fdone%23",
        );
        assert!(url.starts_with("myapp://done#"));
    }

    #[test]
    fn test_submit_navigates_even_when_store_unwritable() {
        // Point the store at a path that cannot be a directory.
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("occupied");
        std::fs::write(&file, "x").unwrap();

        let form = controller(&file.join("sub"));
        let url = form.submit(Preferences::default(), "");

        assert!(url.starts_with(DEFAULT_RETURN_LOCATION));
    }
}
