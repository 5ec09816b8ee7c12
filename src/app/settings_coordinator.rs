//! Generic settings persistence coordination.
//!
//! Provides a reusable API for persisting application settings to storage.
//! This module follows the same pattern as ThemeCoordinator but is designed
//! to be generic over any serializable setting (the last-selected view, for
//! instance). Settings are stored as JSON strings.

use serde::{Deserialize, Serialize};

/// Coordinates generic settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting from persistent storage with a default fallback.
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface
    /// * `key` - The storage key for this setting
    ///
    /// # Returns
    /// The deserialized value if found and valid, otherwise `T::default()`
    ///
    /// # Examples
    /// ```ignore
    /// let view: ViewKey = SettingsCoordinator::load_setting(storage, "last_view");
    /// ```
    pub fn load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> T
    where
        T: for<'de> Deserialize<'de> + Default,
    {
        if let Some(storage) = storage {
            if let Some(json_str) = storage.get_string(key) {
                if let Ok(value) = serde_json::from_str(&json_str) {
                    return value;
                }
            }
        }
        T::default()
    }

    /// Saves a setting to persistent storage.
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface (mutable)
    /// * `key` - The storage key for this setting
    /// * `value` - The value to serialize and save
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        if let Ok(json_str) = serde_json::to_string(value) {
            storage.set_string(key, json_str);
            storage.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ViewKey;
    use eframe::Storage;
    use std::collections::HashMap;

    /// Simple mock storage for testing
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                data: HashMap::new(),
            }
        }
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn save_and_load_view_key() {
        let mut storage = MockStorage::new();

        SettingsCoordinator::save_setting(&mut storage, "last_view", &ViewKey::About);

        let loaded: ViewKey = SettingsCoordinator::load_setting(Some(&storage), "last_view");
        assert_eq!(loaded, ViewKey::About);
    }

    #[test]
    fn missing_key_falls_back_to_default() {
        let storage = MockStorage::new();

        let loaded: ViewKey = SettingsCoordinator::load_setting(Some(&storage), "missing_key");
        assert_eq!(loaded, ViewKey::Sponsors);
    }

    #[test]
    fn corrupt_value_falls_back_to_default() {
        let mut storage = MockStorage::new();
        storage.set_string("last_view", "not json".to_string());

        let loaded: ViewKey = SettingsCoordinator::load_setting(Some(&storage), "last_view");
        assert_eq!(loaded, ViewKey::Sponsors);
    }
}
