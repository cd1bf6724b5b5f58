//! Key-value preference storage.

use std::collections::HashMap;

use crate::error::StorageError;

/// Minimal platform-preferences surface: integers under named keys.
pub trait PreferenceStore {
    /// `Ok(None)` when the key has never been written.
    fn get_int(&self, key: &str) -> Result<Option<i64>, StorageError>;
    fn set_int(&mut self, key: &str, value: i64) -> Result<(), StorageError>;
}

/// In-process preferences, lost on exit.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: HashMap<String, i64>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get_int(&self, key: &str) -> Result<Option<i64>, StorageError> {
        Ok(self.values.get(key).copied())
    }

    fn set_int(&mut self, key: &str, value: i64) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_preferences_roundtrip() {
        let mut prefs = MemoryPreferences::new();
        assert_eq!(prefs.get_int("k").unwrap(), None);
        prefs.set_int("k", 7).unwrap();
        prefs.set_int("k", 8).unwrap();
        assert_eq!(prefs.get_int("k").unwrap(), Some(8));
    }
}
