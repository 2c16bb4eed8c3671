//! Persisted user preferences.

use crate::{CacheKey, CacheStore, Result};
use bourse_types::Language;

/// Returns the persisted UI language, or the default if none is stored.
///
/// An unreadable or unrecognized value falls back to the default.
#[must_use]
pub fn load_language(store: &CacheStore) -> Language {
    match store.get(&CacheKey::language()) {
        Ok(Some(entry)) => entry.decode().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "ignoring unrecognized language preference");
            Language::default()
        }),
        Ok(None) => Language::default(),
        Err(e) => {
            tracing::warn!(error = %e, "failed to read language preference");
            Language::default()
        }
    }
}

/// Persists the UI language.
///
/// # Errors
///
/// Returns an error if the preference cannot be written.
pub fn save_language(store: &CacheStore, language: Language) -> Result<()> {
    store.put(&CacheKey::language(), &language)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_when_absent() {
        let store = CacheStore::in_memory();
        assert_eq!(load_language(&store), Language::De);
    }

    #[test]
    fn test_save_and_load() {
        let store = CacheStore::in_memory();
        save_language(&store, Language::En).unwrap();
        assert_eq!(load_language(&store), Language::En);

        let entry = store.get(&CacheKey::language()).unwrap().unwrap();
        assert_eq!(entry.payload, serde_json::Value::from("en"));
    }

    #[test]
    fn test_unrecognized_value_falls_back() {
        let store = CacheStore::in_memory();
        store.put(&CacheKey::language(), "fr").unwrap();
        assert_eq!(load_language(&store), Language::De);
    }
}
