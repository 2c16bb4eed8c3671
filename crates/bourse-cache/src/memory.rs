//! In-process key/value store.

use crate::{KeyValueStore, StoreError};
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Keeps entries in memory for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
    quota: Option<u64>,
}

impl MemoryStore {
    /// Creates an empty, unbounded store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Limits the total size of stored values to `bytes`.
    #[must_use]
    pub fn with_quota(mut self, bytes: u64) -> Self {
        self.quota = Some(bytes);
        self
    }

    /// Returns the total size of stored values.
    #[must_use]
    pub fn usage(&self) -> u64 {
        self.lock().values().map(|v| v.len() as u64).sum()
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.lock().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.lock();

        if let Some(quota) = self.quota {
            let others: u64 = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(_, v)| v.len() as u64)
                .sum();
            let needed = others + value.len() as u64;
            if needed > quota {
                return Err(StoreError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    quota,
                });
            }
        }

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_where(&self, predicate: &dyn Fn(&str) -> bool) -> Result<usize, StoreError> {
        let mut entries = self.lock();
        let before = entries.len();
        entries.retain(|key, _| !predicate(key));
        Ok(before - entries.len())
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.lock().keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_write() {
        let store = MemoryStore::new();
        assert_eq!(store.read("k").unwrap(), None);

        store.write("k", "v").unwrap();
        assert_eq!(store.read("k").unwrap().as_deref(), Some("v"));
        assert_eq!(store.usage(), 1);
    }

    #[test]
    fn test_quota() {
        let store = MemoryStore::new().with_quota(4);
        store.write("a", "12").unwrap();
        store.write("b", "34").unwrap();

        let err = store.write("c", "5").unwrap_err();
        assert!(err.is_quota_exceeded());

        // Replacing a value only counts the new size
        store.write("a", "1").unwrap();
        store.write("c", "5").unwrap();
        assert_eq!(store.usage(), 4);
    }

    #[test]
    fn test_remove_where_and_keys() {
        let store = MemoryStore::new();
        store.write("detail-BTC", "{}").unwrap();
        store.write("detail-ETH", "{}").unwrap();
        store.write("language", "\"en\"").unwrap();

        assert_eq!(store.remove_where(&|k| k.starts_with("detail-")).unwrap(), 2);
        assert_eq!(store.keys().unwrap(), vec!["language".to_string()]);
    }
}
