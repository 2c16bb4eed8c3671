//! Timestamped cache entries on top of a [`KeyValueStore`].

use crate::{
    CacheEntry, CacheError, CacheKey, Clock, KeyValueStore, MemoryStore, Result,
    SystemClock,
};
use serde::Serialize;
use std::sync::Arc;

/// Cache of JSON payloads keyed by [`CacheKey`].
///
/// Cloning is cheap; clones share the backend and clock.
#[derive(Debug, Clone)]
pub struct CacheStore {
    backend: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
}

impl CacheStore {
    /// Creates a cache over `backend` using the wall clock.
    #[must_use]
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self::with_clock(backend, Arc::new(SystemClock))
    }

    /// Creates a cache over `backend` using `clock` for timestamps.
    #[must_use]
    pub fn with_clock(backend: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self { backend, clock }
    }

    /// Creates a cache that lives only as long as the process.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Returns the current time according to the cache's clock.
    #[must_use]
    pub fn now_millis(&self) -> i64 {
        self.clock.now_millis()
    }

    /// Reads the entry stored under `key`.
    ///
    /// Returns `Ok(None)` if the key is absent. An entry that cannot be
    /// parsed is logged and reported as absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    pub fn get(&self, key: &CacheKey) -> Result<Option<CacheEntry>> {
        let Some(raw) = self.backend.read(key.as_str())? else {
            return Ok(None);
        };

        match serde_json::from_str::<CacheEntry>(&raw) {
            Ok(entry) => Ok(Some(entry)),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "ignoring corrupt cache entry");
                Ok(None)
            }
        }
    }

    /// Stores `payload` under `key`, stamped with the current time.
    ///
    /// If the backend reports the quota as exceeded, every entry sharing the
    /// key's prefix is evicted and the write is retried once.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::StorageQuota`] if the retry also exceeds the
    /// quota, or any other backend or serialization error.
    pub fn put<T: Serialize + ?Sized>(&self, key: &CacheKey, payload: &T) -> Result<CacheEntry> {
        let serialize_err = |source| CacheError::Serialize {
            key: key.to_string(),
            source,
        };
        let payload = serde_json::to_value(payload).map_err(serialize_err)?;
        let entry = CacheEntry::new(key.as_str(), payload, self.clock.now_millis());
        let raw = serde_json::to_string(&entry).map_err(serialize_err)?;

        match self.backend.write(key.as_str(), &raw) {
            Ok(()) => return Ok(entry),
            Err(e) if e.is_quota_exceeded() => {}
            Err(e) => return Err(e.into()),
        }

        let evicted = self.clear_prefix(key.prefix())?;
        tracing::warn!(
            key = %key,
            prefix = key.prefix(),
            evicted,
            "cache quota exceeded, evicted prefix and retrying once"
        );

        match self.backend.write(key.as_str(), &raw) {
            Ok(()) => Ok(entry),
            Err(e) if e.is_quota_exceeded() => Err(CacheError::StorageQuota {
                key: key.to_string(),
                prefix: key.prefix().to_string(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// Removes every entry in the prefix family `prefix` (`prefix` itself and
    /// `prefix-*`). Returns the number of removed entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be modified.
    pub fn clear_prefix(&self, prefix: &str) -> Result<usize> {
        Ok(self
            .backend
            .remove_where(&|key| CacheKey::in_family(key, prefix))?)
    }

    /// Removes every entry. Returns the number of removed entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be modified.
    pub fn clear(&self) -> Result<usize> {
        Ok(self.backend.remove_where(&|_| true)?)
    }

    /// Returns all stored keys, sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be enumerated.
    pub fn keys(&self) -> Result<Vec<String>> {
        Ok(self.backend.keys()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FileStore, ManualClock, StoreError};
    use bourse_types::Instrument;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::TempDir;

    /// Backend whose first `failing_writes` writes report a quota overflow.
    #[derive(Debug, Default)]
    struct ScriptedStore {
        inner: MemoryStore,
        failing_writes: AtomicUsize,
        disk_full: bool,
        writes: AtomicUsize,
        evictions: AtomicUsize,
        evicted_keys: Mutex<Vec<String>>,
    }

    impl ScriptedStore {
        fn failing(times: usize) -> Self {
            Self {
                failing_writes: AtomicUsize::new(times),
                ..Self::default()
            }
        }
    }

    impl KeyValueStore for ScriptedStore {
        fn read(&self, key: &str) -> std::result::Result<Option<String>, StoreError> {
            self.inner.read(key)
        }

        fn write(&self, key: &str, value: &str) -> std::result::Result<(), StoreError> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            let remaining = self.failing_writes.load(Ordering::SeqCst);
            if remaining > 0 {
                self.failing_writes.store(remaining - 1, Ordering::SeqCst);
                if self.disk_full {
                    return Err(StoreError::StorageFull {
                        path: format!("{key}.json").into(),
                        source: std::io::Error::from(std::io::ErrorKind::StorageFull),
                    });
                }
                return Err(StoreError::QuotaExceeded {
                    key: key.to_string(),
                    needed: value.len() as u64,
                    quota: 0,
                });
            }
            self.inner.write(key, value)
        }

        fn remove_where(
            &self,
            predicate: &dyn Fn(&str) -> bool,
        ) -> std::result::Result<usize, StoreError> {
            self.evictions.fetch_add(1, Ordering::SeqCst);
            for key in self.inner.keys()? {
                if predicate(&key) {
                    self.evicted_keys.lock().unwrap().push(key);
                }
            }
            self.inner.remove_where(predicate)
        }

        fn keys(&self) -> std::result::Result<Vec<String>, StoreError> {
            self.inner.keys()
        }
    }

    fn sample_instruments() -> Vec<Instrument> {
        vec![
            Instrument::new("BTC", "Bitcoin", "Cryptocurrency", "Global", "USD"),
            Instrument::new("AAPL", "Apple Inc.", "Common Stock", "USA", "USD"),
        ]
    }

    #[test]
    fn test_get_absent() {
        let cache = CacheStore::in_memory();
        assert!(cache.get(&CacheKey::exchange_data()).unwrap().is_none());
    }

    #[test]
    fn test_put_get_roundtrip() {
        let clock = Arc::new(ManualClock::new(1_700_000_000_000));
        let cache = CacheStore::with_clock(Arc::new(MemoryStore::new()), clock);
        let key = CacheKey::exchange_data();
        let instruments = sample_instruments();

        cache.put(&key, &instruments).unwrap();

        let entry = cache.get(&key).unwrap().expect("entry should exist");
        assert_eq!(entry.stored_at_epoch_millis, 1_700_000_000_000);
        assert_eq!(entry.decode::<Vec<Instrument>>().unwrap(), instruments);
    }

    #[test]
    fn test_roundtrip_through_files() {
        let temp_dir = TempDir::new().unwrap();
        let backend = Arc::new(FileStore::new(temp_dir.path().to_path_buf()).unwrap());
        let cache = CacheStore::new(backend);
        let key = CacheKey::detail("AAPL");

        cache.put(&key, &sample_instruments()[1]).unwrap();

        let reopened = CacheStore::new(Arc::new(
            FileStore::new(temp_dir.path().to_path_buf()).unwrap(),
        ));
        let entry = reopened.get(&key).unwrap().unwrap();
        assert_eq!(entry.decode::<Instrument>().unwrap(), sample_instruments()[1]);
    }

    #[test]
    fn test_corrupt_entry_reads_as_absent() {
        let backend = Arc::new(MemoryStore::new());
        backend.write("exchangeData", "{not json").unwrap();
        let cache = CacheStore::new(backend);

        assert!(cache.get(&CacheKey::exchange_data()).unwrap().is_none());
    }

    #[test]
    fn test_quota_failure_evicts_once_and_retries_once() {
        let backend = Arc::new(ScriptedStore::failing(1));
        backend.inner.write("candlesData-ETH", "[]").unwrap();
        backend.inner.write("exchangeData", "[]").unwrap();
        let cache = CacheStore::new(backend.clone());

        cache.put(&CacheKey::candles("BTC"), &Vec::<u32>::new()).unwrap();

        assert_eq!(backend.writes.load(Ordering::SeqCst), 2);
        assert_eq!(backend.evictions.load(Ordering::SeqCst), 1);
        assert_eq!(
            *backend.evicted_keys.lock().unwrap(),
            vec!["candlesData-ETH".to_string()]
        );
        assert_eq!(
            cache.keys().unwrap(),
            vec!["candlesData-BTC".to_string(), "exchangeData".to_string()]
        );
    }

    #[test]
    fn test_disk_full_evicts_and_retries() {
        let backend = Arc::new(ScriptedStore {
            disk_full: true,
            ..ScriptedStore::failing(1)
        });
        backend.inner.write("candlesData-ETH", "[]").unwrap();
        let cache = CacheStore::new(backend.clone());

        cache.put(&CacheKey::candles("BTC"), &Vec::<u32>::new()).unwrap();

        assert_eq!(backend.writes.load(Ordering::SeqCst), 2);
        assert_eq!(backend.evictions.load(Ordering::SeqCst), 1);
        assert_eq!(cache.keys().unwrap(), vec!["candlesData-BTC".to_string()]);
    }

    #[test]
    fn test_second_quota_failure_surfaces() {
        let backend = Arc::new(ScriptedStore::failing(usize::MAX));
        let cache = CacheStore::new(backend.clone());

        let err = cache
            .put(&CacheKey::candles("BTC"), &Vec::<u32>::new())
            .unwrap_err();

        assert!(matches!(err, CacheError::StorageQuota { ref prefix, .. } if prefix == "candlesData"));
        assert_eq!(backend.writes.load(Ordering::SeqCst), 2);
        assert_eq!(backend.evictions.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_quota_eviction_with_real_backend() {
        let backend = Arc::new(MemoryStore::new().with_quota(300));
        let cache = CacheStore::new(backend.clone());
        let series = vec![1.5_f64; 20];

        cache.put(&CacheKey::candles("BTC"), &series).unwrap();
        cache.put(&CacheKey::language(), "en").unwrap();
        cache.put(&CacheKey::candles("ETH"), &series).unwrap();

        let keys = cache.keys().unwrap();
        assert!(keys.contains(&"candlesData-ETH".to_string()));
        assert!(keys.contains(&"language".to_string()));
        assert!(!keys.contains(&"candlesData-BTC".to_string()));
    }

    #[test]
    fn test_clear_prefix_and_clear() {
        let cache = CacheStore::in_memory();
        cache.put(&CacheKey::detail("BTC"), &1).unwrap();
        cache.put(&CacheKey::detail("ETH"), &2).unwrap();
        cache.put(&CacheKey::exchange_data(), &3).unwrap();

        assert_eq!(cache.clear_prefix("detail").unwrap(), 2);
        assert_eq!(cache.keys().unwrap(), vec!["exchangeData".to_string()]);
        assert_eq!(cache.clear().unwrap(), 1);
        assert!(cache.keys().unwrap().is_empty());
    }
}
