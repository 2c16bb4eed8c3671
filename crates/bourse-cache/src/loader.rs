//! Cache-or-fetch orchestration.

use crate::{CacheKey, CacheStore};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::time::Duration;

/// Default freshness window: one hour.
pub const DEFAULT_FRESHNESS: Duration = Duration::from_millis(3_600_000);

/// How a load treats existing cache entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheMode {
    /// Serve a fresh entry if present; otherwise load and write the result. (Default)
    #[default]
    Use,
    /// Always load, then write the result.
    Refresh,
}

/// Serves cached values while they are fresh and reloads them otherwise.
#[derive(Debug, Clone)]
pub struct CachedLoader {
    store: CacheStore,
    freshness: Duration,
}

impl CachedLoader {
    /// Creates a loader with the given freshness window.
    #[must_use]
    pub const fn new(store: CacheStore, freshness: Duration) -> Self {
        Self { store, freshness }
    }

    /// Creates a loader with the one-hour default window.
    #[must_use]
    pub const fn with_default_freshness(store: CacheStore) -> Self {
        Self::new(store, DEFAULT_FRESHNESS)
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &CacheStore {
        &self.store
    }

    /// Returns the freshness window.
    #[must_use]
    pub const fn freshness(&self) -> Duration {
        self.freshness
    }

    /// Returns the value cached under `key` if it is fresh, otherwise runs
    /// `loader` and caches its result.
    ///
    /// Writing the result is best-effort: a storage failure is logged and the
    /// freshly loaded value is still returned. A stale entry is never served
    /// when `loader` fails.
    ///
    /// # Errors
    ///
    /// Returns the loader's error unchanged.
    pub async fn load<T, E, F, Fut>(
        &self,
        key: &CacheKey,
        mode: CacheMode,
        loader: F,
    ) -> Result<T, E>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if mode == CacheMode::Use
            && let Some(value) = self.cached(key)
        {
            return Ok(value);
        }

        let value = loader().await?;

        if let Err(e) = self.store.put(key, &value) {
            tracing::warn!(key = %key, error = %e, "failed to cache loaded data");
        }

        Ok(value)
    }

    /// Returns the fresh, decodable value under `key`, if any.
    fn cached<T: DeserializeOwned>(&self, key: &CacheKey) -> Option<T> {
        let entry = match self.store.get(key) {
            Ok(Some(entry)) => entry,
            Ok(None) => {
                tracing::debug!(key = %key, "cache miss");
                return None;
            }
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "cache read failed, treating as miss");
                return None;
            }
        };

        let now = self.store.now_millis();
        if !entry.is_fresh(now, self.freshness) {
            tracing::debug!(key = %key, age_ms = entry.age_millis(now), "cache entry stale");
            return None;
        }

        match entry.decode() {
            Ok(value) => {
                tracing::debug!(key = %key, age_ms = entry.age_millis(now), "cache hit");
                Some(value)
            }
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "cached payload has unexpected shape");
                None
            }
        }
    }
}
