//! Persistence seam for cache entries.

use crate::StoreError;

/// String key/value storage the cache is written to.
///
/// Values are opaque serialized entries. Implementations enforce their own
/// quota and report overflow as [`StoreError::QuotaExceeded`]; recovery is the
/// caller's business.
pub trait KeyValueStore: Send + Sync + std::fmt::Debug {
    /// Reads the value stored under `key`, `Ok(None)` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::QuotaExceeded`] if the value does not fit, or an
    /// I/O error from the backend.
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removes every key for which `predicate` returns true.
    ///
    /// Returns the number of removed keys.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be enumerated or modified.
    fn remove_where(&self, predicate: &dyn Fn(&str) -> bool) -> Result<usize, StoreError>;

    /// Returns all stored keys, sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be enumerated.
    fn keys(&self) -> Result<Vec<String>, StoreError>;
}
