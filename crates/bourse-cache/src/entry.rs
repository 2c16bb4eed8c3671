//! Cache entries and keys.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

/// Prefix of the instrument list entry.
const EXCHANGE_DATA: &str = "exchangeData";
/// Prefix of per-symbol detail entries.
const DETAIL: &str = "detail";
/// Prefix of per-symbol candle entries.
const CANDLES_DATA: &str = "candlesData";
/// Key of the language preference.
const LANGUAGE: &str = "language";

/// Key under which a cache entry is stored.
///
/// A key is a prefix, optionally scoped by a suffix (`candlesData-BTC`). The
/// prefix is the eviction unit when the store runs out of space.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    prefix: String,
    key: String,
}

impl CacheKey {
    /// Creates an unscoped key equal to `prefix`.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            key: prefix.clone(),
            prefix,
        }
    }

    /// Creates the key `{prefix}-{scope}`.
    #[must_use]
    pub fn scoped(prefix: impl Into<String>, scope: impl std::fmt::Display) -> Self {
        let prefix = prefix.into();
        Self {
            key: format!("{prefix}-{scope}"),
            prefix,
        }
    }

    /// Key of the cached instrument list.
    #[must_use]
    pub fn exchange_data() -> Self {
        Self::new(EXCHANGE_DATA)
    }

    /// Key of the cached detail record for `symbol`.
    #[must_use]
    pub fn detail(symbol: impl std::fmt::Display) -> Self {
        Self::scoped(DETAIL, symbol)
    }

    /// Key of the cached candle series for `symbol`.
    #[must_use]
    pub fn candles(symbol: impl std::fmt::Display) -> Self {
        Self::scoped(CANDLES_DATA, symbol)
    }

    /// Key of the persisted UI language.
    #[must_use]
    pub fn language() -> Self {
        Self::new(LANGUAGE)
    }

    /// Returns the full key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.key
    }

    /// Returns the eviction prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns true if `key` belongs to the prefix family `prefix`.
    #[must_use]
    pub fn in_family(key: &str, prefix: &str) -> bool {
        key == prefix
            || key
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with('-'))
    }
}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key)
    }
}

/// A cached payload together with the time it was stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheEntry {
    /// Key the entry is stored under.
    pub key: String,
    /// Cached value.
    pub payload: Value,
    /// Time of the write, in epoch milliseconds.
    pub stored_at_epoch_millis: i64,
}

impl CacheEntry {
    /// Creates an entry.
    #[must_use]
    pub fn new(key: impl Into<String>, payload: Value, stored_at_epoch_millis: i64) -> Self {
        Self {
            key: key.into(),
            payload,
            stored_at_epoch_millis,
        }
    }

    /// Returns the age of the entry at `now_millis`.
    #[must_use]
    pub const fn age_millis(&self, now_millis: i64) -> i64 {
        now_millis.saturating_sub(self.stored_at_epoch_millis)
    }

    /// Returns true if the entry is at most `window` old at `now_millis`.
    #[must_use]
    pub fn is_fresh(&self, now_millis: i64, window: Duration) -> bool {
        let window = i64::try_from(window.as_millis()).unwrap_or(i64::MAX);
        self.age_millis(now_millis) <= window
    }

    /// Decodes the payload into `T`.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload does not have the shape of `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        T::deserialize(&self.payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persisted_key_names() {
        assert_eq!(CacheKey::exchange_data().as_str(), "exchangeData");
        assert_eq!(CacheKey::detail("BTC").as_str(), "detail-BTC");
        assert_eq!(CacheKey::candles("BTC").as_str(), "candlesData-BTC");
        assert_eq!(CacheKey::candles("BTC").prefix(), "candlesData");
        assert_eq!(CacheKey::language().as_str(), "language");
    }

    #[test]
    fn test_in_family() {
        assert!(CacheKey::in_family("candlesData-BTC", "candlesData"));
        assert!(CacheKey::in_family("candlesData", "candlesData"));
        assert!(!CacheKey::in_family("candlesDataX", "candlesData"));
        assert!(!CacheKey::in_family("detail-BTC", "candlesData"));
    }

    #[test]
    fn test_freshness_boundary() {
        let hour = Duration::from_millis(3_600_000);
        let entry = CacheEntry::new("exchangeData", Value::Null, 10_000_000);

        assert!(entry.is_fresh(10_000_000 + 3_599_999, hour));
        assert!(entry.is_fresh(10_000_000 + 3_600_000, hour));
        assert!(!entry.is_fresh(10_000_000 + 3_600_001, hour));
    }

    #[test]
    fn test_wire_shape() {
        let entry = CacheEntry::new("language", Value::from("en"), 5);
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            json,
            r#"{"key":"language","payload":"en","storedAtEpochMillis":5}"#
        );
    }
}
