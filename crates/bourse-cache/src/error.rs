//! Error types for the cache layer.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a [`KeyValueStore`](crate::KeyValueStore) backend.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to create a directory.
    #[error("Failed to create directory '{path}': {source}")]
    CreateDir {
        /// The path that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to write a file.
    #[error("Failed to write file '{path}': {source}")]
    WriteFile {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to delete a file.
    #[error("Failed to delete file '{path}': {source}")]
    DeleteFile {
        /// The path that could not be deleted.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to read directory.
    #[error("Failed to read directory '{path}': {source}")]
    ReadDir {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The write would take the store past its quota.
    #[error("Storage quota exceeded writing '{key}': {needed} bytes needed, quota is {quota}")]
    QuotaExceeded {
        /// Key being written.
        key: String,
        /// Bytes the store would hold after the write.
        needed: u64,
        /// Configured quota in bytes.
        quota: u64,
    },

    /// The device or filesystem quota ran out while writing.
    #[error("No space left writing '{path}': {source}")]
    StorageFull {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

impl StoreError {
    /// Returns true if this is a quota failure, either the store's own quota
    /// or the device running out of space.
    #[must_use]
    pub const fn is_quota_exceeded(&self) -> bool {
        matches!(self, Self::QuotaExceeded { .. } | Self::StorageFull { .. })
    }
}

/// Errors raised by [`CacheStore`](crate::CacheStore).
#[derive(Error, Debug)]
pub enum CacheError {
    /// Backend failure.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The write still exceeded the quota after evicting the key's prefix.
    #[error("Storage quota exceeded for '{key}' after evicting '{prefix}' entries")]
    StorageQuota {
        /// Key being written.
        key: String,
        /// Prefix that was evicted before the retry.
        prefix: String,
    },

    /// Failed to serialize an entry.
    #[error("Failed to serialize cache entry '{key}': {source}")]
    Serialize {
        /// Key being written.
        key: String,
        /// The underlying JSON error.
        source: serde_json::Error,
    },
}

/// Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
