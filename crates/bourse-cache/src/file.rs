//! File-backed key/value store.

use crate::{KeyValueStore, StoreError};
use directories::ProjectDirs;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

type Result<T> = std::result::Result<T, StoreError>;

/// Persists each key as a JSON file.
///
/// Entries are stored in `<base>/entries/<escaped key>.json`. An optional
/// quota bounds the total size of all entry files.
#[derive(Debug, Clone)]
pub struct FileStore {
    /// Base directory for cache storage.
    base_path: PathBuf,
    /// Directory for entry files.
    entries_path: PathBuf,
    /// Maximum total size of entry files, in bytes.
    quota: Option<u64>,
}

impl FileStore {
    /// Creates a store rooted at `base_path`.
    ///
    /// Creates the necessary subdirectories if they don't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the directories cannot be created.
    pub fn new(base_path: PathBuf) -> Result<Self> {
        let entries_path = base_path.join("entries");

        for path in [&base_path, &entries_path] {
            if !path.exists() {
                fs::create_dir_all(path).map_err(|e| StoreError::CreateDir {
                    path: path.clone(),
                    source: e,
                })?;
            }
        }

        Ok(Self {
            base_path,
            entries_path,
            quota: None,
        })
    }

    /// Returns the default cache location.
    ///
    /// Uses the `directories` crate to find the platform cache directory:
    /// - Linux: `~/.cache/bourse/`
    /// - macOS: `~/Library/Caches/bourse/`
    /// - Windows: `C:\Users\<User>\AppData\Local\bourse\cache\`
    ///
    /// Falls back to `~/.bourse/` if the platform location cannot be
    /// determined.
    #[must_use]
    pub fn default_path() -> PathBuf {
        ProjectDirs::from("", "", "bourse").map_or_else(dirs_fallback, |proj_dirs| {
            proj_dirs.cache_dir().to_path_buf()
        })
    }

    /// Creates a store at the default path.
    ///
    /// # Errors
    ///
    /// Returns an error if the directories cannot be created.
    pub fn with_default_path() -> Result<Self> {
        Self::new(Self::default_path())
    }

    /// Limits the total size of stored entries to `bytes`.
    #[must_use]
    pub const fn with_quota(mut self, bytes: u64) -> Self {
        self.quota = Some(bytes);
        self
    }

    /// Returns the base path for cache storage.
    #[must_use]
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Returns the path of the file holding `key`.
    #[must_use]
    pub fn entry_path(&self, key: &str) -> PathBuf {
        self.entries_path.join(format!("{}.json", escape_key(key)))
    }

    /// Lists `(key, path)` for every entry file.
    fn entry_files(&self) -> Result<Vec<(String, PathBuf)>> {
        let entries = fs::read_dir(&self.entries_path).map_err(|e| StoreError::ReadDir {
            path: self.entries_path.clone(),
            source: e,
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| StoreError::ReadDir {
                path: self.entries_path.clone(),
                source: e,
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                let Some(key) = path
                    .file_stem()
                    .and_then(|stem| stem.to_str())
                    .and_then(unescape_key)
                else {
                    tracing::warn!(path = %path.display(), "ignoring cache file with unrecognized name");
                    continue;
                };
                files.push((key, path));
            }
        }

        Ok(files)
    }

    /// Total size of all entry files except the one for `skip_key`.
    fn usage_excluding(&self, skip_key: &str) -> Result<u64> {
        let mut total = 0;
        for (key, path) in self.entry_files()? {
            if key == skip_key {
                continue;
            }
            let meta = fs::metadata(&path).map_err(|e| StoreError::ReadFile {
                path: path.clone(),
                source: e,
            })?;
            total += meta.len();
        }
        Ok(total)
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.entry_path(key);

        if !path.exists() {
            return Ok(None);
        }

        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| StoreError::ReadFile { path, source: e })
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        if let Some(quota) = self.quota {
            let needed = self.usage_excluding(key)? + value.len() as u64;
            if needed > quota {
                return Err(StoreError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    quota,
                });
            }
        }

        let path = self.entry_path(key);
        fs::write(&path, value).map_err(|e| write_error(path, e))
    }

    fn remove_where(&self, predicate: &dyn Fn(&str) -> bool) -> Result<usize> {
        let mut removed = 0;
        for (key, path) in self.entry_files()? {
            if predicate(&key) {
                fs::remove_file(&path).map_err(|e| StoreError::DeleteFile { path, source: e })?;
                removed += 1;
            }
        }
        Ok(removed)
    }

    fn keys(&self) -> Result<Vec<String>> {
        let mut keys: Vec<String> = self.entry_files()?.into_iter().map(|(k, _)| k).collect();
        keys.sort();
        Ok(keys)
    }
}

/// Out-of-space failures report as quota errors so the cache can evict.
fn write_error(path: PathBuf, source: io::Error) -> StoreError {
    match source.kind() {
        io::ErrorKind::StorageFull | io::ErrorKind::QuotaExceeded => {
            StoreError::StorageFull { path, source }
        }
        _ => StoreError::WriteFile { path, source },
    }
}

/// Escapes a key into a file name: `[A-Za-z0-9_-]` pass through, every other
/// byte becomes `%XX`.
fn escape_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for byte in key.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' {
            out.push(char::from(byte));
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

/// Reverses [`escape_key`]. Returns `None` for names it could not have produced.
fn unescape_key(name: &str) -> Option<String> {
    let bytes = name.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = name.get(i + 1..i + 3)?;
            out.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).ok()
}

/// Fallback for determining home directory.
fn dirs_fallback() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".bourse")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_creation() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().join("cache")).unwrap();

        assert!(store.base_path().exists());
        assert!(temp_dir.path().join("cache").join("entries").exists());
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf()).unwrap();

        assert_eq!(store.read("exchangeData").unwrap(), None);
        store.write("exchangeData", "[1,2,3]").unwrap();
        assert_eq!(store.read("exchangeData").unwrap().as_deref(), Some("[1,2,3]"));

        store.write("exchangeData", "[]").unwrap();
        assert_eq!(store.read("exchangeData").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_keys_with_special_characters() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf()).unwrap();

        store.write("detail-BRK.B", "{}").unwrap();
        store.write("candlesData-EUR/USD", "[]").unwrap();

        assert_eq!(
            store.keys().unwrap(),
            vec!["candlesData-EUR/USD".to_string(), "detail-BRK.B".to_string()]
        );
        assert!(
            store
                .entry_path("candlesData-EUR/USD")
                .to_string_lossy()
                .ends_with("candlesData-EUR%2FUSD.json")
        );
    }

    #[test]
    fn test_remove_where() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf()).unwrap();

        store.write("candlesData-BTC", "[]").unwrap();
        store.write("candlesData-ETH", "[]").unwrap();
        store.write("exchangeData", "[]").unwrap();

        let removed = store
            .remove_where(&|key| key.starts_with("candlesData"))
            .unwrap();
        assert_eq!(removed, 2);
        assert_eq!(store.keys().unwrap(), vec!["exchangeData".to_string()]);
    }

    #[test]
    fn test_quota_exceeded() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf())
            .unwrap()
            .with_quota(10);

        store.write("a", "12345").unwrap();
        // Overwriting the same key does not count its old size
        store.write("a", "1234567890").unwrap();

        let err = store.write("b", "1").unwrap_err();
        assert!(err.is_quota_exceeded());
        assert_eq!(store.read("b").unwrap(), None);
    }

    #[test]
    fn test_out_of_space_is_a_quota_failure() {
        let path = PathBuf::from("entries/candlesData-BTC.json");

        for kind in [io::ErrorKind::StorageFull, io::ErrorKind::QuotaExceeded] {
            let err = write_error(path.clone(), io::Error::from(kind));
            assert!(matches!(err, StoreError::StorageFull { .. }));
            assert!(err.is_quota_exceeded());
        }

        let err = write_error(path, io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(err, StoreError::WriteFile { .. }));
        assert!(!err.is_quota_exceeded());
    }

    #[test]
    fn test_escape_roundtrip() {
        for key in ["exchangeData", "detail-BRK.B", "candlesData-EUR/USD", "a%b c"] {
            assert_eq!(unescape_key(&escape_key(key)).as_deref(), Some(key));
        }
        assert_eq!(unescape_key("bad%Z"), None);
    }
}
