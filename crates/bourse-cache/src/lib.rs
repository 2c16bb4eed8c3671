//! Client-local JSON cache for the bourse instrument browser.
//!
//! This crate provides the caching layer shared by every view:
//!
//! - [`KeyValueStore`] - Persistence seam, with [`FileStore`] and [`MemoryStore`]
//! - [`CacheStore`] - Timestamped entries with prefix eviction on quota overflow
//! - [`CachedLoader`] - Serve-if-fresh, otherwise load and repopulate
//! - [`Clock`] - Time source used for freshness checks
//! - [`load_language`] / [`save_language`] - Persisted UI language

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod backend;
mod clock;
mod entry;
mod error;
mod file;
mod loader;
mod memory;
mod preferences;
mod store;

pub use backend::KeyValueStore;
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::{CacheEntry, CacheKey};
pub use error::{CacheError, Result, StoreError};
pub use file::FileStore;
pub use loader::{CacheMode, CachedLoader, DEFAULT_FRESHNESS};
pub use memory::MemoryStore;
pub use preferences::{load_language, save_language};
pub use store::CacheStore;
