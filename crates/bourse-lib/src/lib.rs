//! Library for browsing exchange-traded instruments with a client-local cache.
//!
//! This is a facade crate that re-exports functionality from the bourse
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use bourse_lib::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FetchClient::new(ClientConfig::for_source(
//!         "https://data.example.com".parse()?,
//!     ))?;
//!     let store = CacheStore::new(Arc::new(FileStore::with_default_path()?));
//!     let session = Session::new(Arc::new(client), CachedLoader::with_default_freshness(store));
//!
//!     let mut list = ListView::new(session);
//!     list.set_type(Some("Cryptocurrency".to_string()));
//!     list.mount().await?;
//!
//!     if let Some(page) = list.visible() {
//!         for instrument in page.items {
//!             println!("{instrument}");
//!         }
//!     }
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use bourse_types::*;

// Re-export the cache layer
pub use bourse_cache::{
    CacheEntry, CacheError, CacheKey, CacheMode, CacheStore, CachedLoader, Clock,
    DEFAULT_FRESHNESS, FileStore, KeyValueStore, MemoryStore, StoreError, SystemClock,
    load_language, save_language,
};

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use bourse_fetch::{
    CatalogSource, ClientConfig, DEFAULT_BASE_URL, DataSource, FetchClient, FetchError, Resource,
    unwrap_hits,
};

// Re-export the browsing layer
#[cfg(feature = "browse")]
pub use bourse_browse::{
    Binding, CandleView, DetailView, FilterState, Filterable, ListView, LoadError, Message,
    PAGE_SIZE, Page, PageState, Route, RouteError, Session, Subject, ViewState,
    candles_for_symbol, filter_and_paginate, filter_records, paginate, sort_chronologically,
    translate_type, type_label,
};

/// Prelude module for convenient imports.
///
/// ```
/// use bourse_lib::prelude::*;
/// ```
pub mod prelude {
    pub use bourse_types::{
        BourseError, Candle, Instrument, InstrumentType, Language, Result, Symbol,
    };

    pub use bourse_cache::{CacheMode, CacheStore, CachedLoader, FileStore, MemoryStore};

    #[cfg(feature = "fetch")]
    pub use bourse_fetch::{CatalogSource, ClientConfig, DataSource, FetchClient};

    #[cfg(feature = "browse")]
    pub use bourse_browse::{
        CandleView, DetailView, FilterState, ListView, LoadError, Message, Route, Session,
        ViewState,
    };
}
