//! Loading records through the cache.

use crate::{LoadError, Subject, candles_for_symbol};
use bourse_cache::{CacheKey, CacheMode, CachedLoader};
use bourse_fetch::CatalogSource;
use bourse_types::{Candle, Instrument, Symbol};
use std::sync::Arc;

/// The record source, cache and cache mode shared by every view.
///
/// Cloning is cheap; clones share the source and the store.
#[derive(Debug, Clone)]
pub struct Session {
    source: Arc<dyn CatalogSource>,
    loader: CachedLoader,
    mode: CacheMode,
}

impl Session {
    /// Creates a session that serves fresh cache entries before fetching.
    #[must_use]
    pub fn new(source: Arc<dyn CatalogSource>, loader: CachedLoader) -> Self {
        Self {
            source,
            loader,
            mode: CacheMode::Use,
        }
    }

    /// Sets the cache mode.
    #[must_use]
    pub fn with_mode(mut self, mode: CacheMode) -> Self {
        self.mode = mode;
        self
    }

    /// Returns the cache-or-fetch loader.
    #[must_use]
    pub const fn loader(&self) -> &CachedLoader {
        &self.loader
    }

    /// Returns the cache mode.
    #[must_use]
    pub const fn mode(&self) -> CacheMode {
        self.mode
    }

    /// Loads the instrument list.
    ///
    /// A malformed response yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Network`] or [`LoadError::Remote`] if the list
    /// cannot be fetched.
    pub async fn instruments(&self) -> Result<Vec<Instrument>, LoadError> {
        let source = &self.source;
        let result = self
            .loader
            .load(&CacheKey::exchange_data(), self.mode, || async move {
                source.instruments().await.map_err(LoadError::from)
            })
            .await;

        match result {
            Err(LoadError::Malformed(reason)) => {
                tracing::warn!(%reason, "instrument list malformed, showing no data");
                Ok(Vec::new())
            }
            other => other,
        }
    }

    /// Loads the detail record of `symbol`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::NotFound`] if no record matches `symbol` or the
    /// response is malformed, and [`LoadError::Network`] or
    /// [`LoadError::Remote`] if the metadata cannot be fetched.
    pub async fn instrument_detail(&self, symbol: &Symbol) -> Result<Instrument, LoadError> {
        let source = &self.source;
        let result = self
            .loader
            .load(&CacheKey::detail(symbol), self.mode, || async move {
                source
                    .metadata()
                    .await?
                    .into_iter()
                    .find(|record| record.has_symbol(symbol))
                    .ok_or(LoadError::NotFound(Subject::Detail))
            })
            .await;

        not_found_if_malformed(result, Subject::Detail)
    }

    /// Loads the candle series of `symbol`, in source order.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::NotFound`] if `symbol` has no candles or the
    /// response is malformed, and [`LoadError::Network`] or
    /// [`LoadError::Remote`] if the candles cannot be fetched.
    pub async fn candles(&self, symbol: &Symbol) -> Result<Vec<Candle>, LoadError> {
        let source = &self.source;
        let result = self
            .loader
            .load(&CacheKey::candles(symbol), self.mode, || async move {
                let series = candles_for_symbol(&source.candles().await?, symbol);
                if series.is_empty() {
                    Err(LoadError::NotFound(Subject::Candles))
                } else {
                    Ok(series)
                }
            })
            .await;

        not_found_if_malformed(result, Subject::Candles)
    }
}

fn not_found_if_malformed<T>(result: Result<T, LoadError>, subject: Subject) -> Result<T, LoadError> {
    match result {
        Err(LoadError::Malformed(reason)) => {
            tracing::warn!(%reason, %subject, "malformed response, reporting not found");
            Err(LoadError::NotFound(subject))
        }
        other => other,
    }
}
