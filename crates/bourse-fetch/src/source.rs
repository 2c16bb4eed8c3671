//! The record source seam used by the browse layer.

use crate::{FetchClient, FetchError, Resource};
use async_trait::async_trait;
use bourse_types::{Candle, Instrument};

/// Supplies the three record collections.
///
/// [`FetchClient`] is the production implementation; tests substitute
/// scripted sources.
#[async_trait]
pub trait CatalogSource: Send + Sync + std::fmt::Debug {
    /// Returns every instrument from `/exchange.json`.
    async fn instruments(&self) -> Result<Vec<Instrument>, FetchError>;

    /// Returns every detail record from `/metadata.json`.
    async fn metadata(&self) -> Result<Vec<Instrument>, FetchError>;

    /// Returns every candle from `/candle.json`.
    async fn candles(&self) -> Result<Vec<Candle>, FetchError>;
}

#[async_trait]
impl CatalogSource for FetchClient {
    async fn instruments(&self) -> Result<Vec<Instrument>, FetchError> {
        self.fetch_collection(Resource::Exchange).await
    }

    async fn metadata(&self) -> Result<Vec<Instrument>, FetchError> {
        self.fetch_collection(Resource::Metadata).await
    }

    async fn candles(&self) -> Result<Vec<Candle>, FetchError> {
        self.fetch_collection(Resource::Candle).await
    }
}
