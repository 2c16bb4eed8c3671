//! Scripted record sources shared by the unit tests.

use async_trait::async_trait;
use bourse_fetch::{CatalogSource, FetchError};
use bourse_types::{Candle, Instrument};
use chrono::{Duration, TimeZone, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Serves fixed results and counts calls per resource.
#[derive(Debug)]
pub(crate) struct ScriptedSource {
    pub(crate) instruments: Result<Vec<Instrument>, FetchError>,
    pub(crate) metadata: Result<Vec<Instrument>, FetchError>,
    pub(crate) candles: Result<Vec<Candle>, FetchError>,
    pub(crate) instrument_calls: AtomicUsize,
    pub(crate) metadata_calls: AtomicUsize,
    pub(crate) candle_calls: AtomicUsize,
}

impl ScriptedSource {
    pub(crate) fn new() -> Self {
        Self {
            instruments: Ok(instruments()),
            metadata: Ok(instruments()),
            candles: Ok(candles()),
            instrument_calls: AtomicUsize::new(0),
            metadata_calls: AtomicUsize::new(0),
            candle_calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl CatalogSource for ScriptedSource {
    async fn instruments(&self) -> Result<Vec<Instrument>, FetchError> {
        self.instrument_calls.fetch_add(1, Ordering::SeqCst);
        self.instruments.clone()
    }

    async fn metadata(&self) -> Result<Vec<Instrument>, FetchError> {
        self.metadata_calls.fetch_add(1, Ordering::SeqCst);
        self.metadata.clone()
    }

    async fn candles(&self) -> Result<Vec<Candle>, FetchError> {
        self.candle_calls.fetch_add(1, Ordering::SeqCst);
        self.candles.clone()
    }
}

pub(crate) fn instruments() -> Vec<Instrument> {
    let mut records = vec![
        Instrument::new("BTC", "Bitcoin", "Cryptocurrency", "Global", "USD"),
        Instrument::new("AAPL", "Apple Inc.", "Common Stock", "USA", "USD"),
        Instrument::new("ETH", "Ethereum", "Cryptocurrency", "Global", "USD"),
    ];
    for i in 0..7 {
        records.push(Instrument::new(
            format!("IDX{i}"),
            format!("Index {i}"),
            "Index",
            "Germany",
            "EUR",
        ));
    }
    records
}

/// Twelve daily BTC candles interleaved with three ETH candles.
pub(crate) fn candles() -> Vec<Candle> {
    let start = Utc.with_ymd_and_hms(2024, 12, 1, 0, 0, 0).unwrap();
    let mut all = Vec::new();
    for day in 0..12_u32 {
        let price = 40_000.0 + f64::from(day) * 100.0;
        all.push(Candle::new(
            "BTC",
            start + Duration::days(i64::from(day)),
            price,
            price + 50.0,
            price - 50.0,
            price + 25.0,
            10.0,
        ));
        if day % 4 == 0 {
            all.push(Candle::new(
                "ETH",
                start + Duration::days(i64::from(day)),
                2_000.0,
                2_050.0,
                1_950.0,
                2_010.0,
                100.0,
            ));
        }
    }
    all
}
