//! Synthetic data for the bourse benchmarks.

use bourse_lib::{Candle, Instrument, InstrumentType};
use chrono::{Duration, TimeZone, Utc};
use serde::Serialize;

/// Returns `count` instruments cycling through every known type.
pub fn instruments(count: usize) -> Vec<Instrument> {
    (0..count)
        .map(|i| {
            let kind = InstrumentType::ALL[i % InstrumentType::ALL.len()];
            Instrument::new(
                format!("SYM{i:05}"),
                format!("Instrument {i} {}", kind.alias()),
                kind.as_str(),
                if i % 2 == 0 { "USA" } else { "Germany" },
                if i % 2 == 0 { "USD" } else { "EUR" },
            )
        })
        .collect()
}

/// Returns `per_symbol` daily candles for each of `symbols`, interleaved by day.
pub fn candles(symbols: &[&str], per_symbol: usize) -> Vec<Candle> {
    let Some(start) = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).single() else {
        return Vec::new();
    };

    let mut all = Vec::with_capacity(symbols.len() * per_symbol);
    for day in 0..per_symbol {
        for (offset, symbol) in symbols.iter().enumerate() {
            let price = 100.0 + (day % 50) as f64 + offset as f64;
            all.push(Candle::new(
                *symbol,
                start + Duration::days(day as i64),
                price,
                price + 2.0,
                price - 2.0,
                price + 1.0,
                1_000.0 + day as f64,
            ));
        }
    }
    all
}

/// Wraps `records` in the `{ hits: { hits: [ { _source } ] } }` envelope.
pub fn envelope<T: Serialize>(records: &[T]) -> Vec<u8> {
    let hits: Vec<_> = records
        .iter()
        .map(|record| serde_json::json!({ "_source": record }))
        .collect();
    serde_json::to_vec(&serde_json::json!({ "hits": { "hits": hits } })).unwrap_or_default()
}
