//! OHLCV (candlestick) records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Symbol;

/// One OHLCV record for a symbol, as published in the candle list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candle {
    /// Symbol of the instrument this candle belongs to.
    pub symbol: String,
    /// Start of the candle period.
    pub date_time: DateTime<Utc>,
    /// Opening price.
    pub start_price: f64,
    /// Highest price during the period.
    pub highest_price: f64,
    /// Lowest price during the period.
    pub lowest_price: f64,
    /// Closing price.
    pub end_price: f64,
    /// Traded volume.
    pub volume: f64,
}

impl Candle {
    /// Creates a new candle.
    #[must_use]
    pub fn new(
        symbol: impl Into<String>,
        date_time: DateTime<Utc>,
        start_price: f64,
        highest_price: f64,
        lowest_price: f64,
        end_price: f64,
        volume: f64,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            date_time,
            start_price,
            highest_price,
            lowest_price,
            end_price,
            volume,
        }
    }

    /// Returns true if this candle belongs to `symbol` (case-insensitive).
    #[must_use]
    pub fn has_symbol(&self, symbol: &Symbol) -> bool {
        symbol.matches(&self.symbol)
    }

    /// Returns the price range (high - low).
    #[must_use]
    pub fn range(&self) -> f64 {
        self.highest_price - self.lowest_price
    }

    /// Returns the body size (|close - open|).
    #[must_use]
    pub fn body(&self) -> f64 {
        (self.end_price - self.start_price).abs()
    }

    /// Returns true if the period closed above its open.
    #[must_use]
    pub fn is_bullish(&self) -> bool {
        self.end_price > self.start_price
    }

    /// Returns true if the period closed below its open.
    #[must_use]
    pub fn is_bearish(&self) -> bool {
        self.end_price < self.start_price
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::TimeZone;

    fn create_test_candle() -> Candle {
        let at = Utc.with_ymd_and_hms(2024, 12, 17, 10, 0, 0).unwrap();
        Candle::new("BTC", at, 100.0, 200.0, 50.0, 150.0, 1000.0)
    }

    #[test]
    fn test_deserialize_wire_shape() {
        let json = r#"{
            "symbol": "BTC",
            "dateTime": "2024-12-17T10:00:00Z",
            "startPrice": 100,
            "highestPrice": 200,
            "lowestPrice": 50,
            "endPrice": 150,
            "volume": 1000
        }"#;
        let candle: Candle = serde_json::from_str(json).unwrap();
        assert_eq!(candle, create_test_candle());
    }

    #[test]
    fn test_range_and_body() {
        let candle = create_test_candle();
        assert_relative_eq!(candle.range(), 150.0);
        assert_relative_eq!(candle.body(), 50.0);
    }

    #[test]
    fn test_direction() {
        let candle = create_test_candle();
        assert!(candle.is_bullish());
        assert!(!candle.is_bearish());

        let mut down = create_test_candle();
        down.end_price = 80.0;
        assert!(down.is_bearish());
    }

    #[test]
    fn test_has_symbol() {
        let candle = create_test_candle();
        assert!(candle.has_symbol(&Symbol::new("btc")));
        assert!(!candle.has_symbol(&Symbol::new("eth")));
    }
}
