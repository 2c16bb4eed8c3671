//! Candle grouping.

use bourse_types::{Candle, Symbol};

/// Returns the candles of `symbol` (case-insensitive), in input order.
#[must_use]
pub fn candles_for_symbol(all: &[Candle], symbol: &Symbol) -> Vec<Candle> {
    all.iter()
        .filter(|candle| candle.has_symbol(symbol))
        .cloned()
        .collect()
}

/// Sorts candles by `dateTime`, keeping the relative order of equal times.
pub fn sort_chronologically(candles: &mut [Candle]) {
    candles.sort_by_key(|candle| candle.date_time);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn candle(symbol: &str, day: u32, close: f64) -> Candle {
        let at = Utc.with_ymd_and_hms(2024, 12, day, 0, 0, 0).unwrap();
        Candle::new(symbol, at, close, close, close, close, 1.0)
    }

    #[test]
    fn test_groups_by_symbol_preserving_order() {
        let all = vec![
            candle("BTC", 3, 3.0),
            candle("ETH", 1, 10.0),
            candle("btc", 1, 1.0),
            candle("BTC", 2, 2.0),
        ];

        let grouped = candles_for_symbol(&all, &Symbol::new("BTC"));
        let closes: Vec<f64> = grouped.iter().map(|c| c.end_price).collect();
        assert_eq!(closes, [3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_symbol_match_is_exact() {
        let all = vec![candle("BTCUSD", 1, 1.0), candle("BT", 1, 1.0)];
        assert!(candles_for_symbol(&all, &Symbol::new("BTC")).is_empty());
    }

    #[test]
    fn test_sort_is_stable() {
        let mut series = vec![
            candle("BTC", 2, 2.0),
            candle("BTC", 1, 1.0),
            candle("BTC", 2, 2.5),
        ];

        sort_chronologically(&mut series);
        let closes: Vec<f64> = series.iter().map(|c| c.end_price).collect();
        assert_eq!(closes, [1.0, 2.0, 2.5]);
    }
}
