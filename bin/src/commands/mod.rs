//! CLI command implementations.

pub(crate) mod browse;
pub(crate) mod cache;
pub(crate) mod candle;
pub(crate) mod detail;
pub(crate) mod language;
pub(crate) mod list;
pub(crate) mod open;
pub(crate) mod types;
