//! Core types for the bourse instrument browser.
//!
//! This crate provides the data structures shared by every other bourse crate:
//!
//! - [`Instrument`] - Exchange-traded instrument record with optional metadata
//! - [`Candle`] - One OHLCV price record for a symbol
//! - [`Symbol`] - Instrument key, matched case-insensitively
//! - [`InstrumentType`] - Known instrument types offered as list filters
//! - [`Language`] - UI language used for labels and messages

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod candle;
mod error;
mod instrument;
mod language;
mod symbol;

pub use candle::Candle;
pub use error::{BourseError, Result};
pub use instrument::{FundDetails, Instrument, InstrumentType};
pub use language::Language;
pub use symbol::Symbol;
