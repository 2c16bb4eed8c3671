//! Error types for bourse.

use thiserror::Error;

/// Result type alias for bourse type conversions.
pub type Result<T> = std::result::Result<T, BourseError>;

/// Errors raised while parsing or converting core types.
#[derive(Error, Debug)]
pub enum BourseError {
    /// Instrument type label not recognized.
    #[error("Unknown instrument type: {0}")]
    UnknownInstrumentType(String),

    /// Language code not recognized.
    #[error("Unknown language: {0} (expected en or de)")]
    UnknownLanguage(String),

    /// Symbol was empty after trimming.
    #[error("Symbol must not be empty")]
    EmptySymbol,
}
