//! Load and routing errors.

use crate::i18n::Message;
use bourse_fetch::FetchError;
use bourse_types::Language;
use thiserror::Error;

/// What a not-found load was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    /// Instrument detail record.
    Detail,
    /// Candle series.
    Candles,
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Detail => write!(f, "details"),
            Self::Candles => write!(f, "candles"),
        }
    }
}

/// Why a view load failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The data source could not be reached in time.
    #[error("network error: {0}")]
    Network(String),

    /// The data source answered with a non-success status.
    #[error("server returned {status} {status_text}")]
    Remote {
        /// HTTP status code.
        status: u16,
        /// Reason phrase for the status.
        status_text: String,
    },

    /// The response did not have the expected shape.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// The requested symbol is absent from the loaded collection.
    #[error("{0} not found")]
    NotFound(Subject),
}

impl From<FetchError> for LoadError {
    fn from(error: FetchError) -> Self {
        match error {
            FetchError::Network(reason) => Self::Network(reason),
            FetchError::Remote {
                status,
                status_text,
            } => Self::Remote {
                status,
                status_text,
            },
            FetchError::MalformedResponse(reason) => Self::Malformed(reason),
        }
    }
}

impl LoadError {
    /// Returns true for [`LoadError::NotFound`].
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Returns the translated message shown to the user.
    #[must_use]
    pub fn user_message(&self, language: Language) -> String {
        match self {
            Self::Network(_) => Message::NetworkError.text(language).to_string(),
            Self::Remote {
                status,
                status_text,
            } => {
                let prefix = Message::ErrorFetchingData.text(language);
                if status_text.is_empty() {
                    format!("{prefix}: {status}")
                } else {
                    format!("{prefix}: {status} {status_text}")
                }
            }
            Self::Malformed(_) => Message::NoData.text(language).to_string(),
            Self::NotFound(Subject::Detail) => Message::DetailsNotFound.text(language).to_string(),
            Self::NotFound(Subject::Candles) => {
                Message::CandlesNotFound.text(language).to_string()
            }
        }
    }
}

/// A path that does not name a view.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// No view is mounted at this path.
    #[error("unknown route: {0}")]
    Unknown(String),

    /// The symbol segment is empty.
    #[error("missing symbol in route: {0}")]
    MissingSymbol(String),
}
