//! The three view routes.

use crate::RouteError;
use bourse_types::Symbol;

/// A view location: `/`, `/details/:symbol` or `/candle/:symbol`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// Instrument list.
    List,
    /// Detail view of one instrument.
    Details(Symbol),
    /// Candle view of one instrument.
    Candle(Symbol),
}

impl Route {
    /// Returns the symbol this route is parameterized by, if any.
    #[must_use]
    pub const fn symbol(&self) -> Option<&Symbol> {
        match self {
            Self::List => None,
            Self::Details(symbol) | Self::Candle(symbol) => Some(symbol),
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List => write!(f, "/"),
            Self::Details(symbol) => write!(f, "/details/{symbol}"),
            Self::Candle(symbol) => write!(f, "/candle/{symbol}"),
        }
    }
}

impl std::str::FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let path = s.trim();
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return Ok(Self::List);
        }

        let mut segments = trimmed.trim_start_matches('/').splitn(2, '/');
        let view = segments.next().unwrap_or_default();
        let symbol = segments.next();

        let build: fn(Symbol) -> Self = match view {
            "details" => Self::Details,
            "candle" => Self::Candle,
            _ => return Err(RouteError::Unknown(path.to_string())),
        };

        match symbol {
            Some(symbol) if symbol.contains('/') => Err(RouteError::Unknown(path.to_string())),
            Some(symbol) if !symbol.is_empty() => Ok(build(Symbol::new(symbol))),
            _ => Err(RouteError::MissingSymbol(path.to_string())),
        }
    }
}
