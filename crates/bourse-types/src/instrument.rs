//! Financial instrument definitions.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{BourseError, Symbol};

/// Instrument type offered by the list filter.
///
/// Records carry their type as free text; this enum only names the types the
/// list view offers as filters. Filtering itself compares the raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstrumentType {
    /// Individual stocks.
    CommonStock,
    /// Cryptocurrencies.
    Cryptocurrency,
    /// Exchange-traded commodities.
    ExchangeTradedCommodity,
    /// Exchange-traded funds.
    ExchangeTradedFund,
    /// Funds.
    Fund,
    /// Indices.
    Index,
    /// Commodities (metals, energy, agriculture).
    Commodity,
    /// Mutual funds.
    MutualFund,
}

impl InstrumentType {
    /// All types, in sidebar order.
    pub const ALL: [Self; 8] = [
        Self::CommonStock,
        Self::Cryptocurrency,
        Self::ExchangeTradedCommodity,
        Self::ExchangeTradedFund,
        Self::Fund,
        Self::Index,
        Self::Commodity,
        Self::MutualFund,
    ];

    /// Returns the type label as it appears in the data.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CommonStock => "Common Stock",
            Self::Cryptocurrency => "Cryptocurrency",
            Self::ExchangeTradedCommodity => "Exchange traded commodity",
            Self::ExchangeTradedFund => "Exchange traded fund",
            Self::Fund => "Fund",
            Self::Index => "Index",
            Self::Commodity => "Commodity",
            Self::MutualFund => "Mutual fund",
        }
    }

    /// Returns the short alias accepted on the command line.
    #[must_use]
    pub const fn alias(&self) -> &'static str {
        match self {
            Self::CommonStock => "stock",
            Self::Cryptocurrency => "crypto",
            Self::ExchangeTradedCommodity => "etc",
            Self::ExchangeTradedFund => "etf",
            Self::Fund => "fund",
            Self::Index => "index",
            Self::Commodity => "commodity",
            Self::MutualFund => "mutual",
        }
    }
}

impl std::fmt::Display for InstrumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for InstrumentType {
    type Err = BourseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().to_lowercase() == needle || t.alias() == needle)
            .ok_or_else(|| BourseError::UnknownInstrumentType(s.to_string()))
    }
}

/// Fund-specific details attached to some instruments.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundDetails {
    /// Issuer website.
    #[serde(rename = "companyURL", default, skip_serializing_if = "Option::is_none")]
    pub company_url: Option<String>,
    /// Any other fund fields, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A tradable instrument as published in the exchange and metadata lists.
///
/// Only `symbol` is required. Every other field may be absent in the source
/// data; unknown fields are kept in [`Instrument::extra`] so a record
/// round-trips through the cache unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instrument {
    /// Unique key (e.g., "BTC", "AAPL").
    pub symbol: String,
    /// Display name (e.g., "Apple Inc.").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Type label (e.g., "Common Stock").
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Country as listed in the exchange list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Country name as listed in the metadata list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_name: Option<String>,
    /// Trading currency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// International Securities Identification Number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isin: Option<String>,
    /// Listing exchange.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange: Option<String>,
    /// Exchange-specific code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Validity end of the record, as published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<String>,
    /// ISO country code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_iso: Option<String>,
    /// Fund details, present for exchange-traded funds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange_traded_fund_details: Option<FundDetails>,
    /// Remaining fields, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Instrument {
    /// Creates an instrument with only the fields the list view shows.
    #[must_use]
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        kind: impl Into<String>,
        country: impl Into<String>,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: Some(name.into()),
            kind: Some(kind.into()),
            country: Some(country.into()),
            country_name: None,
            currency: Some(currency.into()),
            isin: None,
            exchange: None,
            code: None,
            valid_until: None,
            country_iso: None,
            exchange_traded_fund_details: None,
            extra: Map::new(),
        }
    }

    /// Returns true if this record is keyed by `symbol` (case-insensitive).
    #[must_use]
    pub fn has_symbol(&self, symbol: &Symbol) -> bool {
        symbol.matches(&self.symbol)
    }

    /// Returns the issuer website, if the record carries one.
    #[must_use]
    pub fn company_url(&self) -> Option<&str> {
        self.exchange_traded_fund_details
            .as_ref()
            .and_then(|details| details.company_url.as_deref())
    }

    /// Returns the country, preferring the metadata country name.
    #[must_use]
    pub fn country_label(&self) -> Option<&str> {
        self.country_name.as_deref().or(self.country.as_deref())
    }
}

impl std::fmt::Display for Instrument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} ({})", name, self.symbol),
            None => write!(f, "{}", self.symbol),
        }
    }
}
