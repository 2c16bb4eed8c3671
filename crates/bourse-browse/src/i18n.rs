//! English and German UI strings.

use bourse_types::{InstrumentType, Language};

/// A translatable label or user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Message {
    DataList,
    SearchPlaceholder,
    FilterByType,
    All,
    Name,
    Symbol,
    Type,
    Country,
    CountryIso,
    Currency,
    Isin,
    Exchange,
    Code,
    ValidUntil,
    CompanyWebsite,
    Details,
    ViewCandleData,
    CandleDataFor,
    Date,
    Open,
    High,
    Low,
    Close,
    Volume,
    Page,
    Back,
    Loading,
    NotAvailable,
    NoData,
    NoCandleData,
    DetailsNotFound,
    CandlesNotFound,
    ErrorFetchingData,
    NetworkError,
    UnexpectedError,
    Language,
    NextPage,
    PreviousPage,
    Refresh,
    Retry,
    Quit,
}

impl Message {
    /// Catalog key of the message.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::DataList => "dataList",
            Self::SearchPlaceholder => "searchPlaceholder",
            Self::FilterByType => "filterByType",
            Self::All => "all",
            Self::Name => "name",
            Self::Symbol => "symbol",
            Self::Type => "type",
            Self::Country => "country",
            Self::CountryIso => "countryIso",
            Self::Currency => "currency",
            Self::Isin => "isin",
            Self::Exchange => "exchange",
            Self::Code => "code",
            Self::ValidUntil => "validUntil",
            Self::CompanyWebsite => "companyWebsite",
            Self::Details => "details",
            Self::ViewCandleData => "viewCandleData",
            Self::CandleDataFor => "candleDataFor",
            Self::Date => "date",
            Self::Open => "open",
            Self::High => "high",
            Self::Low => "low",
            Self::Close => "close",
            Self::Volume => "volume",
            Self::Page => "page",
            Self::Back => "back",
            Self::Loading => "loading",
            Self::NotAvailable => "notAvailable",
            Self::NoData => "noData",
            Self::NoCandleData => "noCandleData",
            Self::DetailsNotFound => "detailsNotFound",
            Self::CandlesNotFound => "candlesNotFound",
            Self::ErrorFetchingData => "errorFetchingData",
            Self::NetworkError => "networkError",
            Self::UnexpectedError => "unexpectedError",
            Self::Language => "language",
            Self::NextPage => "nextPage",
            Self::PreviousPage => "previousPage",
            Self::Refresh => "refresh",
            Self::Retry => "retry",
            Self::Quit => "quit",
        }
    }

    /// Returns the message text in `language`.
    #[must_use]
    pub const fn text(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.english(),
            Language::De => self.german(),
        }
    }

    const fn english(&self) -> &'static str {
        match self {
            Self::DataList => "Instruments",
            Self::SearchPlaceholder => "Search by name...",
            Self::FilterByType => "Filter by type",
            Self::All => "All",
            Self::Name => "Name",
            Self::Symbol => "Symbol",
            Self::Type => "Type",
            Self::Country => "Country",
            Self::CountryIso => "Country ISO",
            Self::Currency => "Currency",
            Self::Isin => "ISIN",
            Self::Exchange => "Exchange",
            Self::Code => "Code",
            Self::ValidUntil => "Valid until",
            Self::CompanyWebsite => "Company website",
            Self::Details => "Details",
            Self::ViewCandleData => "View candle data",
            Self::CandleDataFor => "Candle data for",
            Self::Date => "Date",
            Self::Open => "Open",
            Self::High => "High",
            Self::Low => "Low",
            Self::Close => "Close",
            Self::Volume => "Volume",
            Self::Page => "Page",
            Self::Back => "Back",
            Self::Loading => "Loading...",
            Self::NotAvailable => "Not available",
            Self::NoData => "No data found.",
            Self::NoCandleData => "No candle data available.",
            Self::DetailsNotFound => "Details not found.",
            Self::CandlesNotFound => "Candles not found.",
            Self::ErrorFetchingData => "Error fetching data",
            Self::NetworkError => "Network Error",
            Self::UnexpectedError => "Unexpected Error",
            Self::Language => "Language",
            Self::NextPage => "Next page",
            Self::PreviousPage => "Previous page",
            Self::Refresh => "Refresh",
            Self::Retry => "Retry",
            Self::Quit => "Quit",
        }
    }

    const fn german(&self) -> &'static str {
        match self {
            Self::DataList => "Instrumente",
            Self::SearchPlaceholder => "Nach Namen suchen...",
            Self::FilterByType => "Nach Typ filtern",
            Self::All => "Alle",
            Self::Name => "Name",
            Self::Symbol => "Symbol",
            Self::Type => "Typ",
            Self::Country => "Land",
            Self::CountryIso => "Länder-ISO",
            Self::Currency => "Währung",
            Self::Isin => "ISIN",
            Self::Exchange => "Börse",
            Self::Code => "Code",
            Self::ValidUntil => "Gültig bis",
            Self::CompanyWebsite => "Firmenwebseite",
            Self::Details => "Details",
            Self::ViewCandleData => "Kerzendaten anzeigen",
            Self::CandleDataFor => "Kerzendaten für",
            Self::Date => "Datum",
            Self::Open => "Eröffnung",
            Self::High => "Hoch",
            Self::Low => "Tief",
            Self::Close => "Schluss",
            Self::Volume => "Volumen",
            Self::Page => "Seite",
            Self::Back => "Zurück",
            Self::Loading => "Wird geladen...",
            Self::NotAvailable => "Nicht verfügbar",
            Self::NoData => "Keine Daten gefunden.",
            Self::NoCandleData => "Keine Kerzendaten verfügbar.",
            Self::DetailsNotFound => "Details nicht gefunden.",
            Self::CandlesNotFound => "Kerzendaten nicht gefunden.",
            Self::ErrorFetchingData => "Fehler beim Abrufen der Daten",
            Self::NetworkError => "Netzwerkfehler",
            Self::UnexpectedError => "Unerwarteter Fehler",
            Self::Language => "Sprache",
            Self::NextPage => "Nächste Seite",
            Self::PreviousPage => "Vorherige Seite",
            Self::Refresh => "Aktualisieren",
            Self::Retry => "Erneut versuchen",
            Self::Quit => "Beenden",
        }
    }
}

/// Returns the translated sidebar label for `kind`.
#[must_use]
pub const fn type_label(kind: InstrumentType, language: Language) -> &'static str {
    match language {
        Language::En => kind.as_str(),
        Language::De => match kind {
            InstrumentType::CommonStock => "Stammaktie",
            InstrumentType::Cryptocurrency => "Kryptowährung",
            InstrumentType::ExchangeTradedCommodity => "Börsengehandelter Rohstoff",
            InstrumentType::ExchangeTradedFund => "Börsengehandelter Fonds",
            InstrumentType::Fund => "Fonds",
            InstrumentType::Index => "Index",
            InstrumentType::Commodity => "Rohstoff",
            InstrumentType::MutualFund => "Investmentfonds",
        },
    }
}

/// Translates a raw type label from the data, falling back to the label itself.
#[must_use]
pub fn translate_type(raw: &str, language: Language) -> String {
    raw.parse::<InstrumentType>()
        .map_or_else(|_| raw.to_string(), |kind| type_label(kind, language).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_follow_catalog_names() {
        assert_eq!(Message::DetailsNotFound.key(), "detailsNotFound");
        assert_eq!(Message::NoCandleData.key(), "noCandleData");
    }

    #[test]
    fn test_languages_differ() {
        assert_eq!(Message::Back.text(Language::En), "Back");
        assert_eq!(Message::Back.text(Language::De), "Zurück");
    }

    #[test]
    fn test_type_labels() {
        assert_eq!(
            type_label(InstrumentType::Cryptocurrency, Language::En),
            "Cryptocurrency"
        );
        assert_eq!(translate_type("Fund", Language::De), "Fonds");
        assert_eq!(translate_type("Warrant", Language::De), "Warrant");
    }
}
