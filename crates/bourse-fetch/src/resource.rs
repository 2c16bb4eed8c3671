//! Resource paths and data source locations.

use std::convert::Infallible;
use std::path::PathBuf;

/// Base URL used when no data source is configured (the dev server).
pub const DEFAULT_BASE_URL: &str = "http://localhost:5173";

/// One of the static JSON resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    /// Instrument list.
    Exchange,
    /// Instrument detail records.
    Metadata,
    /// Candle series for all symbols.
    Candle,
}

impl Resource {
    /// Returns the resource path, e.g. `/exchange.json`.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Exchange => "/exchange.json",
            Self::Metadata => "/metadata.json",
            Self::Candle => "/candle.json",
        }
    }

    /// Returns the file name of the resource.
    #[must_use]
    pub fn file_name(&self) -> &'static str {
        self.path().trim_start_matches('/')
    }

    /// Builds the full URL below `base_url`.
    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Where the static resources are served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// HTTP(S) base URL.
    Http(String),
    /// Local directory holding the JSON files.
    Directory(PathBuf),
}

impl DataSource {
    /// Returns a human-readable location for `resource`.
    #[must_use]
    pub fn location(&self, resource: Resource) -> String {
        match self {
            Self::Http(base) => resource.url(base),
            Self::Directory(dir) => dir.join(resource.file_name()).display().to_string(),
        }
    }
}

impl Default for DataSource {
    fn default() -> Self {
        Self::Http(DEFAULT_BASE_URL.to_string())
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http(base) => write!(f, "{base}"),
            Self::Directory(dir) => write!(f, "{}", dir.display()),
        }
    }
}

impl std::str::FromStr for DataSource {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let lower = s.to_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Ok(Self::Http(s.to_string()))
        } else {
            Ok(Self::Directory(PathBuf::from(s)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_paths() {
        assert_eq!(Resource::Exchange.path(), "/exchange.json");
        assert_eq!(Resource::Metadata.path(), "/metadata.json");
        assert_eq!(Resource::Candle.file_name(), "candle.json");
    }

    #[test]
    fn test_resource_url_joins_base() {
        assert_eq!(
            Resource::Candle.url("https://data.example.com/"),
            "https://data.example.com/candle.json"
        );
        assert_eq!(
            Resource::Exchange.url("http://localhost:5173"),
            "http://localhost:5173/exchange.json"
        );
    }

    #[test]
    fn test_data_source_parse() {
        assert_eq!(
            "https://data.example.com".parse::<DataSource>().unwrap(),
            DataSource::Http("https://data.example.com".to_string())
        );
        assert_eq!(
            "./public".parse::<DataSource>().unwrap(),
            DataSource::Directory(PathBuf::from("./public"))
        );
    }

    #[test]
    fn test_location() {
        let source = DataSource::Directory(PathBuf::from("/srv/data"));
        assert_eq!(source.location(Resource::Metadata), "/srv/data/metadata.json");
    }
}
