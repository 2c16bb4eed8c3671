//! Resource client for the static JSON files.

use crate::{DataSource, Resource, unwrap_hits};
use bytes::Bytes;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

/// Configuration for the fetch client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Where the resources are served from.
    pub source: DataSource,
    /// Upper bound for a single resource fetch, including the body.
    pub timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            source: DataSource::default(),
            timeout: Duration::from_secs(10),
            user_agent: format!("bourse/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Returns a configuration reading from `source` with default settings.
    #[must_use]
    pub fn for_source(source: DataSource) -> Self {
        Self {
            source,
            ..Self::default()
        }
    }
}

/// Errors that can occur while fetching a resource.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Transport failure: unreachable host, timeout, or unreadable body.
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("Server returned {status} {status_text}")]
    Remote {
        /// HTTP status code.
        status: u16,
        /// Reason phrase for the status.
        status_text: String,
    },

    /// The body was not JSON or had no hit list.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl FetchError {
    fn remote(status: reqwest::StatusCode) -> Self {
        Self::Remote {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }

    fn network(error: &reqwest::Error) -> Self {
        Self::Network(error.to_string())
    }
}

/// Fetches the static resources and unwraps their hit envelope.
#[derive(Debug, Clone)]
pub struct FetchClient {
    client: Client,
    config: ClientConfig,
}

impl FetchClient {
    /// Creates a new fetch client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_nodelay(true)
            .connect_timeout(config.timeout)
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetches `resource` and returns its unwrapped records, in order.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Network`] on transport failure or timeout,
    /// [`FetchError::Remote`] on a non-success status (a missing file in a
    /// directory source reads as 404), and [`FetchError::MalformedResponse`]
    /// if the body cannot be unwrapped.
    pub async fn fetch_collection<T: DeserializeOwned>(
        &self,
        resource: Resource,
    ) -> Result<Vec<T>, FetchError> {
        let location = self.config.source.location(resource);
        tracing::debug!(%location, "fetching resource");

        let body = tokio::time::timeout(self.config.timeout, self.fetch_bytes(resource))
            .await
            .map_err(|_| {
                FetchError::Network(format!(
                    "request for {location} timed out after {}s",
                    self.config.timeout.as_secs_f64()
                ))
            })??;

        let records = unwrap_hits(&body)?;
        tracing::debug!(%location, records = records.len(), bytes = body.len(), "fetched resource");
        Ok(records)
    }

    async fn fetch_bytes(&self, resource: Resource) -> Result<Bytes, FetchError> {
        match &self.config.source {
            DataSource::Http(base) => {
                let response = self
                    .client
                    .get(resource.url(base))
                    .send()
                    .await
                    .map_err(|e| FetchError::network(&e))?;

                let status = response.status();
                if !status.is_success() {
                    return Err(FetchError::remote(status));
                }

                response.bytes().await.map_err(|e| FetchError::network(&e))
            }
            DataSource::Directory(dir) => {
                let path = dir.join(resource.file_name());
                match tokio::fs::read(&path).await {
                    Ok(contents) => Ok(Bytes::from(contents)),
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                        Err(FetchError::remote(reqwest::StatusCode::NOT_FOUND))
                    }
                    Err(e) => Err(FetchError::Network(format!(
                        "failed to read {}: {e}",
                        path.display()
                    ))),
                }
            }
        }
    }
}
