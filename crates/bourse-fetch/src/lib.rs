//! Static JSON resource fetching for the bourse instrument browser.
//!
//! This crate provides the remote side of the data pipeline:
//!
//! - [`Resource`] / [`DataSource`] - Which resource to read, and from where
//! - [`FetchClient`] - HTTP or directory reader with a per-request timeout
//! - [`unwrap_hits`] - Search-hit envelope unwrapping
//! - [`CatalogSource`] - The seam the browse layer loads records through

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod envelope;
mod resource;
mod source;

pub use client::{ClientConfig, FetchClient, FetchError};
pub use envelope::unwrap_hits;
pub use resource::{DEFAULT_BASE_URL, DataSource, Resource};
pub use source::CatalogSource;
