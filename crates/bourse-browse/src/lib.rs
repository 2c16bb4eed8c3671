//! Filtering, pagination, loading and view state for the bourse instrument
//! browser.
//!
//! - [`filter_and_paginate`] - The pure list transform (page size [`PAGE_SIZE`])
//! - [`candles_for_symbol`] - Candle grouping per symbol
//! - [`Session`] - Cache-or-fetch loading of list, detail and candle data
//! - [`ListView`] / [`DetailView`] / [`CandleView`] - View bindings on top of
//!   the shared [`ViewState`] machine
//! - [`Route`] - `/`, `/details/:symbol` and `/candle/:symbol`
//! - [`Message`] - English and German UI strings

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod candles;
mod error;
mod i18n;
mod query;
mod route;
mod session;
#[cfg(test)]
mod testing;
mod view;

pub use candles::{candles_for_symbol, sort_chronologically};
pub use error::{LoadError, RouteError, Subject};
pub use i18n::{Message, translate_type, type_label};
pub use query::{
    FilterState, Filterable, PAGE_SIZE, Page, PageState, filter_and_paginate, filter_records,
    paginate,
};
pub use route::Route;
pub use session::Session;
pub use view::{Binding, CandleView, DetailView, ListView, ViewState};
