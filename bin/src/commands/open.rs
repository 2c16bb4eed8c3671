//! Open command: resolve a route path to its view.

use crate::config::App;
use anyhow::{Context, Result};
use bourse_lib::Route;

/// Open `/`, `/details/:symbol` or `/candle/:symbol`.
pub(crate) async fn open_route(app: &App, path: &str) -> Result<()> {
    let route: Route = path.parse().with_context(|| format!("Cannot open {path}"))?;
    tracing::debug!(%route, "opening route");

    match route {
        Route::List => super::list::list_instruments(app, None, None, 1).await,
        Route::Details(symbol) => super::detail::show_detail(app, symbol).await,
        Route::Candle(symbol) => super::candle::show_candles(app, symbol, 1).await,
    }
}
