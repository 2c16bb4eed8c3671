//! Candle command implementation.

use crate::config::App;
use crate::display::{load_failure, print_candle_page, wait_for_load};
use anyhow::Result;
use bourse_lib::prelude::*;

/// Show one page of the candle series of an instrument.
pub(crate) async fn show_candles(app: &App, symbol: Symbol, page: usize) -> Result<()> {
    let mut view = CandleView::new(app.session.clone());
    wait_for_load(view.navigate(symbol.clone()), app.language, app.quiet).await?;
    view.set_page(page);

    let Some(visible) = view.visible() else {
        return Err(load_failure(&view.state(), app.language));
    };
    print_candle_page(&symbol, &visible, app.language);
    Ok(())
}
