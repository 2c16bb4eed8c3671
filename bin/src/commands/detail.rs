//! Detail command implementation.

use crate::config::App;
use crate::display::{load_failure, print_detail, wait_for_load};
use anyhow::Result;
use bourse_lib::prelude::*;

/// Show the detail record of one instrument.
pub(crate) async fn show_detail(app: &App, symbol: Symbol) -> Result<()> {
    let mut view = DetailView::new(app.session.clone());
    wait_for_load(view.navigate(symbol), app.language, app.quiet).await?;

    match view.state() {
        ViewState::Success(instrument) => {
            print_detail(&instrument, app.language);
            Ok(())
        }
        other => Err(load_failure(&other, app.language)),
    }
}
