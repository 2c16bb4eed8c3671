//! List command implementation.
//!
//! Loads the instrument list through the cache and prints one filtered page.

use crate::config::App;
use crate::display::{load_failure, print_instrument_page, wait_for_load};
use anyhow::Result;
use bourse_lib::prelude::*;

/// Resolves a type argument: aliases and labels map to the data label,
/// `all` clears the filter, anything else is matched verbatim.
pub(crate) fn resolve_type(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("all") {
        return None;
    }
    Some(
        raw.parse::<InstrumentType>()
            .map_or_else(|_| raw.to_string(), |kind| kind.as_str().to_string()),
    )
}

/// List instruments with an optional search term and type filter.
pub(crate) async fn list_instruments(
    app: &App,
    search: Option<&str>,
    kind: Option<&str>,
    page: usize,
) -> Result<()> {
    let mut view = ListView::new(app.session.clone());
    wait_for_load(view.mount(), app.language, app.quiet).await?;

    view.set_search(search.unwrap_or_default());
    view.set_type(kind.and_then(resolve_type));
    view.set_page(page);

    let Some(visible) = view.visible() else {
        return Err(load_failure(&view.state(), app.language));
    };
    print_instrument_page(&visible, app.language);
    Ok(())
}
