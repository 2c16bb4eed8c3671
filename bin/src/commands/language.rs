//! Language command: show or persist the UI language.

use crate::config::App;
use anyhow::{Context, Result};
use bourse_lib::prelude::*;
use bourse_lib::save_language;

/// Print the active language, or save `language` as the new preference.
pub(crate) fn language(app: &App, language: Option<Language>) -> Result<()> {
    let Some(language) = language else {
        println!(
            "{}: {} ({})",
            Message::Language.text(app.language),
            app.language.display_name(),
            app.language.code()
        );
        return Ok(());
    };

    save_language(&app.store, language).context("Failed to save language preference")?;
    println!(
        "{}: {} ({})",
        Message::Language.text(language),
        language.display_name(),
        language.code()
    );
    Ok(())
}
