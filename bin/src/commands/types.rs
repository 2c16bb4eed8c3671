//! Types command: the sidebar of known instrument types.

use crate::config::App;
use bourse_lib::prelude::*;
use bourse_lib::type_label;

/// Print every known instrument type with its filter alias.
pub(crate) fn list_types(app: &App) {
    println!(
        "{:<12} {:<28} {}",
        "ALIAS",
        Message::Type.text(app.language).to_uppercase(),
        Message::FilterByType.text(app.language)
    );
    println!("{}", "-".repeat(70));

    println!("{:<12} {:<28}", "all", Message::All.text(app.language));
    for kind in InstrumentType::ALL {
        println!(
            "{:<12} {:<28} bourse list -t {}",
            kind.alias(),
            type_label(kind, app.language),
            kind.alias()
        );
    }
}
