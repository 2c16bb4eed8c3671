//! Terminal rendering for the bourse CLI.

use anyhow::{Context, Result};
use bourse_lib::prelude::*;
use bourse_lib::{Page, translate_type};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Waits for a view load, showing a spinner unless `quiet`.
pub(crate) async fn wait_for_load(
    handle: JoinHandle<bool>,
    language: Language,
    quiet: bool,
) -> Result<()> {
    let spinner = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Invalid spinner template")?,
        );
        pb.set_message(Message::Loading.text(language));
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    };

    let committed = handle.await.context("Load task failed");
    spinner.finish_and_clear();

    if !committed? {
        tracing::debug!("load superseded before it finished");
    }
    Ok(())
}

/// Returns the value, or the translated "not available" label.
pub(crate) fn or_na(value: Option<&str>, language: Language) -> String {
    value
        .filter(|v| !v.is_empty())
        .map_or_else(|| Message::NotAvailable.text(language).to_string(), ToString::to_string)
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        value.to_string()
    } else {
        let mut cut: String = value.chars().take(width.saturating_sub(3)).collect();
        cut.push_str("...");
        cut
    }
}

fn header(message: Message, language: Language) -> String {
    message.text(language).to_uppercase()
}

/// Prints one page of the instrument list.
pub(crate) fn print_instrument_page(page: &Page<Instrument>, language: Language) {
    if page.total_items == 0 {
        println!("{}", Message::NoData.text(language));
        return;
    }

    println!(
        "{:<10} {:<32} {:<28} {:<16} {:<8}",
        header(Message::Symbol, language),
        header(Message::Name, language),
        header(Message::Type, language),
        header(Message::Country, language),
        header(Message::Currency, language),
    );
    println!("{}", "-".repeat(98));

    for instrument in &page.items {
        let kind = instrument
            .kind
            .as_deref()
            .map(|raw| translate_type(raw, language));
        println!(
            "{:<10} {:<32} {:<28} {:<16} {:<8}",
            instrument.symbol,
            truncate(&or_na(instrument.name.as_deref(), language), 32),
            truncate(&or_na(kind.as_deref(), language), 28),
            truncate(&or_na(instrument.country_label(), language), 16),
            or_na(instrument.currency.as_deref(), language),
        );
    }

    print_page_footer(page, language);
}

/// Prints the detail record of one instrument.
pub(crate) fn print_detail(instrument: &Instrument, language: Language) {
    let kind = instrument
        .kind
        .as_deref()
        .map(|raw| translate_type(raw, language));

    let rows = [
        (Message::Name, instrument.name.clone()),
        (Message::Symbol, Some(instrument.symbol.clone())),
        (Message::Type, kind),
        (Message::Country, instrument.country_label().map(str::to_string)),
        (Message::CountryIso, instrument.country_iso.clone()),
        (Message::Currency, instrument.currency.clone()),
        (Message::Isin, instrument.isin.clone()),
        (Message::Exchange, instrument.exchange.clone()),
        (Message::Code, instrument.code.clone()),
        (Message::ValidUntil, instrument.valid_until.clone()),
        (Message::CompanyWebsite, instrument.company_url().map(str::to_string)),
    ];

    println!("{}: {}", Message::Details.text(language), instrument);
    println!("{}", "-".repeat(50));
    for (label, value) in rows {
        println!(
            "{:<20} {}",
            format!("{}:", label.text(language)),
            or_na(value.as_deref(), language)
        );
    }
    println!(
        "\n{}: bourse candle {}",
        Message::ViewCandleData.text(language),
        instrument.symbol
    );
}

/// Prints one page of a candle series.
pub(crate) fn print_candle_page(symbol: &Symbol, page: &Page<Candle>, language: Language) {
    println!("{} {}", Message::CandleDataFor.text(language), symbol);

    if page.total_items == 0 {
        println!("{}", Message::NoCandleData.text(language));
        return;
    }

    println!(
        "{:<20} {:>12} {:>12} {:>12} {:>12} {:>14}",
        header(Message::Date, language),
        header(Message::Open, language),
        header(Message::High, language),
        header(Message::Low, language),
        header(Message::Close, language),
        header(Message::Volume, language),
    );
    println!("{}", "-".repeat(87));

    for candle in &page.items {
        println!(
            "{:<20} {:>12.2} {:>12.2} {:>12.2} {:>12.2} {:>14.2}",
            candle.date_time.format("%Y-%m-%d %H:%M"),
            candle.start_price,
            candle.highest_price,
            candle.lowest_price,
            candle.end_price,
            candle.volume,
        );
    }

    print_page_footer(page, language);
}

fn print_page_footer<T>(page: &Page<T>, language: Language) {
    println!(
        "\n{} {}/{} ({})",
        Message::Page.text(language),
        page.page,
        page.total_pages,
        page.total_items
    );
}

/// Turns a failed view state into a user-facing error.
pub(crate) fn load_failure<T>(state: &ViewState<T>, language: Language) -> anyhow::Error {
    match state {
        ViewState::Error(error) => {
            tracing::debug!(%error, "load failed");
            anyhow::anyhow!(error.user_message(language))
        }
        ViewState::Idle | ViewState::Loading | ViewState::Success(_) => {
            anyhow::anyhow!(Message::UnexpectedError.text(language))
        }
    }
}
