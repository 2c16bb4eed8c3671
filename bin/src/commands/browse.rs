//! Interactive browser.
//!
//! Walks the three routes with `inquire` prompts: the list opens a detail
//! view, the detail view opens the candle view, and each screen can go back.
//! Esc on the list quits; Esc elsewhere goes back one screen. Prompts block
//! on the terminal, so each one runs on the blocking thread pool.

use crate::config::App;
use crate::display::{
    print_candle_page, print_detail, print_instrument_page, wait_for_load,
};
use anyhow::{Context, Result};
use bourse_lib::prelude::*;
use bourse_lib::{save_language, type_label};
use inquire::{InquireError, Select, Text};

/// A prompt option carrying its action.
struct Choice<A> {
    action: A,
    label: String,
}

impl<A> Choice<A> {
    fn new(action: A, label: impl Into<String>) -> Self {
        Self {
            action,
            label: label.into(),
        }
    }
}

impl<A> std::fmt::Display for Choice<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

enum Step {
    Stay,
    Go(Route),
    Quit,
}

enum ListAction {
    Open(Symbol),
    Next,
    Prev,
    Search,
    Filter,
    Refresh,
    Language,
    Quit,
}

enum DetailAction {
    Candles(Symbol),
    Retry,
    Back,
    Quit,
}

enum CandleAction {
    Next,
    Prev,
    Retry,
    Details(Symbol),
    List,
    Quit,
}

/// Maps Esc and Ctrl-C to `None`.
fn answered<T>(result: Result<T, InquireError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e).context("Prompt failed"),
    }
}

/// Runs a blocking prompt off the async runtime.
async fn ask<T, F>(prompt: F) -> Result<Option<T>>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, InquireError> + Send + 'static,
{
    let result = tokio::task::spawn_blocking(prompt)
        .await
        .context("Prompt task failed")?;
    answered(result)
}

async fn choose<A: Send + 'static>(prompt: &str, options: Vec<Choice<A>>) -> Result<Option<A>> {
    let prompt = prompt.to_string();
    let selection = ask(move || Select::new(&prompt, options).with_page_size(12).prompt()).await?;
    Ok(selection.map(|choice| choice.action))
}

/// Run the interactive browser starting at the instrument list.
pub(crate) async fn browse(app: &App) -> Result<()> {
    let mut language = app.language;
    let mut list = ListView::new(app.session.clone());
    let mut detail = DetailView::new(app.session.clone());
    let mut candles = CandleView::new(app.session.clone());
    let mut route = Route::List;

    wait_for_load(list.mount(), language, app.quiet).await?;

    loop {
        println!();
        let step = match &route {
            Route::List => list_screen(app, &mut list, &mut language).await?,
            Route::Details(_) => detail_screen(app, &mut detail, language).await?,
            Route::Candle(_) => candle_screen(app, &mut candles, language).await?,
        };

        match step {
            Step::Stay => {}
            Step::Quit => return Ok(()),
            Step::Go(next) => {
                match &next {
                    Route::List => {}
                    Route::Details(symbol) => {
                        wait_for_load(detail.navigate(symbol.clone()), language, app.quiet)
                            .await?;
                    }
                    Route::Candle(symbol) => {
                        wait_for_load(candles.navigate(symbol.clone()), language, app.quiet)
                            .await?;
                    }
                }
                tracing::debug!(route = %next, "navigated");
                route = next;
            }
        }
    }
}

async fn list_screen(app: &App, list: &mut ListView, language: &mut Language) -> Result<Step> {
    let lang = *language;
    let visible = list.visible();
    let mut options = Vec::new();

    match &visible {
        Some(page) => {
            print_instrument_page(page, lang);
            for instrument in &page.items {
                options.push(Choice::new(
                    ListAction::Open(Symbol::new(&instrument.symbol)),
                    instrument.to_string(),
                ));
            }
            if page.has_next() {
                options.push(Choice::new(ListAction::Next, Message::NextPage.text(lang)));
            }
            if page.has_prev() {
                options.push(Choice::new(ListAction::Prev, Message::PreviousPage.text(lang)));
            }
        }
        None => {
            if let Some(error) = list.state().error() {
                eprintln!("{}", error.user_message(lang));
            }
        }
    }

    options.push(Choice::new(ListAction::Search, Message::SearchPlaceholder.text(lang)));
    options.push(Choice::new(ListAction::Filter, Message::FilterByType.text(lang)));
    options.push(Choice::new(ListAction::Refresh, Message::Refresh.text(lang)));
    options.push(Choice::new(ListAction::Language, Message::Language.text(lang)));
    options.push(Choice::new(ListAction::Quit, Message::Quit.text(lang)));

    let Some(action) = choose(Message::DataList.text(lang), options).await? else {
        return Ok(Step::Quit);
    };

    match action {
        ListAction::Open(symbol) => return Ok(Step::Go(Route::Details(symbol))),
        ListAction::Next => {
            list.next_page();
        }
        ListAction::Prev => {
            list.prev_page();
        }
        ListAction::Search => {
            let current = list.filter().search_term.clone();
            let label = Message::SearchPlaceholder.text(lang);
            let term = ask(move || Text::new(label).with_initial_value(&current).prompt()).await?;
            if let Some(term) = term {
                list.set_search(term.trim());
            }
        }
        ListAction::Filter => {
            let mut kinds = vec![Choice::new(None, Message::All.text(lang))];
            kinds.extend(
                InstrumentType::ALL
                    .into_iter()
                    .map(|kind| Choice::new(Some(kind), type_label(kind, lang))),
            );
            if let Some(selected) = choose(Message::FilterByType.text(lang), kinds).await? {
                list.set_type(selected.map(|kind| kind.as_str().to_string()));
            }
        }
        ListAction::Refresh => {
            wait_for_load(list.refresh(), lang, app.quiet).await?;
        }
        ListAction::Language => {
            let next = match lang {
                Language::En => Language::De,
                Language::De => Language::En,
            };
            if let Err(e) = save_language(&app.store, next) {
                tracing::warn!(error = %e, "failed to save language preference");
            }
            *language = next;
        }
        ListAction::Quit => return Ok(Step::Quit),
    }

    Ok(Step::Stay)
}

async fn detail_screen(app: &App, detail: &mut DetailView, language: Language) -> Result<Step> {
    let mut options = Vec::new();

    match detail.state() {
        ViewState::Success(instrument) => {
            print_detail(&instrument, language);
            options.push(Choice::new(
                DetailAction::Candles(Symbol::new(instrument.symbol)),
                Message::ViewCandleData.text(language),
            ));
        }
        ViewState::Error(error) => {
            eprintln!("{}", error.user_message(language));
            options.push(Choice::new(DetailAction::Retry, Message::Retry.text(language)));
        }
        ViewState::Idle | ViewState::Loading => {}
    }
    options.push(Choice::new(DetailAction::Back, Message::Back.text(language)));
    options.push(Choice::new(DetailAction::Quit, Message::Quit.text(language)));

    let title = detail
        .symbol()
        .map_or_else(|| Message::Details.text(language).to_string(), ToString::to_string);

    let step = match choose(&title, options).await? {
        Some(DetailAction::Candles(symbol)) => Step::Go(Route::Candle(symbol)),
        Some(DetailAction::Retry) => {
            if let Some(handle) = detail.retry() {
                wait_for_load(handle, language, app.quiet).await?;
            }
            Step::Stay
        }
        Some(DetailAction::Back) | None => Step::Go(Route::List),
        Some(DetailAction::Quit) => Step::Quit,
    };
    Ok(step)
}

async fn candle_screen(app: &App, candles: &mut CandleView, language: Language) -> Result<Step> {
    let Some(symbol) = candles.symbol().cloned() else {
        return Ok(Step::Go(Route::List));
    };
    let mut options = Vec::new();

    match candles.visible() {
        Some(page) => {
            print_candle_page(&symbol, &page, language);
            if page.has_next() {
                options.push(Choice::new(CandleAction::Next, Message::NextPage.text(language)));
            }
            if page.has_prev() {
                options.push(Choice::new(
                    CandleAction::Prev,
                    Message::PreviousPage.text(language),
                ));
            }
        }
        None => {
            if let Some(error) = candles.state().error() {
                eprintln!("{}", error.user_message(language));
            }
            options.push(Choice::new(CandleAction::Retry, Message::Retry.text(language)));
        }
    }
    options.push(Choice::new(
        CandleAction::Details(symbol.clone()),
        Message::Back.text(language),
    ));
    options.push(Choice::new(CandleAction::List, Message::DataList.text(language)));
    options.push(Choice::new(CandleAction::Quit, Message::Quit.text(language)));

    let title = format!("{} {symbol}", Message::CandleDataFor.text(language));
    let step = match choose(&title, options).await? {
        Some(CandleAction::Next) => {
            candles.set_page(candles.current_page() + 1);
            Step::Stay
        }
        Some(CandleAction::Prev) => {
            candles.set_page(candles.current_page().saturating_sub(1));
            Step::Stay
        }
        Some(CandleAction::Retry) => {
            if let Some(handle) = candles.retry() {
                wait_for_load(handle, language, app.quiet).await?;
            }
            Step::Stay
        }
        Some(CandleAction::Details(symbol)) => Step::Go(Route::Details(symbol)),
        None => Step::Go(Route::Details(symbol)),
        Some(CandleAction::List) => Step::Go(Route::List),
        Some(CandleAction::Quit) => Step::Quit,
    };
    Ok(step)
}
