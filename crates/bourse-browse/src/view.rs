//! View bindings and their load state machine.
//!
//! Every view moves through `Idle -> Loading -> Success | Error`. A
//! [`Binding`] owns that state together with a generation counter: each load
//! takes a ticket when it starts and may only commit while its ticket is
//! still the newest. A response for a symbol the user already navigated away
//! from is therefore dropped instead of overwriting the current view.

use crate::{
    FilterState, LoadError, Page, PageState, Session, filter_and_paginate, sort_chronologically,
};
use bourse_cache::CacheMode;
use bourse_types::{Candle, Instrument, Symbol};
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::task::JoinHandle;

/// Load state of a view.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState<T> {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A load is in flight.
    Loading,
    /// The last load succeeded.
    Success(T),
    /// The last load failed.
    Error(LoadError),
}

impl<T> ViewState<T> {
    /// Returns true while a load is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the loaded value, if the last load succeeded.
    #[must_use]
    pub const fn success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the error, if the last load failed.
    #[must_use]
    pub const fn error(&self) -> Option<&LoadError> {
        match self {
            Self::Error(error) => Some(error),
            _ => None,
        }
    }
}

impl<T> From<Result<T, LoadError>> for ViewState<T> {
    fn from(result: Result<T, LoadError>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Error(error),
        }
    }
}

#[derive(Debug)]
struct Slot<T> {
    generation: u64,
    committed: u64,
    state: ViewState<T>,
}

/// Shared view state guarded by a generation counter.
///
/// Clones share the same state.
#[derive(Debug)]
pub struct Binding<T> {
    slot: Arc<Mutex<Slot<T>>>,
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<T> Default for Binding<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Binding<T> {
    /// Creates an idle binding at generation 0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot {
                generation: 0,
                committed: 0,
                state: ViewState::Idle,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Slot<T>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the current generation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    /// Returns the ticket of the last committed result, 0 before any commit.
    #[must_use]
    pub fn committed(&self) -> u64 {
        self.lock().committed
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn state(&self) -> ViewState<T>
    where
        T: Clone,
    {
        self.lock().state.clone()
    }

    /// Runs `f` against the current state without cloning it.
    pub fn with_state<R>(&self, f: impl FnOnce(&ViewState<T>) -> R) -> R {
        f(&self.lock().state)
    }

    /// Like [`with_state`](Self::with_state), also passing the ticket the
    /// state was committed with.
    pub fn with_committed<R>(&self, f: impl FnOnce(&ViewState<T>, u64) -> R) -> R {
        let slot = self.lock();
        f(&slot.state, slot.committed)
    }

    /// Starts a new load: bumps the generation, enters `Loading`, and returns
    /// the ticket the load must commit with.
    pub fn begin(&self) -> u64 {
        let mut slot = self.lock();
        slot.generation += 1;
        slot.state = ViewState::Loading;
        slot.generation
    }

    /// Commits `result` if `ticket` is still the current generation.
    ///
    /// Returns false, leaving the state untouched, for a stale ticket.
    pub fn commit(&self, ticket: u64, result: Result<T, LoadError>) -> bool {
        let mut slot = self.lock();
        if slot.generation != ticket {
            tracing::debug!(
                ticket,
                current = slot.generation,
                "dropping stale load result"
            );
            return false;
        }
        slot.state = result.into();
        slot.committed = ticket;
        true
    }
}

impl<T: Send + 'static> Binding<T> {
    /// Starts a load and runs `load` on the tokio runtime.
    ///
    /// The returned handle resolves to whether the result was committed.
    pub fn spawn<F>(&self, load: F) -> JoinHandle<bool>
    where
        F: Future<Output = Result<T, LoadError>> + Send + 'static,
    {
        let ticket = self.begin();
        let binding = self.clone();
        tokio::spawn(async move {
            let result = load.await;
            binding.commit(ticket, result)
        })
    }
}

/// Page position tied to the committed collection it was chosen on.
///
/// Once a different collection is committed the position reads as page 1.
#[derive(Debug, Clone, Copy, Default)]
struct Cursor {
    page: PageState,
    collection: u64,
}

impl Cursor {
    fn page(self, committed: u64) -> PageState {
        let mut page = self.page;
        if self.collection != committed {
            page.reset();
        }
        page
    }

    fn follow(&mut self, committed: u64) -> &mut PageState {
        if self.collection != committed {
            self.page.reset();
            self.collection = committed;
        }
        &mut self.page
    }
}

/// The searchable, filterable, paginated instrument list (`/`).
#[derive(Debug)]
pub struct ListView {
    session: Session,
    binding: Binding<Vec<Instrument>>,
    filter: FilterState,
    cursor: Cursor,
}

impl ListView {
    /// Creates an idle list view.
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self {
            session,
            binding: Binding::new(),
            filter: FilterState::default(),
            cursor: Cursor::default(),
        }
    }

    /// Loads the list, serving a fresh cache entry if there is one. The page
    /// returns to 1 once the new collection lands.
    pub fn mount(&mut self) -> JoinHandle<bool> {
        self.load(self.session.clone())
    }

    /// Reloads the list from the data source, bypassing the cache.
    pub fn refresh(&mut self) -> JoinHandle<bool> {
        self.load(self.session.clone().with_mode(CacheMode::Refresh))
    }

    fn load(&mut self, session: Session) -> JoinHandle<bool> {
        self.binding
            .spawn(async move { session.instruments().await })
    }

    /// Sets the search term and returns to page 1.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.filter.search_term = term.into();
        self.page_mut().reset();
    }

    /// Selects a type (or every type with `None`) and returns to page 1.
    pub fn set_type(&mut self, selected: Option<String>) {
        self.filter.set_type(selected);
        self.page_mut().reset();
    }

    /// Jumps to `page`.
    pub fn set_page(&mut self, page: usize) {
        self.page_mut().set(page);
    }

    /// Moves to the next page if there is one.
    pub fn next_page(&mut self) -> bool {
        let total_pages = self.visible().map_or(0, |page| page.total_pages);
        self.page_mut().next(total_pages)
    }

    /// Moves to the previous page if there is one.
    pub fn prev_page(&mut self) -> bool {
        self.page_mut().prev()
    }

    fn page_mut(&mut self) -> &mut PageState {
        self.cursor.follow(self.binding.committed())
    }

    /// Returns the active filter.
    #[must_use]
    pub const fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Returns the current page number.
    #[must_use]
    pub fn current_page(&self) -> usize {
        self.cursor.page(self.binding.committed()).current()
    }

    /// Returns the current load state.
    #[must_use]
    pub fn state(&self) -> ViewState<Vec<Instrument>> {
        self.binding.state()
    }

    /// Returns the current page of the filtered list once loaded.
    #[must_use]
    pub fn visible(&self) -> Option<Page<Instrument>> {
        self.binding.with_committed(|state, committed| {
            let page = self.cursor.page(committed);
            state.success().map(|records| {
                filter_and_paginate(records, &self.filter, page.current(), page.page_size())
                .cloned()
            })
        })
    }
}

/// The detail view of one instrument (`/details/:symbol`).
#[derive(Debug)]
pub struct DetailView {
    session: Session,
    binding: Binding<Instrument>,
    symbol: Option<Symbol>,
}

impl DetailView {
    /// Creates an idle detail view.
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self {
            session,
            binding: Binding::new(),
            symbol: None,
        }
    }

    /// Shows `symbol`, superseding any load still in flight.
    pub fn navigate(&mut self, symbol: Symbol) -> JoinHandle<bool> {
        self.symbol = Some(symbol.clone());
        let session = self.session.clone();
        self.binding
            .spawn(async move { session.instrument_detail(&symbol).await })
    }

    /// Loads the current symbol again. Returns `None` before the first
    /// navigation.
    pub fn retry(&mut self) -> Option<JoinHandle<bool>> {
        let symbol = self.symbol.clone()?;
        Some(self.navigate(symbol))
    }

    /// Returns the symbol being shown.
    #[must_use]
    pub const fn symbol(&self) -> Option<&Symbol> {
        self.symbol.as_ref()
    }

    /// Returns the current load state.
    #[must_use]
    pub fn state(&self) -> ViewState<Instrument> {
        self.binding.state()
    }
}

/// The paginated candle view of one instrument (`/candle/:symbol`).
#[derive(Debug)]
pub struct CandleView {
    session: Session,
    binding: Binding<Vec<Candle>>,
    symbol: Option<Symbol>,
    cursor: Cursor,
}

impl CandleView {
    /// Creates an idle candle view.
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self {
            session,
            binding: Binding::new(),
            symbol: None,
            cursor: Cursor::default(),
        }
    }

    /// Shows `symbol` from page 1, superseding any load still in flight.
    pub fn navigate(&mut self, symbol: Symbol) -> JoinHandle<bool> {
        self.symbol = Some(symbol.clone());
        let session = self.session.clone();
        self.binding.spawn(async move {
            let mut series = session.candles(&symbol).await?;
            sort_chronologically(&mut series);
            Ok(series)
        })
    }

    /// Loads the current symbol again. Returns `None` before the first
    /// navigation.
    pub fn retry(&mut self) -> Option<JoinHandle<bool>> {
        let symbol = self.symbol.clone()?;
        Some(self.navigate(symbol))
    }

    /// Jumps to `page`.
    pub fn set_page(&mut self, page: usize) {
        self.cursor.follow(self.binding.committed()).set(page);
    }

    /// Returns the symbol being shown.
    #[must_use]
    pub const fn symbol(&self) -> Option<&Symbol> {
        self.symbol.as_ref()
    }

    /// Returns the current page number.
    #[must_use]
    pub fn current_page(&self) -> usize {
        self.cursor.page(self.binding.committed()).current()
    }

    /// Returns the current load state.
    #[must_use]
    pub fn state(&self) -> ViewState<Vec<Candle>> {
        self.binding.state()
    }

    /// Returns the current page of the series once loaded.
    #[must_use]
    pub fn visible(&self) -> Option<Page<Candle>> {
        self.binding.with_committed(|state, committed| {
            let page = self.cursor.page(committed);
            state.success().map(|series| {
                filter_and_paginate(
                    series,
                    &FilterState::default(),
                    page.current(),
                    page.page_size(),
                )
                .cloned()
            })
        })
    }
}
