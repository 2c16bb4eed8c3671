//! Filtering and pagination over record collections.

use bourse_types::{Candle, Instrument};

/// Number of records shown per page.
pub const PAGE_SIZE: usize = 6;

/// Fields the list filter looks at.
pub trait Filterable {
    /// Name matched by the search term.
    fn display_name(&self) -> Option<&str>;

    /// Type label matched by the selected type.
    fn kind(&self) -> Option<&str>;
}

impl Filterable for Instrument {
    fn display_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }
}

impl Filterable for Candle {
    fn display_name(&self) -> Option<&str> {
        Some(&self.symbol)
    }

    fn kind(&self) -> Option<&str> {
        None
    }
}

impl<T: Filterable + ?Sized> Filterable for &T {
    fn display_name(&self) -> Option<&str> {
        (**self).display_name()
    }

    fn kind(&self) -> Option<&str> {
        (**self).kind()
    }
}

/// Search term and selected type of the list view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Case-insensitive substring matched against the display name.
    pub search_term: String,
    /// Type label a record must have; `None` selects every type.
    pub selected_type: Option<String>,
}

impl FilterState {
    /// Creates a filter that passes every record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search term.
    #[must_use]
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Sets the selected type. An empty label selects every type.
    #[must_use]
    pub fn with_type(mut self, selected: impl Into<String>) -> Self {
        self.set_type(Some(selected.into()));
        self
    }

    /// Replaces the selected type. An empty label selects every type.
    pub fn set_type(&mut self, selected: Option<String>) {
        self.selected_type = selected.filter(|label| !label.is_empty());
    }

    /// Returns true if the filter passes every record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty() && self.selected_type.is_none()
    }

    /// Returns true if `record` passes both the type and the search filter.
    ///
    /// A record without a name or type never passes a non-empty filter on
    /// that field.
    #[must_use]
    pub fn matches<T: Filterable + ?Sized>(&self, record: &T) -> bool {
        let type_matches = self.selected_type.as_ref().is_none_or(|selected| {
            record
                .kind()
                .is_some_and(|kind| kind.to_lowercase() == selected.to_lowercase())
        });

        let search_matches = self.search_term.is_empty()
            || record.display_name().is_some_and(|name| {
                name.to_lowercase()
                    .contains(&self.search_term.to_lowercase())
            });

        type_matches && search_matches
    }
}

/// Current page of a paginated view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    current_page: usize,
    page_size: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current_page: 1,
            page_size: PAGE_SIZE,
        }
    }
}

impl PageState {
    /// Creates a page state on page 1 with the given size (minimum 1).
    #[must_use]
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Returns the 1-based current page.
    #[must_use]
    pub const fn current(&self) -> usize {
        self.current_page
    }

    /// Returns the page size.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Jumps to `page`; values below 1 select page 1.
    pub fn set(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    /// Returns to page 1.
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Advances one page if `total_pages` allows it. Returns true if moved.
    pub fn next(&mut self, total_pages: usize) -> bool {
        if self.current_page < total_pages {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Goes back one page unless on page 1. Returns true if moved.
    pub fn prev(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }
}

/// One page of a filtered collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Records on this page, in collection order.
    pub items: Vec<T>,
    /// The requested 1-based page.
    pub page: usize,
    /// Page size used to slice the collection.
    pub page_size: usize,
    /// Number of pages; 0 when nothing matched.
    pub total_pages: usize,
    /// Number of records that matched the filter.
    pub total_items: usize,
}

impl<T> Page<T> {
    /// Returns true if this page holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true if a later page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Returns true if an earlier page exists.
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Zero-based index of the first item on this page within the filtered
    /// collection.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }
}

impl<T: Clone> Page<&T> {
    /// Clones the borrowed records into an owned page.
    #[must_use]
    pub fn cloned(&self) -> Page<T> {
        Page {
            items: self.items.iter().map(|item| (*item).clone()).collect(),
            page: self.page,
            page_size: self.page_size,
            total_pages: self.total_pages,
            total_items: self.total_items,
        }
    }
}

/// Returns the records passing `filter`, in input order.
#[must_use]
pub fn filter_records<'a, T: Filterable>(records: &'a [T], filter: &FilterState) -> Vec<&'a T> {
    records.iter().filter(|record| filter.matches(*record)).collect()
}

/// Slices `items` into page `page` of size `page_size`.
///
/// Pages are 1-based. Page 0 and pages past the end yield no items. A page
/// size of 0 is treated as 1.
#[must_use]
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size);

    let start = page
        .checked_sub(1)
        .and_then(|index| index.checked_mul(page_size))
        .filter(|start| *start < total_items);

    let items = match start {
        Some(start) => items.into_iter().skip(start).take(page_size).collect(),
        None => Vec::new(),
    };

    Page {
        items,
        page,
        page_size,
        total_pages,
        total_items,
    }
}

/// Filters `records` and returns the requested page of the result.
///
/// Pure: the same inputs always produce the same page.
#[must_use]
pub fn filter_and_paginate<'a, T: Filterable>(
    records: &'a [T],
    filter: &FilterState,
    page: usize,
    page_size: usize,
) -> Page<&'a T> {
    paginate(filter_records(records, filter), page, page_size)
}
