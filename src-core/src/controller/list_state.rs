//! List State
//!
//! Everything the item table renders, plus the bookkeeping that decides
//! which fetch result is allowed to land.

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult, ItemRow};
use crate::pagination::{FetchWindow, Pagination};

/// One fetched page and the collection size seen by that fetch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub items: Vec<ItemRow>,
    pub total_items: usize,
}

/// Identifies one fetch; only the most recently issued ticket applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket(u64);

/// What a started fetch has to read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    pub ticket: FetchTicket,
    pub window: FetchWindow,
}

/// State of the item list view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListState {
    pub loading: bool,
    /// Rows of the current page, newest first
    pub items: Vec<ItemRow>,
    /// Row being edited
    pub selected_item: Option<ItemRow>,
    /// Last failure, shown until dismissed. A failed fetch is also
    /// cleared by the next successful one; a failed write is not.
    pub error: Option<String>,
    pub pagination: Pagination,
    latest_ticket: u64,
    error_from_fetch: bool,
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the list as loading and issue a ticket for the current window.
    /// Any fetch still in flight is superseded.
    pub fn begin_fetch(&mut self) -> FetchRequest {
        self.latest_ticket += 1;
        self.loading = true;
        FetchRequest {
            ticket: FetchTicket(self.latest_ticket),
            window: self.pagination.window(),
        }
    }

    /// Apply a fetch result if its ticket is still the latest one.
    ///
    /// On failure the previous rows stay on screen and the error is kept
    /// for display. Returns false when the result was superseded and dropped.
    pub fn finish_fetch(&mut self, ticket: FetchTicket, result: DomainResult<Page>) -> bool {
        if ticket.0 != self.latest_ticket {
            log::debug!("Dropping superseded fetch #{}", ticket.0);
            return false;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                if self.pagination.set_total_items(page.total_items) {
                    log::debug!(
                        "Page clamped to {} of {}",
                        self.pagination.current_page(),
                        self.pagination.page_count()
                    );
                }
                self.items = page.items;
                if self.error_from_fetch {
                    self.dismiss_error();
                }
            }
            Err(err) => {
                self.report_error(&err);
                self.error_from_fetch = true;
            }
        }
        true
    }

    /// Whether a fetch is still outstanding for `ticket`
    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.latest_ticket
    }

    /// Show a failed operation in the error banner
    pub fn report_error(&mut self, err: &DomainError) {
        log::error!("{}", err);
        self.error = Some(err.to_string());
        self.error_from_fetch = false;
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
        self.error_from_fetch = false;
    }

    pub fn select(&mut self, row: ItemRow) {
        self.selected_item = Some(row);
    }

    pub fn clear_selection(&mut self) {
        self.selected_item = None;
    }

    /// Page button clicked (zero-based index)
    pub fn go_to_page(&mut self, index: usize) {
        self.pagination.go_to_index(index);
    }

    /// Per-page selector changed; returns to page 1
    pub fn set_items_per_page(&mut self, items_per_page: usize) {
        self.pagination.set_items_per_page(items_per_page);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
