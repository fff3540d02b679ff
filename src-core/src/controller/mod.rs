//! List Controller
//!
//! `ListState` holds what the view shows; `ItemService` does the I/O.
//! A refresh is `begin_fetch` → `fetch_page` → `finish_fetch`, so the state
//! can live in whatever reactive container the UI uses.

mod item_service;
mod list_state;

#[cfg(test)]
mod tests;

pub use item_service::ItemService;
pub use list_state::{FetchRequest, FetchTicket, ListState, Page};
