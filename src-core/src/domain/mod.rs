//! Domain Layer
//!
//! Contains the item entity and core abstractions.
//! This layer has no I/O; it only depends on serde and chrono.

mod entity;
mod item;
mod timestamp;

pub use entity::{DomainError, DomainResult, Entity};
pub use item::{sort_newest_first, Item, ItemForm, ItemPatch, ItemRow, NewItem, ITEM_COLUMNS};
pub use timestamp::{format_timestamp, format_timestamp_in, now_millis, DISPLAY_FORMAT};
