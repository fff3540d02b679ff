//! Frontend Models
//!
//! Item shapes come from the core crate; this module adds UI-only state.

pub use realtime_items_core::{ItemForm, ItemRow};

/// Which item dialog is open
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    Closed,
    Create,
    /// Editing `ListState::selected_item`
    Edit,
}
