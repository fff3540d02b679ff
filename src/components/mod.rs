//! UI Components
//!
//! Leptos components for the item table page.

mod delete_confirm_button;
mod error_banner;
mod item_modal;
mod item_table;
mod pagination_bar;

pub use delete_confirm_button::DeleteConfirmButton;
pub use error_banner::ErrorBanner;
pub use item_modal::ItemModal;
pub use item_table::ItemTable;
pub use pagination_bar::PaginationBar;
