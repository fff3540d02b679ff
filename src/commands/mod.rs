//! Frontend Commands
//!
//! Frontend handlers that run item operations against the store and feed
//! the outcome back into the app store, organized by domain.

mod item;

pub use item::*;
