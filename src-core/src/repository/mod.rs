//! Repository Layer
//!
//! Collection access on top of the database client.

mod item_repo;
mod traits;
mod writes;


pub use item_repo::ItemRepository;
pub use traits::Repository;
pub use writes::{create_item, remove_item, update_item};
