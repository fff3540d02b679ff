//! Realtime Items Core
//!
//! Layered architecture:
//! - domain: Item entity, forms, timestamps, errors
//! - database: Store client trait with REST and in-memory implementations
//! - repository: Collection access and the create/update/remove pass-throughs
//! - pagination: Page arithmetic over last-N windows
//! - controller: List state and the item operations behind the table

pub mod controller;
pub mod database;
pub mod domain;
pub mod pagination;
pub mod repository;

pub use controller::{FetchRequest, FetchTicket, ItemService, ListState, Page};
pub use database::{Backend, Database, DatabaseConfig, MemoryDatabase, Reference, RestDatabase};
pub use domain::{DomainError, DomainResult, Item, ItemForm, ItemRow};
pub use pagination::{page_count, FetchWindow, Pagination, PER_PAGE_OPTIONS};
