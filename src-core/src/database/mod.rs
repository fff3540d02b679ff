//! Database Layer
//!
//! Store client abstractions and implementations.

mod config;
mod memory;
mod push_id;
mod reference;
mod rest;
mod traits;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::domain::DomainResult;

pub use config::{
    DatabaseConfig, ENV_AUTH_TOKEN, ENV_COLLECTION, ENV_DATABASE_URL, ENV_PROJECT_ID, ENV_REGION,
};
pub use memory::MemoryDatabase;
pub use push_id::PushIdGenerator;
pub use reference::Reference;
pub use rest::RestDatabase;
pub use traits::{Database, Snapshot};

/// The store the app was configured with
#[derive(Debug, Clone)]
pub enum Backend {
    Rest(RestDatabase),
    Memory(MemoryDatabase),
}

impl Backend {
    /// Remote store when a URL can be resolved, otherwise an empty
    /// in-memory store.
    pub fn from_config(config: &DatabaseConfig) -> DomainResult<Self> {
        if config.is_remote() {
            let db = RestDatabase::new(config)?;
            log::info!("Using realtime database at {}", db.base_url());
            Ok(Backend::Rest(db))
        } else {
            log::warn!("No database configured, running on an in-memory store");
            Ok(Backend::Memory(MemoryDatabase::new()))
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Backend::Rest(_))
    }
}

#[async_trait(?Send)]
impl Database for Backend {
    async fn get(&self, reference: &Reference) -> DomainResult<Option<Value>> {
        match self {
            Backend::Rest(db) => db.get(reference).await,
            Backend::Memory(db) => db.get(reference).await,
        }
    }

    async fn limit_to_last(&self, reference: &Reference, limit: usize) -> DomainResult<Vec<Snapshot>> {
        match self {
            Backend::Rest(db) => db.limit_to_last(reference, limit).await,
            Backend::Memory(db) => db.limit_to_last(reference, limit).await,
        }
    }

    async fn count_children(&self, reference: &Reference) -> DomainResult<usize> {
        match self {
            Backend::Rest(db) => db.count_children(reference).await,
            Backend::Memory(db) => db.count_children(reference).await,
        }
    }

    async fn push(&self, reference: &Reference, value: Value) -> DomainResult<String> {
        match self {
            Backend::Rest(db) => db.push(reference, value).await,
            Backend::Memory(db) => db.push(reference, value).await,
        }
    }

    async fn update(&self, reference: &Reference, patch: Map<String, Value>) -> DomainResult<()> {
        match self {
            Backend::Rest(db) => db.update(reference, patch).await,
            Backend::Memory(db) => db.update(reference, patch).await,
        }
    }

    async fn remove(&self, reference: &Reference) -> DomainResult<()> {
        match self {
            Backend::Rest(db) => db.remove(reference).await,
            Backend::Memory(db) => db.remove(reference).await,
        }
    }
}
