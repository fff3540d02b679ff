//! Connection Configuration
//!
//! Loaded once at start-up from `FIREBASE_*` variables. The browser build
//! bakes them in at compile time; native callers read the process env.

use serde::{Deserialize, Serialize};

use super::reference::Reference;

pub const ENV_DATABASE_URL: &str = "FIREBASE_DATABASE_URL";
pub const ENV_PROJECT_ID: &str = "FIREBASE_PROJECT_ID";
pub const ENV_REGION: &str = "FIREBASE_REGION";
pub const ENV_AUTH_TOKEN: &str = "FIREBASE_AUTH_TOKEN";
pub const ENV_COLLECTION: &str = "FIREBASE_COLLECTION";

const DEFAULT_REGION: &str = "europe-west1";
const DEFAULT_COLLECTION: &str = "items";

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

fn default_collection() -> String {
    DEFAULT_COLLECTION.to_string()
}

/// Where the store lives and which collection the app manages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Full database URL; wins over `project_id` when both are set
    #[serde(default)]
    pub database_url: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default = "default_region")]
    pub region: String,
    /// Sent as the `auth` query parameter
    #[serde(default)]
    pub auth_token: Option<String>,
    #[serde(default = "default_collection")]
    pub collection: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            project_id: None,
            region: default_region(),
            auth_token: None,
            collection: default_collection(),
        }
    }
}

impl DatabaseConfig {
    /// Build from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        Self {
            database_url: get(ENV_DATABASE_URL),
            project_id: get(ENV_PROJECT_ID),
            region: get(ENV_REGION).unwrap_or_else(default_region),
            auth_token: get(ENV_AUTH_TOKEN),
            collection: get(ENV_COLLECTION).unwrap_or_else(default_collection),
        }
    }

    /// Read the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Values captured when the crate was compiled
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| {
            let value = match key {
                ENV_DATABASE_URL => option_env!("FIREBASE_DATABASE_URL"),
                ENV_PROJECT_ID => option_env!("FIREBASE_PROJECT_ID"),
                ENV_REGION => option_env!("FIREBASE_REGION"),
                ENV_AUTH_TOKEN => option_env!("FIREBASE_AUTH_TOKEN"),
                ENV_COLLECTION => option_env!("FIREBASE_COLLECTION"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }

    /// Base URL of the store without trailing slash, if one is configured
    pub fn resolved_url(&self) -> Option<String> {
        if let Some(url) = &self.database_url {
            return Some(url.trim_end_matches('/').to_string());
        }
        self.project_id.as_ref().map(|project| {
            format!(
                "https://{}-default-rtdb.{}.firebasedatabase.app",
                project, self.region
            )
        })
    }

    pub fn is_remote(&self) -> bool {
        self.resolved_url().is_some()
    }

    /// Reference to the managed collection
    pub fn collection_ref(&self) -> Reference {
        Reference::new(&self.collection)
    }
}
