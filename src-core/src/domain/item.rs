//! Item Entity
//!
//! A named record with a description, stored under a collection path.
//! The store key doubles as the item id and never travels in a payload.

use std::cmp::Reverse;

use chrono::TimeZone;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::entity::{DomainError, DomainResult, Entity};
use super::timestamp::{format_timestamp, format_timestamp_in};

/// A stored item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Store key, filled in from the snapshot key
    #[serde(skip)]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,
    /// Epoch millis, set once on creation
    #[serde(default, deserialize_with = "lenient_millis", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    /// Epoch millis, set on every edit
    #[serde(default, deserialize_with = "lenient_millis", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

/// Other writers may store any JSON here; non-strings are shown as JSON text
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Integer or float millis, or a numeric string; anything else counts as unset
fn lenient_millis<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

impl Item {
    /// Materialize an item from a child key and its stored value
    pub fn from_snapshot(key: &str, value: Value) -> DomainResult<Self> {
        if !value.is_object() {
            return Err(DomainError::Serialization(format!(
                "item {} is not an object",
                key
            )));
        }
        let mut item: Item = serde_json::from_value(value)?;
        item.id = key.to_string();
        Ok(item)
    }

    /// Display row with timestamps in the local zone
    pub fn to_row(&self) -> ItemRow {
        ItemRow {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            created_at: format_timestamp(self.created_at),
            updated_at: format_timestamp(self.updated_at),
        }
    }

    /// Display row with timestamps in an explicit zone
    pub fn to_row_in<Tz>(&self, tz: &Tz) -> ItemRow
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        ItemRow {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            created_at: format_timestamp_in(self.created_at, tz),
            updated_at: format_timestamp_in(self.updated_at, tz),
        }
    }
}

impl Entity for Item {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Stable sort, newest `createdAt` first. Undated items go last.
pub fn sort_newest_first(items: &mut [Item]) {
    items.sort_by_key(|item| Reverse(item.created_at.unwrap_or(i64::MIN)));
}

/// An item as the table shows it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Column headers, in display order
pub const ITEM_COLUMNS: &[&str] = &["id", "name", "description", "createdAt", "updatedAt"];

impl ItemRow {
    /// Cell values in the same order as [`ITEM_COLUMNS`]
    pub fn cells(&self) -> [&str; 5] {
        [
            self.id.as_str(),
            self.name.as_str(),
            self.description.as_str(),
            self.created_at.as_str(),
            self.updated_at.as_str(),
        ]
    }
}

/// Editable fields of the create and edit forms
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemForm {
    pub name: String,
    pub description: String,
}

impl ItemForm {
    /// Blank model used to initialize and reset the create form
    pub fn blank() -> Self {
        Self::default()
    }

    /// Seed the edit form from a selected row
    pub fn from_row(row: &ItemRow) -> Self {
        Self {
            name: row.name.clone(),
            description: row.description.clone(),
        }
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidInput("name must not be empty".to_string()));
        }
        Ok(())
    }

    /// Payload for a push; `createdAt` is stamped here and never again
    pub fn into_new_item(self, now: i64) -> NewItem {
        NewItem {
            name: self.name,
            description: self.description,
            created_at: now,
        }
    }

    /// Payload for a merge; carries neither `id` nor `createdAt`
    pub fn into_patch(self, now: i64) -> ItemPatch {
        ItemPatch {
            name: self.name,
            description: self.description,
            updated_at: now,
        }
    }
}

/// Body of a create request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    pub name: String,
    pub description: String,
    pub created_at: i64,
}

/// Body of an update request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPatch {
    pub name: String,
    pub description: String,
    pub updated_at: i64,
}
