//! Item records read from data files and the items built from them.

use item_core::{GameItem, ItemMetadata};
use serde::{Deserialize, Serialize};

/// One catalog entry as written in `items.ron`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    /// Type tag, e.g. `(O)` for objects or `(W)` for weapons.
    pub item_type: String,
    pub id: String,
    pub name: String,
    /// Localized name. Falls back to `name` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl ItemRecord {
    pub fn new(item_type: impl Into<String>, id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            item_type: item_type.into(),
            id: id.into(),
            name: name.into(),
            display_name: None,
        }
    }

    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }
}

/// Concrete item instance produced from an [`ItemRecord`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentItem {
    qualified_id: String,
    name: String,
    display_name: String,
}

impl ContentItem {
    /// Builds an instance for the entry described by `meta`.
    pub fn from_record(meta: &ItemMetadata, record: &ItemRecord) -> Self {
        let display_name = record
            .display_name
            .clone()
            .unwrap_or_else(|| record.name.clone());
        Self {
            qualified_id: meta.qualified_id().to_string(),
            name: record.name.clone(),
            display_name,
        }
    }

    pub fn qualified_id(&self) -> &str {
        &self.qualified_id
    }
}

impl GameItem for ContentItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn display_name(&self) -> &str {
        &self.display_name
    }
}
