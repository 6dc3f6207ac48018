//! Item record loader.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::content_item::ItemRecord;
use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalogFile {
    pub items: Vec<ItemRecord>,
}

/// Loader for item records from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item records from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing an `ItemCatalogFile`
    pub fn load(path: &Path) -> LoadResult<Vec<ItemRecord>> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse item catalog RON {}: {}", path.display(), e)
        })
    }

    /// Parse item records from RON text.
    pub fn parse(content: &str) -> LoadResult<Vec<ItemRecord>> {
        let catalog: ItemCatalogFile = ron::from_str(content)?;
        Ok(catalog.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_records_with_optional_display_name() {
        let records = ItemLoader::parse(
            r#"(
                items: [
                    (item_type: "(O)", id: "388", name: "Wood"),
                    (item_type: "(O)", id: "378", name: "Copper Ore", display_name: Some("Kupfererz")),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0], ItemRecord::new("(O)", "388", "Wood"));
        assert_eq!(records[1].display_name.as_deref(), Some("Kupfererz"));
    }

    #[test]
    fn rejects_malformed_catalog() {
        assert!(ItemLoader::parse("(items: [(id: \"388\")])").is_err());
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = ItemLoader::load(Path::new("/nonexistent/items.ron")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/items.ron"));
    }
}
