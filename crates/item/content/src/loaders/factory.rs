//! Content factory for building item catalogs from data files.

use std::path::{Path, PathBuf};

use item_core::{FactoryError, ItemMetadata};

use crate::catalog::{CatalogBuilder, FailurePolicy, ItemCatalog};
use crate::config::CatalogSettings;
use crate::content_item::{ContentItem, ItemRecord};
use crate::loaders::{ConfigLoader, ItemLoader, LoadResult};

/// Content factory that loads item content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml   (optional)
/// └── items.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load catalog settings from `config.toml`, or defaults if the file is absent.
    pub fn load_settings(&self) -> LoadResult<CatalogSettings> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no catalog settings file");
            return Ok(CatalogSettings::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load item records from `items.ron`.
    pub fn load_records(&self) -> LoadResult<Vec<ItemRecord>> {
        let path = self.data_dir.join("items.ron");
        ItemLoader::load(&path)
    }

    /// Load `items.ron` and assemble its records into a catalog.
    ///
    /// Records that fail to construct are handled according to `policy`.
    pub fn load_catalog(&self, policy: FailurePolicy) -> LoadResult<ItemCatalog<ContentItem>> {
        let records = self.load_records()?;
        tracing::debug!(records = records.len(), %policy, "assembling item catalog");

        let mut builder = CatalogBuilder::new(policy);
        for record in records {
            let item_type = record.item_type.clone();
            let id = record.id.clone();
            builder.add(item_type, id, record_factory(record))?;
        }
        Ok(builder.build())
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

fn record_factory(
    record: ItemRecord,
) -> impl Fn(&ItemMetadata) -> Result<ContentItem, FactoryError> + Send + Sync + 'static {
    move |meta: &ItemMetadata| Ok(ContentItem::from_record(meta, &record))
}
