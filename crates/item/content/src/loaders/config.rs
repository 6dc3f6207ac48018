//! Catalog settings loader.

use std::path::Path;

use crate::config::CatalogSettings;
use crate::loaders::{LoadResult, read_file};

/// Loader for catalog settings from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> LoadResult<CatalogSettings> {
        let content = read_file(path)?;
        let settings: CatalogSettings = toml::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse settings TOML {}: {}", path.display(), e)
        })?;

        Ok(settings)
    }
}
