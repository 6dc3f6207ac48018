//! Catalog configuration structures.
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::catalog::FailurePolicy;

/// Optional settings read from `config.toml` in the data directory.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogSettings {
    pub failure_policy: Option<FailurePolicy>,
    pub search_limit: Option<usize>,
}

/// Configuration required to load and query an item catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogConfig {
    pub data_dir: PathBuf,
    pub failure_policy: FailurePolicy,
    pub search_limit: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            failure_policy: FailurePolicy::default(),
            search_limit: 20,
        }
    }
}

impl CatalogConfig {
    /// Resolve configuration: defaults, then `config.toml`, then environment.
    ///
    /// Environment variables:
    /// - `ITEM_DATA_DIR` - Directory containing `items.ron` (default: `data`)
    /// - `ITEM_FAILURE_POLICY` - `skip` or `abort` (default: skip)
    /// - `ITEM_SEARCH_LIMIT` - Maximum results to print (default: 20)
    ///
    /// `data_dir` takes precedence over `ITEM_DATA_DIR` when given.
    #[cfg(feature = "loaders")]
    pub fn resolve(data_dir: Option<PathBuf>) -> crate::loaders::LoadResult<Self> {
        Self::resolve_with(data_dir, |key| std::env::var(key).ok())
    }

    #[cfg(feature = "loaders")]
    fn resolve_with(
        data_dir: Option<PathBuf>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> crate::loaders::LoadResult<Self> {
        let data_dir = Self::resolve_data_dir(data_dir, &lookup);
        let settings = crate::loaders::ContentFactory::new(&data_dir).load_settings()?;

        let mut config = Self {
            data_dir,
            ..Self::default()
        };
        config.apply_settings(&settings);
        config.apply_policy_overrides(&lookup);
        Ok(config)
    }

    /// Data directory precedence: explicit argument, then `ITEM_DATA_DIR`, then default.
    #[cfg(feature = "loaders")]
    fn resolve_data_dir(
        data_dir: Option<PathBuf>,
        lookup: &impl Fn(&str) -> Option<String>,
    ) -> PathBuf {
        data_dir
            .or_else(|| lookup("ITEM_DATA_DIR").map(PathBuf::from))
            .unwrap_or_else(|| Self::default().data_dir)
    }

    /// Apply values from a settings file.
    pub fn apply_settings(&mut self, settings: &CatalogSettings) {
        if let Some(policy) = settings.failure_policy {
            self.failure_policy = policy;
        }
        if let Some(limit) = settings.search_limit {
            self.search_limit = limit.max(1);
        }
    }

    /// Apply overrides from a key lookup such as the process environment.
    ///
    /// Unparseable values are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(dir) = lookup("ITEM_DATA_DIR") {
            self.data_dir = PathBuf::from(dir);
        }
        self.apply_policy_overrides(&lookup);
    }

    fn apply_policy_overrides(&mut self, lookup: &impl Fn(&str) -> Option<String>) {
        if let Some(policy) = parse::<FailurePolicy>(lookup, "ITEM_FAILURE_POLICY") {
            self.failure_policy = policy;
        }
        if let Some(limit) = parse::<usize>(lookup, "ITEM_SEARCH_LIMIT") {
            self.search_limit = limit.max(1);
        }
    }
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.parse().ok()
}
