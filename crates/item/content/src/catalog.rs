//! Catalog assembly from searchable item entries.
//!
//! [`CatalogBuilder`] is the only place where entry construction failures are
//! handled. Under [`FailurePolicy::Skip`] a failed entry is logged and left
//! out; under [`FailurePolicy::Abort`] the first failure is returned.
//! The finished [`ItemCatalog`] is immutable.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use item_core::{
    CatalogError, ErrorSeverity, FactoryError, GameItem, ItemConstructionError, ItemMetadata,
    SearchableItem,
};
use serde::{Deserialize, Serialize};

/// What to do when a catalog entry cannot be constructed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Log the failure and leave the entry out.
    #[default]
    Skip,
    /// Stop building and return the failure.
    Abort,
}

impl FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "abort" => Ok(Self::Abort),
            other => Err(format!("unknown failure policy '{other}'")),
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skip => f.write_str("skip"),
            Self::Abort => f.write_str("abort"),
        }
    }
}

/// Errors returned while building a catalog under [`FailurePolicy::Abort`].
#[derive(Debug, thiserror::Error)]
pub enum CatalogBuildError {
    #[error(transparent)]
    Construction(#[from] ItemConstructionError),

    /// An entry with the same qualified id was already added.
    #[error("duplicate qualified item id '{0}'")]
    DuplicateQualifiedId(String),
}

impl CatalogError for CatalogBuildError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Construction(err) => err.severity(),
            Self::DuplicateQualifiedId(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Construction(err) => err.error_code(),
            Self::DuplicateQualifiedId(_) => "CATALOG_DUPLICATE_ID",
        }
    }
}

/// Collects entries into an [`ItemCatalog`].
pub struct CatalogBuilder<I> {
    policy: FailurePolicy,
    entries: Vec<SearchableItem<I>>,
    index: HashMap<String, usize>,
    skipped: usize,
}

impl<I: GameItem> CatalogBuilder<I> {
    pub fn new(policy: FailurePolicy) -> Self {
        Self {
            policy,
            entries: Vec::new(),
            index: HashMap::new(),
            skipped: 0,
        }
    }

    /// Constructs an entry and adds it to the catalog.
    ///
    /// Returns `Ok(true)` if the entry was added and `Ok(false)` if it was
    /// skipped. The factory is not invoked for a duplicate qualified id.
    ///
    /// # Errors
    ///
    /// Only under [`FailurePolicy::Abort`].
    pub fn add<F>(
        &mut self,
        item_type: impl Into<String>,
        id: impl Into<String>,
        create_item: F,
    ) -> Result<bool, CatalogBuildError>
    where
        F: Fn(&ItemMetadata) -> Result<I, FactoryError> + Send + Sync + 'static,
    {
        let meta = ItemMetadata::new(item_type, id);
        if self.index.contains_key(meta.qualified_id()) {
            let err = CatalogBuildError::DuplicateQualifiedId(meta.qualified_id().to_string());
            return self.reject(err);
        }

        match SearchableItem::<I>::with_factory(meta, Arc::new(create_item)) {
            Ok(entry) => Ok(self.insert(entry)),
            Err(err) => self.reject(err.into()),
        }
    }

    /// Adds an already constructed entry, e.g. a copy taken from another catalog.
    pub fn add_entry(&mut self, entry: SearchableItem<I>) -> Result<bool, CatalogBuildError> {
        if self.index.contains_key(entry.qualified_id()) {
            let err = CatalogBuildError::DuplicateQualifiedId(entry.qualified_id().to_string());
            return self.reject(err);
        }
        Ok(self.insert(entry))
    }

    /// Number of entries left out so far.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn build(self) -> ItemCatalog<I> {
        tracing::info!(
            entries = self.entries.len(),
            skipped = self.skipped,
            "item catalog built"
        );
        ItemCatalog {
            entries: self.entries,
            index: self.index,
            skipped: self.skipped,
        }
    }

    fn insert(&mut self, entry: SearchableItem<I>) -> bool {
        tracing::debug!(
            qualified_id = entry.qualified_id(),
            name = entry.name(),
            "added catalog entry"
        );
        self.index
            .insert(entry.qualified_id().to_string(), self.entries.len());
        self.entries.push(entry);
        true
    }

    fn reject(&mut self, err: CatalogBuildError) -> Result<bool, CatalogBuildError> {
        match self.policy {
            FailurePolicy::Abort => Err(err),
            FailurePolicy::Skip => {
                tracing::warn!(
                    code = err.error_code(),
                    severity = err.severity().as_str(),
                    error = %err,
                    "skipping catalog entry"
                );
                self.skipped += 1;
                Ok(false)
            }
        }
    }
}

/// Immutable set of searchable entries, kept in insertion order.
pub struct ItemCatalog<I> {
    entries: Vec<SearchableItem<I>>,
    index: HashMap<String, usize>,
    skipped: usize,
}

impl<I: GameItem> ItemCatalog<I> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries left out while the catalog was built.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn iter(&self) -> impl Iterator<Item = &SearchableItem<I>> {
        self.entries.iter()
    }

    /// Looks up an entry by qualified id, e.g. `(O)388`.
    pub fn get(&self, qualified_id: &str) -> Option<&SearchableItem<I>> {
        self.index.get(qualified_id).map(|&i| &self.entries[i])
    }

    /// Entries whose name or display name contains `query`, ignoring case.
    pub fn search<'a>(&'a self, query: &'a str) -> impl Iterator<Item = &'a SearchableItem<I>> {
        self.entries
            .iter()
            .filter(move |entry| entry.name_contains(query))
    }

    /// First entry whose name or display name equals `name`, ignoring case.
    pub fn find_exact(&self, name: &str) -> Option<&SearchableItem<I>> {
        self.entries
            .iter()
            .find(|entry| entry.name_equivalent_to(name))
    }
}

impl<I> fmt::Debug for ItemCatalog<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemCatalog")
            .field("entries", &self.entries.len())
            .field("skipped", &self.skipped)
            .finish()
    }
}
