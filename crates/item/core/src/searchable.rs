//! Immutable catalog entry wrapping a sample item instance.
//!
//! # Construction
//!
//! An entry is built in two phases: its [`ItemMetadata`] is fixed first, then
//! the factory is invoked once with a read-only view of that metadata. The
//! resulting instance is cached behind an [`Arc`] and the factory is kept so
//! fresh instances can be created later via [`SearchableItem::create_item`].
//!
//! # Copies
//!
//! Cloning is shallow. Copies share the cached instance and the factory with
//! the original; the factory is never re-invoked.

use std::fmt;
use std::sync::Arc;

use crate::error::{FactoryError, ItemConstructionError};
use crate::item::{GameItem, ItemMetadata};
use crate::text;

/// Shared factory producing item instances for an entry.
pub type ItemFactory<I> =
    Arc<dyn Fn(&ItemMetadata) -> Result<I, FactoryError> + Send + Sync + 'static>;

/// A game item with metadata.
pub struct SearchableItem<I> {
    meta: ItemMetadata,
    item: Arc<I>,
    factory: ItemFactory<I>,
}

impl<I: GameItem> SearchableItem<I> {
    /// Creates an entry, invoking `create_item` exactly once for the sample instance.
    ///
    /// # Errors
    ///
    /// Returns [`ItemConstructionError`] if the factory fails or produces an
    /// instance without a name. No entry exists in that case.
    pub fn new<F>(
        item_type: impl Into<String>,
        id: impl Into<String>,
        create_item: F,
    ) -> Result<Self, ItemConstructionError>
    where
        F: Fn(&ItemMetadata) -> Result<I, FactoryError> + Send + Sync + 'static,
    {
        Self::with_factory(ItemMetadata::new(item_type, id), Arc::new(create_item))
    }

    /// Creates an entry from prepared metadata and an already shared factory.
    pub fn with_factory(
        meta: ItemMetadata,
        factory: ItemFactory<I>,
    ) -> Result<Self, ItemConstructionError> {
        let item = invoke(&meta, &factory)?;
        Ok(Self {
            meta,
            item: Arc::new(item),
            factory,
        })
    }

    /// Copies an existing entry without re-invoking its factory.
    pub fn from_existing(other: &Self) -> Self {
        other.clone()
    }

    /// Creates a fresh item instance using the entry's factory.
    pub fn create_item(&self) -> Result<I, ItemConstructionError> {
        invoke(&self.meta, &self.factory)
    }

    /// The item's default name.
    pub fn name(&self) -> &str {
        self.item.name()
    }

    /// The item's display name for the current language.
    pub fn display_name(&self) -> &str {
        self.item.display_name()
    }

    /// Whether the name or display name contains `substring`, ignoring case.
    pub fn name_contains(&self, substring: &str) -> bool {
        text::contains_ignore_case(self.name(), substring)
            || text::contains_ignore_case(self.display_name(), substring)
    }

    /// Whether the name or display name equals `name` in full, ignoring case.
    pub fn name_equivalent_to(&self, name: &str) -> bool {
        text::eq_ignore_case(self.name(), name) || text::eq_ignore_case(self.display_name(), name)
    }
}

impl<I> SearchableItem<I> {
    pub fn metadata(&self) -> &ItemMetadata {
        &self.meta
    }

    pub fn item_type(&self) -> &str {
        self.meta.item_type()
    }

    pub fn id(&self) -> &str {
        self.meta.id()
    }

    pub fn qualified_id(&self) -> &str {
        self.meta.qualified_id()
    }

    /// The cached sample instance.
    pub fn item(&self) -> &Arc<I> {
        &self.item
    }

    pub fn factory(&self) -> &ItemFactory<I> {
        &self.factory
    }

    /// Returns true if both entries hold the same cached instance.
    pub fn shares_item_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.item, &other.item)
    }
}

impl<I> Clone for SearchableItem<I> {
    fn clone(&self) -> Self {
        Self {
            meta: self.meta.clone(),
            item: Arc::clone(&self.item),
            factory: Arc::clone(&self.factory),
        }
    }
}

impl<I: GameItem> fmt::Debug for SearchableItem<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchableItem")
            .field("qualified_id", &self.qualified_id())
            .field("name", &self.name())
            .field("display_name", &self.display_name())
            .finish_non_exhaustive()
    }
}

fn invoke<I: GameItem>(
    meta: &ItemMetadata,
    factory: &ItemFactory<I>,
) -> Result<I, ItemConstructionError> {
    let item = factory(meta).map_err(|source| ItemConstructionError::Factory {
        qualified_id: meta.qualified_id().to_string(),
        source,
    })?;

    if item.name().is_empty() {
        return Err(ItemConstructionError::MissingName {
            qualified_id: meta.qualified_id().to_string(),
        });
    }

    Ok(item)
}
