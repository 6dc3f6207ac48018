//! Data-driven item catalogs.
//!
//! This crate assembles [`item_core::SearchableItem`] entries into an
//! [`ItemCatalog`] and provides loaders for RON/TOML data files:
//! - Item records (`items.ron`)
//! - Catalog settings (`config.toml`, optional)
//!
//! Entries whose factory fails are skipped or abort the build depending on
//! the configured [`FailurePolicy`].

pub mod catalog;
pub mod config;
pub mod content_item;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{CatalogBuildError, CatalogBuilder, FailurePolicy, ItemCatalog};
pub use config::{CatalogConfig, CatalogSettings};
pub use content_item::ContentItem;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, ItemLoader, ItemRecord};
