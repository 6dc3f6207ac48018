//! Searchable item metadata shared by catalog loaders and tools.
//!
//! `item-core` defines [`SearchableItem`], an immutable catalog entry pairing an
//! item's type tag and id with a cached sample instance, together with the
//! [`GameItem`] contract that wrapped instances implement. Name matching is
//! ordinal and case-insensitive (see [`text`]).
pub mod error;
pub mod item;
pub mod searchable;
pub mod text;

pub use error::{CatalogError, ErrorSeverity, FactoryError, ItemConstructionError};
pub use item::{GameItem, ItemMetadata};
pub use searchable::{ItemFactory, SearchableItem};
