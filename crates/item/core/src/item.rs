//! Wrapped item contract and entry metadata.

/// A game item instance that can be wrapped by a [`SearchableItem`](crate::SearchableItem).
///
/// Both names are treated as opaque strings; only their text is compared.
pub trait GameItem: Send + Sync {
    /// The item's default (raw) name.
    fn name(&self) -> &str;

    /// The item's display name for the current language.
    fn display_name(&self) -> &str;
}

impl<T: GameItem + ?Sized> GameItem for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}

/// Identity of a catalog entry.
///
/// This is the read-only view handed to an item factory while the entry is
/// being constructed, so items can be built from their own type and id.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "RawMetadata", from = "RawMetadata"))]
pub struct ItemMetadata {
    item_type: String,
    id: String,
    qualified_id: String,
}

impl ItemMetadata {
    pub fn new(item_type: impl Into<String>, id: impl Into<String>) -> Self {
        let item_type = item_type.into();
        let id = id.into();
        let qualified_id = format!("{item_type}{id}");
        Self {
            item_type,
            id,
            qualified_id,
        }
    }

    /// Type tag identifying the item category, e.g. `(O)`.
    pub fn item_type(&self) -> &str {
        &self.item_type
    }

    /// Unqualified id, unique within [`Self::item_type`].
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Type tag followed by id, e.g. `(O)388`.
    pub fn qualified_id(&self) -> &str {
        &self.qualified_id
    }
}

/// Serialized form. The qualified id is always re-derived on load.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawMetadata {
    item_type: String,
    id: String,
}

#[cfg(feature = "serde")]
impl From<ItemMetadata> for RawMetadata {
    fn from(meta: ItemMetadata) -> Self {
        Self {
            item_type: meta.item_type,
            id: meta.id,
        }
    }
}

#[cfg(feature = "serde")]
impl From<RawMetadata> for ItemMetadata {
    fn from(raw: RawMetadata) -> Self {
        Self::new(raw.item_type, raw.id)
    }
}
