//! Error infrastructure for item metadata.
//!
//! Construction of a [`SearchableItem`](crate::SearchableItem) is the only
//! fallible operation in this crate. Errors are classified by severity so the
//! code assembling a catalog can decide whether to skip, log, or abort.

/// Error returned by an item factory.
///
/// Factories are supplied by the caller and may fail for arbitrary reasons, so
/// the error is boxed rather than tied to a concrete type.
pub type FactoryError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: the produced data is unusable and should be rejected
/// - **Internal**: the factory itself failed; usually indicates a bug or missing data
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid output, should not retry without changes.
    Validation,

    /// Internal error - the factory failed to produce an instance.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for errors raised while assembling item catalogs.
///
/// Provides a uniform interface for severity classification and stable error
/// codes, used as structured fields in log output.
pub trait CatalogError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Failure to construct a [`SearchableItem`](crate::SearchableItem).
///
/// A failed construction never yields a partial entry.
#[derive(Debug, thiserror::Error)]
pub enum ItemConstructionError {
    /// The factory returned an error instead of an instance.
    #[error("failed to create item '{qualified_id}': {source}")]
    Factory {
        qualified_id: String,
        #[source]
        source: FactoryError,
    },

    /// The factory produced an instance without a raw name.
    #[error("item '{qualified_id}' has no name")]
    MissingName { qualified_id: String },
}

impl ItemConstructionError {
    /// Qualified id of the entry that failed to construct.
    pub fn qualified_id(&self) -> &str {
        match self {
            Self::Factory { qualified_id, .. } | Self::MissingName { qualified_id } => {
                qualified_id
            }
        }
    }
}

impl CatalogError for ItemConstructionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Factory { .. } => ErrorSeverity::Internal,
            Self::MissingName { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Factory { .. } => "ITEM_FACTORY_FAILED",
            Self::MissingName { .. } => "ITEM_MISSING_NAME",
        }
    }
}
