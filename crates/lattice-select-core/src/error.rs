//! Error types for item normalization.

/// Boxed error returned by caller-supplied key functions.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type alias for normalization operations.
pub type Result<T> = std::result::Result<T, ItemError>;

/// Errors that can occur while turning options into items.
#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    /// A field selector was applied to an entry that does not carry the field.
    #[error("Cannot read field '{field}' of {found} entry at {position}")]
    MalformedSelector {
        field: String,
        position: String,
        found: &'static str,
    },

    /// A caller-supplied key function failed.
    #[error("Key function failed for entry at {position}: {source}")]
    SelectorFunction {
        position: String,
        #[source]
        source: BoxError,
    },

    /// The key resolved to `null`, which has no string form.
    #[error("Key for entry at {position} resolved to null")]
    NullKey { position: String },

    /// Structural serialization of an entry failed.
    #[error("Failed to serialize entry: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A value that is neither an array nor an object was offered as options.
    #[error("Options must be an array or an object, found {found}")]
    NotACollection { found: &'static str },
}

impl ItemError {
    /// Create a malformed selector error.
    pub fn malformed_selector(
        field: impl Into<String>,
        position: impl ToString,
        found: &'static str,
    ) -> Self {
        Self::MalformedSelector {
            field: field.into(),
            position: position.to_string(),
            found,
        }
    }

    /// Wrap a key function failure, keeping the original error as source.
    pub fn selector_function(position: impl ToString, source: BoxError) -> Self {
        Self::SelectorFunction {
            position: position.to_string(),
            source,
        }
    }

    /// Create a null key error.
    pub fn null_key(position: impl ToString) -> Self {
        Self::NullKey {
            position: position.to_string(),
        }
    }

    /// Whether this error was caused by the key selector rather than the data.
    pub fn is_selector_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedSelector { .. } | Self::SelectorFunction { .. }
        )
    }
}
