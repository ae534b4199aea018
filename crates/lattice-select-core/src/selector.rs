//! Key selection strategies.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::error::BoxError;
use crate::options::Entry;

/// Caller-supplied function deriving a key value from an entry.
pub type KeyFn = Arc<dyn Fn(&Entry) -> Result<Value, BoxError> + Send + Sync>;

/// How an item's key is derived from its entry.
///
/// # Example
///
/// ```
/// use lattice_select_core::KeySelector;
///
/// let by_id = KeySelector::field("id");
/// let by_name = KeySelector::func(|entry| entry["name"].clone());
/// assert!(KeySelector::default().is_default());
/// # let _ = (by_id, by_name);
/// ```
#[derive(Clone, Default)]
pub enum KeySelector {
    /// No selector: serialize list entries, or use the map key.
    #[default]
    Default,
    /// Read the named field from each structured entry.
    Field(String),
    /// Apply a function to each entry.
    Func(KeyFn),
}

impl KeySelector {
    /// Select keys from a named field.
    pub fn field(name: impl Into<String>) -> Self {
        Self::Field(name.into())
    }

    /// Select keys with an infallible function.
    pub fn func<F, V>(f: F) -> Self
    where
        F: Fn(&Entry) -> V + Send + Sync + 'static,
        V: Into<Value> + 'static,
    {
        Self::Func(Arc::new(move |entry: &Entry| -> Result<Value, BoxError> {
            Ok(f(entry).into())
        }))
    }

    /// Select keys with a function that may fail.
    ///
    /// Failures surface unchanged as the source of
    /// [`ItemError::SelectorFunction`](crate::ItemError::SelectorFunction).
    pub fn try_func<F, V, E>(f: F) -> Self
    where
        F: Fn(&Entry) -> Result<V, E> + Send + Sync + 'static,
        V: Into<Value> + 'static,
        E: Into<BoxError> + 'static,
    {
        Self::Func(Arc::new(move |entry: &Entry| -> Result<Value, BoxError> {
            f(entry).map(Into::into).map_err(Into::into)
        }))
    }

    /// Whether no selector was given.
    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }
}

impl fmt::Debug for KeySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("Default"),
            Self::Field(name) => f.debug_tuple("Field").field(name).finish(),
            Self::Func(_) => f.write_str("Func(..)"),
        }
    }
}

impl From<&str> for KeySelector {
    fn from(name: &str) -> Self {
        Self::field(name)
    }
}

impl From<String> for KeySelector {
    fn from(name: String) -> Self {
        Self::Field(name)
    }
}

impl<S: Into<KeySelector>> From<Option<S>> for KeySelector {
    fn from(selector: Option<S>) -> Self {
        selector.map_or(Self::Default, Into::into)
    }
}
