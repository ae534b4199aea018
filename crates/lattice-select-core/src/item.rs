//! Normalized items.

use std::fmt;

use crate::error::Result;
use crate::key::key_extractor;
use crate::logging::targets;
use crate::options::{Entry, Options};
use crate::selector::KeySelector;

/// A normalized `{key, value}` pair.
///
/// The value borrows the entry from the options collection it was built from,
/// so identity comparisons against the source are possible with
/// [`std::ptr::eq`].
#[derive(Clone, PartialEq)]
pub struct Item<'a> {
    key: String,
    value: &'a Entry,
}

impl<'a> Item<'a> {
    /// Create an item from a key and the entry it was derived from.
    pub fn new(key: impl Into<String>, value: &'a Entry) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    /// The item's string key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The original entry.
    pub fn value(&self) -> &'a Entry {
        self.value
    }
}

impl fmt::Debug for Item<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Item")
            .field("key", &self.key)
            .field("value", self.value)
            .finish()
    }
}

/// Convert an options collection into an ordered list of items.
///
/// One item is produced per entry, in the collection's enumeration order.
/// The call is pure: the same arguments always yield the same keys.
///
/// # Errors
///
/// Fails on the first entry whose key cannot be derived; see
/// [`ItemError`](crate::ItemError) for the cases.
///
/// # Example
///
/// ```
/// use lattice_select_core::{normalize, KeySelector, Options};
/// use serde_json::json;
///
/// let options = Options::from_value(json!([{"id": 1}, {"id": 2}])).unwrap();
/// let items = normalize(&options, &KeySelector::field("id")).unwrap();
/// let keys: Vec<&str> = items.iter().map(|item| item.key()).collect();
/// assert_eq!(keys, ["1", "2"]);
/// ```
#[tracing::instrument(skip_all, target = "lattice_select_core::items", level = "trace")]
pub fn normalize<'a>(options: &'a Options, selector: &KeySelector) -> Result<Vec<Item<'a>>> {
    let extractor = key_extractor(options, selector);
    tracing::trace!(
        target: targets::ITEMS,
        entries = options.len(),
        strategy = ?extractor,
        "normalizing options"
    );

    options
        .iter()
        .map(|(position, entry)| -> Result<Item<'a>> {
            Ok(Item::new(extractor.extract(entry, position)?, entry))
        })
        .collect()
}

/// Derive only the keys of an options collection, in enumeration order.
///
/// Equivalent to mapping [`normalize`] to keys, without holding borrows of
/// the entries.
pub fn normalize_keys(options: &Options, selector: &KeySelector) -> Result<Vec<String>> {
    Ok(normalize(options, selector)?
        .into_iter()
        .map(|item| item.key)
        .collect())
}
