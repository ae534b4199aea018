//! Core item handling for Lattice select widgets.
//!
//! This crate turns the options a select lists into uniform items:
//!
//! - **Options**: an ordered list or a string-keyed map of entries
//! - **Key selection**: derive each item's string key from a field, a
//!   function, or the entry itself
//! - **Normalization**: ordered `{key, value}` items borrowing their entries
//! - **Equality**: structural comparison used for selection state
//!
//! # Example
//!
//! ```
//! use lattice_select_core::{normalize, items_equal, KeySelector, Options};
//! use serde_json::json;
//!
//! let options = Options::from_value(json!([
//!     {"id": 1, "name": "A"},
//!     {"id": 2, "name": "B"},
//! ]))?;
//!
//! let items = normalize(&options, &KeySelector::func(|e| e["name"].clone()))?;
//! assert_eq!(items[0].key(), "A");
//! assert!(items_equal(items[1].value(), &json!({"name": "B", "id": 2})));
//! # Ok::<(), lattice_select_core::ItemError>(())
//! ```

mod equality;
mod error;
mod item;
mod key;
pub mod logging;
mod options;
mod selector;

pub use equality::{items_equal, optional_items_equal};
pub use error::{BoxError, ItemError, Result};
pub use item::{Item, normalize, normalize_keys};
pub use key::{KeyExtractor, key_extractor, to_key_string};
pub use options::{Entry, Options, OptionsIter, Position, kind_of};
pub use selector::{KeyFn, KeySelector};

// Re-export the value type entries are made of
pub use serde_json::{Map, Value};
