//! Lattice select - a headless dropdown select.
//!
//! This crate provides the state behind a dropdown control: a closed box
//! showing the current selection, a popup list opened by click or keyboard,
//! and change notification when the user picks an entry. Painting is left to
//! the host; the select reports theme tokens for every visual part.
//!
//! - **Select**: popup, highlight and selection state
//! - **Signals**: `selection_changed`, `popup_visibility_changed`, `highlighted_changed`
//! - **Appearance**: color tokens, cursor and tab index for the current state
//! - **Props**: serde-deserializable configuration
//!
//! Item normalization lives in `lattice_select_core` and is re-exported here.
//!
//! # Example
//!
//! ```
//! use lattice_select::{Key, Select};
//!
//! let mut select = Select::new(["Apple", "Banana", "Cherry"])?;
//! select.selection_changed.connect(|entry| println!("Selected: {}", entry));
//!
//! select.handle_key(Key::ArrowDown);
//! select.handle_key(Key::ArrowDown);
//! select.handle_key(Key::Enter);
//! assert_eq!(select.selected_label().as_deref(), Some("Apple"));
//! # Ok::<(), lattice_select::SelectError>(())
//! ```

pub mod appearance;
mod error;
pub mod event;
pub mod prelude;
mod props;
mod select;
pub mod signal;

pub use appearance::{ColorToken, ControlAppearance, Cursor, InputStatus, ItemAppearance};
pub use error::{Result, SelectError};
pub use event::Key;
pub use props::SelectProps;
pub use select::{LabelFn, Select};
pub use signal::{ConnectionGuard, ConnectionId, Signal};

pub use lattice_select_core::{
    BoxError, Entry, Item, ItemError, KeyExtractor, KeyFn, KeySelector, Options, Position,
    items_equal, key_extractor, logging, normalize, normalize_keys, optional_items_equal,
    to_key_string,
};
