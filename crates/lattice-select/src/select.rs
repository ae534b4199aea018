//! Select widget state for dropdown selection.
//!
//! The `Select` holds everything a dropdown needs besides painting:
//! - Options as a list or map of entries, normalized into keyed items
//! - Popup visibility and the highlighted item
//! - The selected entry, compared structurally against the options
//! - Disabled and validation status
//! - Appearance tokens for the control and each popup item
//!
//! # Example
//!
//! ```
//! use lattice_select::{Key, KeySelector, Options, Select};
//! use serde_json::json;
//!
//! let options = Options::from_value(json!([{"id": 1, "name": "Apple"}, {"id": 2, "name": "Banana"}]))?;
//! let mut select = Select::new(options)?
//!     .with_key_selector(KeySelector::field("id"))?
//!     .with_label_fn(|item| item.value()["name"].as_str().unwrap_or_default().to_string());
//!
//! select.selection_changed.connect(|entry| {
//!     println!("Selected: {}", entry);
//! });
//!
//! select.handle_click();
//! select.handle_key(Key::ArrowDown);
//! select.handle_key(Key::Enter);
//! assert_eq!(select.selected_label().as_deref(), Some("Apple"));
//! # Ok::<(), lattice_select::SelectError>(())
//! ```

use std::fmt;
use std::sync::Arc;

use lattice_select_core::{
    Entry, Item, KeyExtractor, KeySelector, Options, Position, Value, items_equal,
    normalize_keys, optional_items_equal, select_debug, select_trace, to_key_string,
};

use crate::appearance::{ControlAppearance, InputStatus, ItemAppearance};
use crate::error::{Result, SelectError};
use crate::event::Key;
use crate::props::SelectProps;
use crate::signal::Signal;

/// Renders the text shown for an item.
pub type LabelFn = Arc<dyn Fn(&Item<'_>) -> String + Send + Sync>;

/// Headless dropdown select.
///
/// # Signals
///
/// - `selection_changed(Entry)`: Emitted when the user picks a different entry
/// - `popup_visibility_changed(bool)`: Emitted when the popup opens or closes
/// - `highlighted_changed(Option<usize>)`: Emitted when the highlighted item changes
pub struct Select {
    /// The entries to list.
    options: Options,

    /// How item keys are derived.
    key_selector: KeySelector,

    /// Item keys, parallel to the options' enumeration order.
    keys: Vec<String>,

    /// Currently selected entry.
    selected: Option<Entry>,

    /// Highlighted item in the popup.
    highlighted_index: Option<usize>,

    /// Whether the popup is currently visible.
    popup_open: bool,

    disabled: bool,
    status: InputStatus,

    /// Element id for forms.
    id: Option<String>,
    /// Element name for forms.
    name: Option<String>,

    /// Item label renderer.
    label_fn: LabelFn,

    // Signals
    /// Signal emitted when the selected entry changes.
    pub selection_changed: Signal<Entry>,
    /// Signal emitted when the popup opens or closes.
    pub popup_visibility_changed: Signal<bool>,
    /// Signal emitted when the highlighted item changes.
    pub highlighted_changed: Signal<Option<usize>>,
}

impl Select {
    /// Create a select listing `options`, keyed with the default strategy.
    pub fn new(options: impl Into<Options>) -> Result<Self> {
        let options = options.into();
        let key_selector = KeySelector::Default;
        let keys = normalize_keys(&options, &key_selector)?;

        Ok(Self {
            options,
            key_selector,
            keys,
            selected: None,
            highlighted_index: None,
            popup_open: false,
            disabled: false,
            status: InputStatus::Normal,
            id: None,
            name: None,
            label_fn: Arc::new(default_label),
            selection_changed: Signal::new(),
            popup_visibility_changed: Signal::new(),
            highlighted_changed: Signal::new(),
        })
    }

    /// Build a select from declarative props.
    pub fn from_props(props: SelectProps) -> Result<Self> {
        let key_selector = props.key_selector();
        let status = props.status();
        let mut select = Self::new(props.options)?.with_key_selector(key_selector)?;

        select.selected = props.default_value;
        select.disabled = props.disabled;
        select.status = status;
        select.id = props.id;
        select.name = props.name;
        Ok(select)
    }

    // =========================================================================
    // Options
    // =========================================================================

    /// The listed options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace the options.
    ///
    /// Items are recomputed only when the new options differ from the current
    /// ones, including a change of map key or record field order. Returns
    /// whether anything changed. On error the select keeps its previous
    /// options.
    pub fn set_options(&mut self, options: impl Into<Options>) -> Result<bool> {
        let options = options.into();
        if options.is_identical(&self.options) {
            return Ok(false);
        }

        self.keys = normalize_keys(&options, &self.key_selector)?;
        self.options = options;
        select_debug!(count = self.keys.len(), "options replaced");

        if self.highlighted_index.is_some_and(|i| i >= self.keys.len()) {
            self.set_highlighted_index(None);
        }
        if self.popup_open && self.keys.is_empty() {
            self.close_popup();
        }
        Ok(true)
    }

    /// Set options using builder pattern.
    pub fn with_options(mut self, options: impl Into<Options>) -> Result<Self> {
        self.set_options(options)?;
        Ok(self)
    }

    /// The key selector in use.
    pub fn key_selector(&self) -> &KeySelector {
        &self.key_selector
    }

    /// Replace the key selector and recompute item keys.
    ///
    /// On error the select keeps its previous selector.
    pub fn set_key_selector(&mut self, selector: impl Into<KeySelector>) -> Result<()> {
        let selector = selector.into();
        self.keys = normalize_keys(&self.options, &selector)?;
        self.key_selector = selector;
        Ok(())
    }

    /// Set key selector using builder pattern.
    pub fn with_key_selector(mut self, selector: impl Into<KeySelector>) -> Result<Self> {
        self.set_key_selector(selector)?;
        Ok(self)
    }

    /// Number of items.
    pub fn count(&self) -> usize {
        self.keys.len()
    }

    /// All items in display order.
    pub fn items(&self) -> Vec<Item<'_>> {
        self.keys
            .iter()
            .zip(self.options.iter())
            .map(|(key, (_, entry))| Item::new(key.as_str(), entry))
            .collect()
    }

    /// The item at `index`.
    pub fn item(&self, index: usize) -> Option<Item<'_>> {
        Some(Item::new(self.keys.get(index)?.as_str(), self.options.get(index)?))
    }

    /// Rendered label of the item at `index`.
    pub fn item_label(&self, index: usize) -> Option<String> {
        self.item(index).map(|item| (self.label_fn)(&item))
    }

    /// Find the first item whose entry equals `entry` structurally.
    pub fn find_entry(&self, entry: &Entry) -> Option<usize> {
        self.options
            .iter()
            .position(|(_, candidate)| items_equal(candidate, entry))
    }

    /// Find an item by key.
    pub fn find_key(&self, key: &str) -> Option<usize> {
        self.keys.iter().position(|k| k == key)
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// The selected entry, if any.
    pub fn selected_entry(&self) -> Option<&Entry> {
        self.selected.as_ref()
    }

    /// Index of the selected entry among the options.
    pub fn selected_index(&self) -> Option<usize> {
        self.find_entry(self.selected.as_ref()?)
    }

    /// The listed item matching the selected entry.
    pub fn selected_item(&self) -> Option<Item<'_>> {
        self.item(self.selected_index()?)
    }

    /// Label of the selection.
    ///
    /// A selected entry that is not among the options is still labelled,
    /// keyed by its own content.
    pub fn selected_label(&self) -> Option<String> {
        if let Some(item) = self.selected_item() {
            return Some((self.label_fn)(&item));
        }
        let entry = self.selected.as_ref()?;
        let key = KeyExtractor::Serialized
            .extract(entry, Position::Index(0))
            .ok()?;
        Some((self.label_fn)(&Item::new(key, entry)))
    }

    /// Whether the item at `index` is the selected one.
    pub fn is_selected(&self, index: usize) -> bool {
        match (self.options.get(index), self.selected.as_ref()) {
            (Some(entry), Some(selected)) => items_equal(entry, selected),
            _ => false,
        }
    }

    /// Select the item at `index` and close the popup.
    ///
    /// Emits `selection_changed` when the selected entry actually changes.
    /// Returns whether it changed.
    pub fn select_index(&mut self, index: usize) -> Result<bool> {
        let entry = self
            .options
            .get(index)
            .cloned()
            .ok_or(SelectError::IndexOutOfRange {
                index,
                count: self.count(),
            })?;
        Ok(self.commit(entry))
    }

    /// Select an entry directly, without emitting a signal.
    pub fn set_selected_entry(&mut self, entry: Option<Entry>) {
        self.selected = entry;
    }

    /// Set the initial selection using builder pattern.
    pub fn with_default_value(mut self, entry: impl Into<Entry>) -> Self {
        self.selected = Some(entry.into());
        self
    }

    /// Clear the selection. Returns whether there was one.
    pub fn clear_selection(&mut self) -> bool {
        self.selected.take().is_some()
    }

    fn commit(&mut self, entry: Entry) -> bool {
        let changed = !optional_items_equal(self.selected.as_ref(), Some(&entry));
        self.close_popup();

        if changed {
            select_debug!(entry = %entry, "selection changed");
            self.selected = Some(entry.clone());
            self.selection_changed.emit(entry);
        }
        changed
    }

    // =========================================================================
    // Popup Control
    // =========================================================================

    /// Check if the popup is visible.
    pub fn is_popup_open(&self) -> bool {
        self.popup_open
    }

    /// Show the popup.
    ///
    /// Does nothing while disabled or when there are no items. The selected
    /// item, if listed, starts highlighted.
    pub fn open_popup(&mut self) {
        if self.popup_open || self.disabled || self.keys.is_empty() {
            return;
        }

        self.popup_open = true;
        self.popup_visibility_changed.emit(true);
        let highlight = self.selected_index();
        self.set_highlighted_index(highlight);
    }

    /// Hide the popup and clear the highlight.
    pub fn close_popup(&mut self) {
        if self.popup_open {
            self.popup_open = false;
            self.set_highlighted_index(None);
            self.popup_visibility_changed.emit(false);
        }
    }

    /// Toggle the popup visibility.
    pub fn toggle_popup(&mut self) {
        if self.popup_open {
            self.close_popup();
        } else {
            self.open_popup();
        }
    }

    /// The highlighted item index.
    pub fn highlighted_index(&self) -> Option<usize> {
        self.highlighted_index
    }

    /// Highlight an item, e.g. under the pointer. Out of range clears it.
    pub fn set_highlighted_index(&mut self, index: Option<usize>) {
        let index = index.filter(|&i| i < self.keys.len());
        if self.highlighted_index != index {
            select_trace!(?index, "highlight moved");
            self.highlighted_index = index;
            self.highlighted_changed.emit(index);
        }
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Handle a click on the control. Returns whether it was handled.
    pub fn handle_click(&mut self) -> bool {
        if self.disabled {
            return false;
        }
        self.toggle_popup();
        true
    }

    /// Handle a click on the popup item at `index`.
    pub fn handle_item_click(&mut self, index: usize) -> Result<bool> {
        if self.disabled {
            return Ok(false);
        }
        self.select_index(index)
    }

    /// Handle a key press. Returns whether it was handled.
    pub fn handle_key(&mut self, key: Key) -> bool {
        if self.disabled {
            return false;
        }

        let count = self.keys.len();
        match key {
            Key::Enter => {
                if !self.popup_open {
                    self.open_popup();
                } else if let Some(entry) = self
                    .highlighted_index
                    .and_then(|i| self.options.get(i))
                    .cloned()
                {
                    self.commit(entry);
                } else {
                    self.close_popup();
                }
                true
            }
            Key::Escape => {
                if self.popup_open {
                    self.close_popup();
                    true
                } else {
                    false
                }
            }
            Key::ArrowDown => {
                if !self.popup_open {
                    self.open_popup();
                } else if count > 0 {
                    let next = self.highlighted_index.map_or(0, |i| (i + 1) % count);
                    self.set_highlighted_index(Some(next));
                }
                true
            }
            Key::ArrowUp => {
                if !self.popup_open {
                    self.open_popup();
                } else if count > 0 {
                    let prev = self
                        .highlighted_index
                        .map_or(count - 1, |i| (i + count - 1) % count);
                    self.set_highlighted_index(Some(prev));
                }
                true
            }
            Key::Home | Key::End => {
                if self.popup_open && count > 0 {
                    let target = if key == Key::Home { 0 } else { count - 1 };
                    self.set_highlighted_index(Some(target));
                    true
                } else {
                    false
                }
            }
            Key::Other => false,
        }
    }

    // =========================================================================
    // State & Appearance
    // =========================================================================

    /// Whether selection is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Enable or disable selection. Disabling closes the popup.
    pub fn set_disabled(&mut self, disabled: bool) {
        if self.disabled != disabled {
            if disabled {
                self.close_popup();
            }
            self.disabled = disabled;
        }
    }

    /// Set disabled using builder pattern.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.set_disabled(disabled);
        self
    }

    /// Validation status.
    pub fn status(&self) -> InputStatus {
        self.status
    }

    /// Set the validation status.
    pub fn set_status(&mut self, status: InputStatus) {
        self.status = status;
    }

    /// Set status using builder pattern.
    pub fn with_status(mut self, status: InputStatus) -> Self {
        self.status = status;
        self
    }

    /// Element id for forms.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Set id using builder pattern.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Element name for forms.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Set name using builder pattern.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set a custom label renderer.
    pub fn set_label_fn<F>(&mut self, f: F)
    where
        F: Fn(&Item<'_>) -> String + Send + Sync + 'static,
    {
        self.label_fn = Arc::new(f);
    }

    /// Set label renderer using builder pattern.
    pub fn with_label_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&Item<'_>) -> String + Send + Sync + 'static,
    {
        self.set_label_fn(f);
        self
    }

    /// Appearance of the closed control.
    pub fn control_appearance(&self) -> ControlAppearance {
        ControlAppearance::new(self.disabled, self.status)
    }

    /// Appearance of the popup item at `index`.
    pub fn item_appearance(&self, index: usize) -> Option<ItemAppearance> {
        let key = self.keys.get(index)?;
        Some(ItemAppearance::new(
            key,
            self.highlighted_index == Some(index),
            self.is_selected(index),
        ))
    }
}

impl fmt::Debug for Select {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Select")
            .field("options", &self.options)
            .field("key_selector", &self.key_selector)
            .field("keys", &self.keys)
            .field("selected", &self.selected)
            .field("highlighted_index", &self.highlighted_index)
            .field("popup_open", &self.popup_open)
            .field("disabled", &self.disabled)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

/// Default label: strings as-is, records as JSON, other values in string form.
fn default_label(item: &Item<'_>) -> String {
    let value = item.value();
    match value {
        Value::Object(_) => value.to_string(),
        _ => to_key_string(value).unwrap_or_default(),
    }
}

static_assertions::assert_impl_all!(Select: Send, Sync);
