//! Declarative select configuration.

use lattice_select_core::{Entry, KeySelector, Options};
use serde::{Deserialize, Serialize};

use crate::appearance::InputStatus;
use crate::error::Result;

/// Serializable description of a select.
///
/// Every field is optional when deserializing. `defaultValue` is accepted as
/// an alias of `default_value`.
///
/// ```
/// use lattice_select::SelectProps;
///
/// let props = SelectProps::from_json(r#"{
///     "options": [{"id": 1, "name": "One"}, {"id": 2, "name": "Two"}],
///     "key": "id",
///     "defaultValue": {"id": 2, "name": "Two"},
///     "error": true
/// }"#)?;
/// assert_eq!(props.options.len(), 2);
/// # Ok::<(), lattice_select::SelectError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectProps {
    /// List or map of options to display.
    pub options: Options,
    /// Initially selected entry.
    #[serde(alias = "defaultValue")]
    pub default_value: Option<Entry>,
    /// Field to read item keys from.
    pub key: Option<String>,
    /// Disable selection.
    pub disabled: bool,
    /// Show error state.
    pub error: bool,
    /// Show success state.
    pub success: bool,
    /// Element id for forms.
    pub id: Option<String>,
    /// Element name for forms.
    pub name: Option<String>,
}

impl SelectProps {
    /// Parse props from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Key selector described by these props.
    pub fn key_selector(&self) -> KeySelector {
        self.key.clone().into()
    }

    /// Status described by the error/success flags.
    pub fn status(&self) -> InputStatus {
        InputStatus::from_flags(self.error, self.success)
    }
}
