//! Error types for the select widget.

use lattice_select_core::ItemError;

/// Result type alias for select operations.
pub type Result<T> = std::result::Result<T, SelectError>;

/// Errors that can occur while configuring or driving a select.
#[derive(Debug, thiserror::Error)]
pub enum SelectError {
    /// Options could not be turned into items.
    #[error(transparent)]
    Items(#[from] ItemError),

    /// An item index past the end of the list.
    #[error("Item index {index} out of range for {count} items")]
    IndexOutOfRange { index: usize, count: usize },

    /// Props could not be parsed.
    #[error("Invalid select props: {0}")]
    Props(#[from] serde_json::Error),
}
