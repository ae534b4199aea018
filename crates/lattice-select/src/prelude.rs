//! Convenient imports for building selects.
//!
//! ```
//! use lattice_select::prelude::*;
//! ```

pub use crate::{
    ColorToken, ControlAppearance, InputStatus, ItemAppearance, Key, KeySelector, Options, Select,
    SelectError, SelectProps, Signal,
};
