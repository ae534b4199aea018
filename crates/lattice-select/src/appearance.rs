//! Appearance tokens for the select control and its popup items.
//!
//! The select never paints. It reports which theme color token each part
//! should use, and the host theme resolves the token to a concrete color.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Theme color tokens used by the select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorToken {
    White,
    Black50,
    Black100,
    Black300,
    Black400,
    Black800,
    Primary300,
    Primary500,
    Red500,
    Green300,
}

impl ColorToken {
    /// Theme path of this token, e.g. `"primary.500"`.
    pub fn theme_key(self) -> &'static str {
        match self {
            Self::White => "white.full",
            Self::Black50 => "black.50",
            Self::Black100 => "black.100",
            Self::Black300 => "black.300",
            Self::Black400 => "black.400",
            Self::Black800 => "black.800",
            Self::Primary300 => "primary.300",
            Self::Primary500 => "primary.500",
            Self::Red500 => "red.500",
            Self::Green300 => "green.300",
        }
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.theme_key())
    }
}

/// Validation status shown by the control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputStatus {
    #[default]
    Normal,
    Error,
    Success,
}

impl InputStatus {
    /// Status from separate error/success flags; error wins.
    pub fn from_flags(error: bool, success: bool) -> Self {
        if error {
            Self::Error
        } else if success {
            Self::Success
        } else {
            Self::Normal
        }
    }

    /// Border color for this status.
    pub fn border_color(self) -> ColorToken {
        match self {
            Self::Error => ColorToken::Red500,
            Self::Success => ColorToken::Green300,
            Self::Normal => ColorToken::Black300,
        }
    }
}

/// Pointer cursor over the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Pointer,
    NotAllowed,
}

/// How the closed control should look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlAppearance {
    pub background: ColorToken,
    pub border: ColorToken,
    /// Border and caret color while hovered or focused.
    pub hover_accent: ColorToken,
    pub icon: ColorToken,
    pub cursor: Cursor,
    /// Keyboard focus order; `-1` removes the control from tab navigation.
    pub tab_index: i32,
}

impl ControlAppearance {
    /// Appearance for a control with the given state.
    pub fn new(disabled: bool, status: InputStatus) -> Self {
        let icon = if disabled {
            ColorToken::Black300
        } else {
            match status {
                InputStatus::Error => ColorToken::Red500,
                InputStatus::Success => ColorToken::Green300,
                InputStatus::Normal => ColorToken::Black400,
            }
        };

        Self {
            background: if disabled {
                ColorToken::Black50
            } else {
                ColorToken::White
            },
            border: status.border_color(),
            hover_accent: ColorToken::Primary300,
            icon,
            cursor: if disabled {
                Cursor::NotAllowed
            } else {
                Cursor::Pointer
            },
            tab_index: if disabled { -1 } else { 0 },
        }
    }
}

/// How one popup item should look.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemAppearance {
    pub background: ColorToken,
    pub text: ColorToken,
    /// Stable class name derived from the item key.
    pub class_name: String,
}

impl ItemAppearance {
    /// Appearance for an item given its key and interaction state.
    ///
    /// Highlight takes precedence over selection.
    pub fn new(key: &str, highlighted: bool, selected: bool) -> Self {
        let background = if highlighted {
            ColorToken::Black100
        } else if selected {
            ColorToken::Primary500
        } else {
            ColorToken::White
        };
        let text = if selected && !highlighted {
            ColorToken::White
        } else {
            ColorToken::Black800
        };

        Self {
            background,
            text,
            class_name: format!("select-{key}"),
        }
    }
}
