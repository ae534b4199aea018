//! Input events understood by the select.

/// Keys the select reacts to.
///
/// Hosts translate their own keyboard events into this enum; any other key
/// maps to [`Key::Other`] and is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Enter,
    Escape,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    Other,
}

impl Key {
    /// Parse a DOM-style key name (`"Enter"`, `"ArrowDown"`, ...).
    pub fn from_name(name: &str) -> Self {
        match name {
            "Enter" => Self::Enter,
            "Escape" | "Esc" => Self::Escape,
            "ArrowUp" | "Up" => Self::ArrowUp,
            "ArrowDown" | "Down" => Self::ArrowDown,
            "Home" => Self::Home,
            "End" => Self::End,
            _ => Self::Other,
        }
    }
}
