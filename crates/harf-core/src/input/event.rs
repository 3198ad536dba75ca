// Harf Input Layer - Boundary Events
// What the hosting text field can deliver to a session

use std::fmt;

/// One event from the hosting text field or on-screen keyboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Physical key press carrying the typed character
    Keystroke(char),
    /// Click on an on-screen key carrying its Arabic character
    Click(char),
    /// Direct edit of the text field (paste, delete, ...)
    Replace(String),
}

impl InputEvent {
    /// Returns true for physical key presses, the only events that can combine
    pub fn is_keystroke(&self) -> bool {
        matches!(self, InputEvent::Keystroke(_))
    }
}

impl fmt::Display for InputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputEvent::Keystroke(ch) => write!(f, "keystroke {:?}", ch),
            InputEvent::Click(ch) => write!(f, "click {:?}", ch),
            InputEvent::Replace(text) => write!(f, "replace ({} chars)", text.chars().count()),
        }
    }
}
