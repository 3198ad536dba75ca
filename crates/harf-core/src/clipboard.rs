// Harf Clipboard Boundary
// Copying the buffer out and turning the outcome into a notification

use std::fmt;

use crate::state::OutputBuffer;

/// Message shown after a successful copy
pub const COPY_SUCCESS_MESSAGE: &str = "Text copied to clipboard!";

/// Failure reported by a clipboard backend
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ClipboardError {
    message: String,
}

impl ClipboardError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Something that can receive plain text, e.g. the system clipboard
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
}

/// Transient user-facing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Failure,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == NotificationKind::Success
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Copy the buffer's text into `sink`.
///
/// Errors never escape: they become a failure notification. The buffer is
/// only borrowed, so a failed copy cannot alter it.
pub fn copy_buffer<S: ClipboardSink + ?Sized>(buffer: &OutputBuffer, sink: &mut S) -> Notification {
    copy_text(buffer.as_str(), sink)
}

/// Copy an already-snapshotted text into `sink`
pub fn copy_text<S: ClipboardSink + ?Sized>(text: &str, sink: &mut S) -> Notification {
    match sink.set_text(text) {
        Ok(()) => {
            log::debug!("copied {} chars to clipboard", text.chars().count());
            Notification::success(COPY_SUCCESS_MESSAGE)
        }
        Err(err) => {
            log::warn!("clipboard copy failed: {}", err);
            Notification::failure(format!("Failed to copy text: {}", err))
        }
    }
}
