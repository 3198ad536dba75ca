use harf_core::clipboard::{ClipboardError, ClipboardSink};

/// System clipboard backed by arboard
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        Ok(Self {
            inner: arboard::Clipboard::new().map_err(to_clipboard_error)?,
        })
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.inner
            .set_text(text.to_string())
            .map_err(to_clipboard_error)
    }
}

fn to_clipboard_error(err: arboard::Error) -> ClipboardError {
    ClipboardError::new(err.to_string())
}
