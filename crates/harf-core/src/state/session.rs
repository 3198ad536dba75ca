// Harf Session
// An engine plus the buffer it edits, behaving like a text field

use std::mem;

use crate::input::InputEvent;
use crate::state::OutputBuffer;
use crate::transform::{TransformResult, TransliterationEngine};

/// A typing session.
///
/// Owns exactly one [`OutputBuffer`]. Keystrokes the engine does not handle
/// are inserted verbatim, the way a native text field would.
#[derive(Debug, Clone, Default)]
pub struct Session {
    engine: TransliterationEngine,
    buffer: OutputBuffer,
}

impl Session {
    /// Start a session with an empty buffer
    pub fn new(engine: TransliterationEngine) -> Self {
        Self {
            engine,
            buffer: OutputBuffer::new(),
        }
    }

    pub fn engine(&self) -> &TransliterationEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut TransliterationEngine {
        &mut self.engine
    }

    pub fn buffer(&self) -> &OutputBuffer {
        &self.buffer
    }

    /// Current text
    pub fn text(&self) -> &str {
        self.buffer.as_str()
    }

    /// Physical keystroke
    pub fn keystroke(&mut self, input: char) -> TransformResult {
        let buffer = mem::take(&mut self.buffer);
        let (mut buffer, result) = self.engine.handle_keystroke(buffer, input);
        if !result.is_handled() {
            buffer.push(input);
        }
        self.buffer = buffer;
        result
    }

    /// Click on an on-screen key
    pub fn click(&mut self, ch: char) {
        let buffer = mem::take(&mut self.buffer);
        self.buffer = self.engine.append_literal(buffer, ch);
    }

    /// Direct edit of the whole text
    pub fn replace(&mut self, text: impl Into<String>) {
        self.buffer = self.engine.set_buffer(text);
    }

    /// Dispatch one boundary event.
    ///
    /// Returns the transform result for keystrokes, `None` otherwise.
    pub fn apply(&mut self, event: InputEvent) -> Option<TransformResult> {
        log::trace!("session event: {}", event);
        match event {
            InputEvent::Keystroke(ch) => Some(self.keystroke(ch)),
            InputEvent::Click(ch) => {
                self.click(ch);
                None
            }
            InputEvent::Replace(text) => {
                self.replace(text);
                None
            }
        }
    }

    /// Type every character of `text` as a physical keystroke
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.keystroke(ch);
        }
    }

    /// Delete the trailing character as a direct edit
    pub fn backspace(&mut self) {
        let mut text = self.buffer.as_str().to_string();
        if text.pop().is_some() {
            self.replace(text);
        }
    }

    pub fn clear(&mut self) {
        self.replace(String::new());
    }

    /// End the session, returning the final buffer
    pub fn into_buffer(self) -> OutputBuffer {
        self.buffer
    }
}
