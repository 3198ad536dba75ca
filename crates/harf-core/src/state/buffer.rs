// Harf Output Buffer
// The accumulated text of a typing session

use std::fmt;

/// Separator used to find the word the cursor is in
pub const WORD_SEPARATOR: char = ' ';

/// Accumulated output text.
///
/// Created empty, mutated only through the engine operations, never
/// persisted. The trailing character of the last word is the lookback
/// context for diacritic combination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct OutputBuffer {
    text: String,
}

impl OutputBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// View the buffer as a string slice
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consume the buffer, returning the text
    pub fn into_string(self) -> String {
        self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of characters (not bytes)
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Last character of the last space-separated word.
    ///
    /// `None` when the buffer is empty or ends with a space. Only the space
    /// character separates words; a trailing newline is a letter here.
    pub fn last_letter(&self) -> Option<char> {
        let last_word = self.text.rsplit(WORD_SEPARATOR).next()?;
        last_word.chars().next_back()
    }

    /// Append one character
    pub fn push(&mut self, ch: char) {
        self.text.push(ch);
    }

    /// Remove and return the trailing character
    pub fn pop(&mut self) -> Option<char> {
        self.text.pop()
    }

    /// Replace the trailing character with `ch`.
    ///
    /// On an empty buffer this just appends.
    pub fn replace_last(&mut self, ch: char) {
        self.text.pop();
        self.text.push(ch);
    }

    /// Empty the buffer
    pub fn clear(&mut self) {
        self.text.clear();
    }
}

impl fmt::Display for OutputBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<String> for OutputBuffer {
    fn from(text: String) -> Self {
        Self { text }
    }
}

impl From<&str> for OutputBuffer {
    fn from(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

impl From<OutputBuffer> for String {
    fn from(buffer: OutputBuffer) -> Self {
        buffer.text
    }
}

impl AsRef<str> for OutputBuffer {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_is_empty() {
        let buffer = OutputBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.as_str(), "");
        assert_eq!(buffer.last_letter(), None);
    }

    #[test]
    fn test_last_letter_of_last_word() {
        assert_eq!(OutputBuffer::from("ب ت").last_letter(), Some('ت'));
        assert_eq!(OutputBuffer::from("كتب").last_letter(), Some('ب'));
        assert_eq!(OutputBuffer::from("x").last_letter(), Some('x'));
    }

    #[test]
    fn test_no_last_letter_after_space() {
        assert_eq!(OutputBuffer::from("ت ").last_letter(), None);
        assert_eq!(OutputBuffer::from(" ").last_letter(), None);
        assert_eq!(OutputBuffer::from("ت  ").last_letter(), None);
    }

    #[test]
    fn test_newline_is_not_a_separator() {
        assert_eq!(OutputBuffer::from("ت\n").last_letter(), Some('\n'));
    }

    #[test]
    fn test_replace_last_is_char_aware() {
        let mut buffer = OutputBuffer::from("بت");
        buffer.replace_last('ث');
        assert_eq!(buffer.as_str(), "بث");
        assert_eq!(buffer.char_len(), 2);
    }

    #[test]
    fn test_replace_last_on_empty_appends() {
        let mut buffer = OutputBuffer::new();
        buffer.replace_last('ث');
        assert_eq!(buffer.as_str(), "ث");
    }

    #[test]
    fn test_string_conversions() {
        let buffer = OutputBuffer::from(String::from("سلام"));
        assert_eq!(buffer.to_string(), "سلام");
        let text: String = buffer.into();
        assert_eq!(text, "سلام");
    }
}
