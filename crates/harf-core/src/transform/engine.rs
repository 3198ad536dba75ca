// Harf Transliteration Engine
// Keystroke interception, single-key substitution and diacritic combination
//
// Every operation takes the buffer by value and hands back the updated
// buffer, so the engine holds no per-session state of its own:
// - handle_keystroke: physical key press, with one-letter lookback
// - append_literal: clicked on-screen key, never combines
// - set_buffer: direct edit of the text field

use std::sync::Arc;

use crate::mapping::Layout;
use crate::settings::Settings;
use crate::state::OutputBuffer;
use crate::transform::combo::find_combination;

/// Configuration for the transliteration engine
#[derive(Debug, Clone)]
pub struct TransformConfig {
    /// Lookup tables
    pub layout: Layout,
    /// Apply diacritic combination rules on physical keystrokes
    pub combine_diacritics: bool,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            layout: Layout::builtin(),
            combine_diacritics: true,
        }
    }
}

impl TransformConfig {
    /// Build a config for `layout` with feature toggles taken from settings
    pub fn from_settings(layout: Layout, settings: &Settings) -> Self {
        Self {
            layout,
            combine_diacritics: settings.combine_diacritics(),
        }
    }
}

/// Result of handling a single keystroke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformResult {
    /// Not in the active map; the host inserts the key itself
    Passthrough,
    /// Translation appended to the buffer
    Translated(char),
    /// Trailing `base` replaced by the diacritic `result`
    Combined { base: char, result: char },
}

impl TransformResult {
    /// True if the keystroke was intercepted (default insertion suppressed)
    pub fn is_handled(self) -> bool {
        !matches!(self, TransformResult::Passthrough)
    }

    /// Character written into the buffer, if any
    pub fn output(self) -> Option<char> {
        match self {
            TransformResult::Passthrough => None,
            TransformResult::Translated(ch) => Some(ch),
            TransformResult::Combined { result, .. } => Some(result),
        }
    }
}

/// Latin-to-Arabic transliteration engine
#[derive(Debug, Clone)]
pub struct TransliterationEngine {
    layout: Arc<Layout>,
    combine_diacritics: bool,
}

impl Default for TransliterationEngine {
    fn default() -> Self {
        Self::new(TransformConfig::default())
    }
}

impl TransliterationEngine {
    /// Create a new engine
    pub fn new(config: TransformConfig) -> Self {
        Self {
            layout: Arc::new(config.layout),
            combine_diacritics: config.combine_diacritics,
        }
    }

    /// Read-only view of the tables, for rendering keys and rules
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn combine_diacritics(&self) -> bool {
        self.combine_diacritics
    }

    pub fn set_combine_diacritics(&mut self, enabled: bool) {
        self.combine_diacritics = enabled;
    }

    /// Single-key translation, ignoring context
    pub fn translate(&self, input: char) -> Option<char> {
        self.layout.active().get(input)
    }

    /// Handle one physical keystroke.
    ///
    /// Unmapped keys leave the buffer untouched and report
    /// [`TransformResult::Passthrough`]. Mapped keys either collapse the
    /// trailing letter of the last word into a diacritic letter or append
    /// their translation.
    pub fn handle_keystroke(
        &self,
        mut buffer: OutputBuffer,
        input: char,
    ) -> (OutputBuffer, TransformResult) {
        let Some(translated) = self.translate(input) else {
            log::trace!("key {:?} not mapped, passing through", input);
            return (buffer, TransformResult::Passthrough);
        };

        if self.combine_diacritics {
            if let Some(found) = find_combination(&buffer, input, self.layout.diacritics()) {
                log::debug!("combining {} -> {}", found.key, found.result);
                buffer.replace_last(found.result);
                let result = TransformResult::Combined {
                    base: found.key.base,
                    result: found.result,
                };
                return (buffer, result);
            }
        }

        log::trace!("key {:?} -> {:?}", input, translated);
        buffer.push(translated);
        (buffer, TransformResult::Translated(translated))
    }

    /// Append a clicked key's character. Never combines.
    pub fn append_literal(&self, mut buffer: OutputBuffer, ch: char) -> OutputBuffer {
        buffer.push(ch);
        buffer
    }

    /// Replace the buffer wholesale. Any text is accepted.
    pub fn set_buffer(&self, text: impl Into<String>) -> OutputBuffer {
        OutputBuffer::from(text.into())
    }
}
