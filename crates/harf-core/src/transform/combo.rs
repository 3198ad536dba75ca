// Harf Diacritic Combination Matching
// Finds a two-key rule for the trailing letter of the buffer

use crate::mapping::{CompositeKey, DiacriticMap};
use crate::state::OutputBuffer;

/// A diacritic rule that applies to the current keystroke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombinationMatch {
    /// The composite key that matched
    pub key: CompositeKey,
    /// Replacement for the trailing letter
    pub result: char,
}

/// Find the combination rule for `input` typed after the buffer's last letter.
///
/// Returns `None` at the start of the buffer, after a space, or when no rule
/// is keyed by `last_letter + input`. Earlier words are never consulted.
pub fn find_combination(
    buffer: &OutputBuffer,
    input: char,
    rules: &DiacriticMap,
) -> Option<CombinationMatch> {
    let base = buffer.last_letter()?;
    let key = CompositeKey::new(base, input);
    rules.get(key).map(|result| CombinationMatch { key, result })
}
