// Harf Mapping Structures
// CharacterMap, ActiveMap, CompositeKey, DiacriticMap, Layout

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;

use crate::tables::{
    ADDITIONAL_KEYS, ADDITIONAL_TABLE, BASIC_LETTERS, BASIC_TABLE, DIACRITIC_RULES,
};

/// Errors that can occur while assembling lookup tables
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MappingError {
    #[error("key '{key}' is defined in both '{first}' and '{second}'")]
    KeyCollision {
        key: char,
        first: String,
        second: String,
    },

    #[error("composite key must be exactly two characters, got '{0}'")]
    InvalidCompositeKey(String),
}

/// Single-character substitution table (one input char -> one output char)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterMap {
    name: String,
    mappings: IndexMap<char, char>,
}

impl CharacterMap {
    /// Create an empty map
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mappings: IndexMap::new(),
        }
    }

    /// Create a map from `(input, output)` pairs, keeping their order
    pub fn from_pairs(name: impl Into<String>, pairs: &[(char, char)]) -> Self {
        Self {
            name: name.into(),
            mappings: pairs.iter().copied().collect(),
        }
    }

    /// Get the name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the mappings
    pub fn mappings(&self) -> &IndexMap<char, char> {
        &self.mappings
    }

    /// Insert or replace an entry, returning the previous output
    pub fn insert(&mut self, input: char, output: char) -> Option<char> {
        self.mappings.insert(input, output)
    }

    /// Check if a key is in this map
    pub fn contains(&self, input: char) -> bool {
        self.mappings.contains_key(&input)
    }

    /// Get the output for a given input character
    pub fn get(&self, input: char) -> Option<char> {
        self.mappings.get(&input).copied()
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// Iterate over `(input, output)` in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.mappings.iter().map(|(k, v)| (*k, *v))
    }
}

/// The effective single-key lookup table: the union of the basic letter
/// map and the punctuation map.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActiveMap {
    mappings: IndexMap<char, char>,
}

impl ActiveMap {
    /// Merge several maps into one, rejecting any key that appears in
    /// more than one source.
    pub fn merge(sources: &[&CharacterMap]) -> Result<Self, MappingError> {
        let mut owners: IndexMap<char, &str> = IndexMap::new();
        let mut mappings = IndexMap::new();

        for source in sources {
            for (input, output) in source.iter() {
                if let Some(first) = owners.get(&input) {
                    return Err(MappingError::KeyCollision {
                        key: input,
                        first: (*first).to_string(),
                        second: source.name().to_string(),
                    });
                }
                owners.insert(input, source.name());
                mappings.insert(input, output);
            }
        }

        Ok(Self { mappings })
    }

    /// Check if a key is intercepted
    pub fn contains(&self, input: char) -> bool {
        self.mappings.contains_key(&input)
    }

    /// Get the translation of an input character
    pub fn get(&self, input: char) -> Option<char> {
        self.mappings.get(&input).copied()
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// Iterate over `(input, output)`, basic letters first
    pub fn iter(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.mappings.iter().map(|(k, v)| (*k, *v))
    }
}

/// Two-character diacritic key: the last committed output character
/// followed by the newly typed input character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompositeKey {
    pub base: char,
    pub trigger: char,
}

impl CompositeKey {
    pub fn new(base: char, trigger: char) -> Self {
        Self { base, trigger }
    }
}

impl fmt::Display for CompositeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.base, self.trigger)
    }
}

impl FromStr for CompositeKey {
    type Err = MappingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(base), Some(trigger), None) => Ok(Self { base, trigger }),
            _ => Err(MappingError::InvalidCompositeKey(s.to_string())),
        }
    }
}

/// Diacritic combination rules (composite key -> replacement character)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DiacriticMap {
    mappings: IndexMap<CompositeKey, char>,
}

impl DiacriticMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a map from `(base, trigger, result)` triples
    pub fn from_rules(rules: &[(char, char, char)]) -> Self {
        Self {
            mappings: rules
                .iter()
                .map(|(base, trigger, result)| (CompositeKey::new(*base, *trigger), *result))
                .collect(),
        }
    }

    /// Insert or replace a rule, returning the previous result
    pub fn insert(&mut self, key: CompositeKey, result: char) -> Option<char> {
        self.mappings.insert(key, result)
    }

    /// Exact-match lookup
    pub fn get(&self, key: CompositeKey) -> Option<char> {
        self.mappings.get(&key).copied()
    }

    /// Look up the rule for `base` followed by `trigger`
    pub fn combine(&self, base: char, trigger: char) -> Option<char> {
        self.get(CompositeKey::new(base, trigger))
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// Iterate over `(key, result)` in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (CompositeKey, char)> + '_ {
        self.mappings.iter().map(|(k, v)| (*k, *v))
    }
}

/// One clickable key of the on-screen keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyCap {
    /// Latin key that produces the glyph
    pub latin: char,
    /// Arabic glyph appended when the key is clicked
    pub arabic: char,
}

/// Complete set of tables the engine works with.
///
/// Immutable once built; the active map is derived at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    name: String,
    basic: CharacterMap,
    additional: CharacterMap,
    active: ActiveMap,
    diacritics: DiacriticMap,
}

impl Layout {
    /// Build a layout, merging `basic` and `additional` into the active map
    pub fn new(
        name: impl Into<String>,
        basic: CharacterMap,
        additional: CharacterMap,
        diacritics: DiacriticMap,
    ) -> Result<Self, MappingError> {
        let active = ActiveMap::merge(&[&basic, &additional])?;
        Ok(Self {
            name: name.into(),
            basic,
            additional,
            active,
            diacritics,
        })
    }

    /// The built-in Arabic layout
    pub fn builtin() -> Self {
        let basic = CharacterMap::from_pairs(BASIC_TABLE, BASIC_LETTERS);
        let additional = CharacterMap::from_pairs(ADDITIONAL_TABLE, ADDITIONAL_KEYS);

        // The built-in tables are disjoint (checked in tests), so the union
        // can be taken directly.
        let mut active = IndexMap::with_capacity(basic.len() + additional.len());
        active.extend(basic.iter());
        active.extend(additional.iter());

        Self {
            name: "arabic".to_string(),
            basic,
            additional,
            active: ActiveMap { mappings: active },
            diacritics: DiacriticMap::from_rules(DIACRITIC_RULES),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn basic(&self) -> &CharacterMap {
        &self.basic
    }

    pub fn additional(&self) -> &CharacterMap {
        &self.additional
    }

    pub fn active(&self) -> &ActiveMap {
        &self.active
    }

    pub fn diacritics(&self) -> &DiacriticMap {
        &self.diacritics
    }

    /// Key caps for the on-screen keyboard, in active-map order
    pub fn key_caps(&self) -> Vec<KeyCap> {
        self.active
            .iter()
            .map(|(latin, arabic)| KeyCap { latin, arabic })
            .collect()
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::builtin()
    }
}
