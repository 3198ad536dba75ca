// Harf Layout Parser - TOML with Serde
// Extends or replaces the built-in tables from a layout file

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::mapping::{CharacterMap, CompositeKey, DiacriticMap, Layout, MappingError};
use crate::tables::{ADDITIONAL_TABLE, BASIC_TABLE};

/// Name of the diacritic table in layout files
pub const DIACRITIC_TABLE: &str = "diacritics";

/// Layout parser errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("Invalid entry in [{table}]: '{entry}' {reason}")]
    InvalidEntry {
        table: String,
        entry: String,
        reason: String,
    },

    #[error("Invalid layout: {0}")]
    Mapping(#[from] MappingError),
}

/// Root TOML table of a layout file
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct LayoutToml {
    /// General layout settings
    #[serde(default)]
    pub layout: Option<LayoutSection>,

    /// Single Latin letter -> Arabic letter
    #[serde(default)]
    pub letters: IndexMap<String, String>,

    /// Punctuation key -> output
    #[serde(default)]
    pub punctuation: IndexMap<String, String>,

    /// Two-character composite key -> diacritic letter
    #[serde(default)]
    pub diacritics: IndexMap<String, String>,
}

/// `[layout]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutSection {
    /// Display name
    pub name: Option<String>,

    /// Start from the built-in tables (default true)
    #[serde(default = "default_inherit")]
    pub inherit_builtin: bool,
}

fn default_inherit() -> bool {
    true
}

/// Validated layout file contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Display name (None keeps the base layout's name)
    pub name: Option<String>,
    /// Whether the built-in tables are the starting point
    pub inherit_builtin: bool,
    /// Letter entries, in file order
    pub letters: Vec<(char, char)>,
    /// Punctuation entries, in file order
    pub punctuation: Vec<(char, char)>,
    /// Diacritic rules, in file order
    pub diacritics: Vec<(CompositeKey, char)>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            name: None,
            inherit_builtin: true,
            letters: vec![],
            punctuation: vec![],
            diacritics: vec![],
        }
    }
}

impl LayoutConfig {
    /// Parse a TOML layout file
    pub fn from_toml_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse a layout from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let toml_layout: LayoutToml =
            toml::from_str(content).map_err(|e| ConfigError::TomlParse(e.to_string()))?;
        toml_layout.to_config()
    }

    /// Build the final tables.
    ///
    /// File entries override inherited entries of the same table. A key
    /// ending up in both letters and punctuation is rejected.
    pub fn into_layout(self) -> Result<Layout, ConfigError> {
        let (name, mut basic, mut additional, mut diacritics) = if self.inherit_builtin {
            let builtin = Layout::builtin();
            (
                builtin.name().to_string(),
                builtin.basic().clone(),
                builtin.additional().clone(),
                builtin.diacritics().clone(),
            )
        } else {
            (
                "custom".to_string(),
                CharacterMap::new(BASIC_TABLE),
                CharacterMap::new(ADDITIONAL_TABLE),
                DiacriticMap::new(),
            )
        };

        for (input, output) in self.letters {
            if let Some(previous) = basic.insert(input, output) {
                log::debug!("[{}] '{}': {} -> {}", BASIC_TABLE, input, previous, output);
            }
        }
        for (input, output) in self.punctuation {
            if let Some(previous) = additional.insert(input, output) {
                log::debug!("[{}] '{}': {} -> {}", ADDITIONAL_TABLE, input, previous, output);
            }
        }
        for (key, result) in self.diacritics {
            if let Some(previous) = diacritics.insert(key, result) {
                log::debug!("[{}] '{}': {} -> {}", DIACRITIC_TABLE, key, previous, result);
            }
        }

        let name = self.name.unwrap_or(name);
        let layout = Layout::new(name, basic, additional, diacritics)?;
        log::debug!(
            "layout '{}': {} keys, {} diacritic rules",
            layout.name(),
            layout.active().len(),
            layout.diacritics().len()
        );
        Ok(layout)
    }
}

impl LayoutToml {
    /// Validate entries and convert to the internal representation
    pub fn to_config(&self) -> Result<LayoutConfig, ConfigError> {
        let (name, inherit_builtin) = match &self.layout {
            Some(section) => (section.name.clone(), section.inherit_builtin),
            None => (None, true),
        };

        let letters = parse_char_table(BASIC_TABLE, &self.letters)?;
        let punctuation = parse_char_table(ADDITIONAL_TABLE, &self.punctuation)?;

        let mut diacritics = Vec::with_capacity(self.diacritics.len());
        for (key, value) in &self.diacritics {
            let composite: CompositeKey = key.parse().map_err(|_| ConfigError::InvalidEntry {
                table: DIACRITIC_TABLE.to_string(),
                entry: key.clone(),
                reason: "key must be exactly two characters".to_string(),
            })?;
            let result = single_char(DIACRITIC_TABLE, key, value)?;
            diacritics.push((composite, result));
        }

        Ok(LayoutConfig {
            name,
            inherit_builtin,
            letters,
            punctuation,
            diacritics,
        })
    }
}

/// Load the layout at `path`, or the built-in layout when no path is given
pub fn load_layout(path: Option<&Path>) -> Result<Layout, ConfigError> {
    match path {
        Some(path) => {
            log::info!("loading layout from {}", path.display());
            LayoutConfig::from_toml_path(path)?.into_layout()
        }
        None => Ok(Layout::builtin()),
    }
}

fn parse_char_table(
    table: &str,
    entries: &IndexMap<String, String>,
) -> Result<Vec<(char, char)>, ConfigError> {
    let mut out = Vec::with_capacity(entries.len());
    for (key, value) in entries {
        let input = single_char(table, key, key)?;
        let output = single_char(table, key, value)?;
        out.push((input, output));
    }
    Ok(out)
}

fn single_char(table: &str, entry: &str, s: &str) -> Result<char, ConfigError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(ConfigError::InvalidEntry {
            table: table.to_string(),
            entry: entry.to_string(),
            reason: format!("'{}' must be exactly one character", s),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_builtin() {
        let layout = LayoutConfig::from_toml("").unwrap().into_layout().unwrap();
        assert_eq!(layout, Layout::builtin());
    }

    #[test]
    fn test_extend_builtin() {
        let toml = r#"
[layout]
name = "extended"

[letters]
"G" = "غ"

[diacritics]
"ك'" = "گ"
"#;
        let layout = LayoutConfig::from_toml(toml).unwrap().into_layout().unwrap();
        assert_eq!(layout.name(), "extended");
        assert_eq!(layout.active().get('G'), Some('غ'));
        assert_eq!(layout.active().get('t'), Some('ت'));
        assert_eq!(layout.diacritics().combine('ك', '\''), Some('گ'));
        assert_eq!(layout.diacritics().combine('ت', '\''), Some('ث'));
    }

    #[test]
    fn test_override_keeps_position() {
        let toml = r#"
[letters]
"q" = "ڤ"
"#;
        let layout = LayoutConfig::from_toml(toml).unwrap().into_layout().unwrap();
        assert_eq!(layout.active().get('q'), Some('ڤ'));
        assert_eq!(layout.key_caps()[0].arabic, 'ڤ');
    }

    #[test]
    fn test_standalone_layout() {
        let toml = r#"
[layout]
inherit_builtin = false

[letters]
"b" = "ب"
"#;
        let layout = LayoutConfig::from_toml(toml).unwrap().into_layout().unwrap();
        assert_eq!(layout.name(), "custom");
        assert_eq!(layout.active().len(), 1);
        assert!(layout.diacritics().is_empty());
    }

    #[test]
    fn test_collision_between_tables_rejected() {
        let toml = r#"
[punctuation]
"t" = "."
"#;
        let err = LayoutConfig::from_toml(toml).unwrap().into_layout().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Mapping(MappingError::KeyCollision { key: 't', .. })
        ));
    }

    #[test]
    fn test_multi_char_entry_rejected() {
        let toml = r#"
[letters]
"th" = "ث"
"#;
        let err = LayoutConfig::from_toml(toml).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEntry { ref table, .. } if table == "letters"));
    }

    #[test]
    fn test_bad_composite_key_rejected() {
        let toml = r#"
[diacritics]
"ت" = "ث"
"#;
        let err = LayoutConfig::from_toml(toml).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEntry { ref table, .. } if table == "diacritics"));
    }

    #[test]
    fn test_unknown_section_rejected() {
        let err = LayoutConfig::from_toml("[colors]\nbg = \"black\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_load_layout_without_path() {
        assert_eq!(load_layout(None).unwrap(), Layout::builtin());
    }
}
