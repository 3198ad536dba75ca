// Harf Settings Module
// User-configurable toggles and front-end preferences

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Feature name for diacritic combination on physical keystrokes
pub const COMBINE_DIACRITICS: &str = "combine_diacritics";

/// Default number of on-screen keyboard columns
pub const DEFAULT_COLUMNS: u16 = 10;

const MIN_COLUMNS: u16 = 1;
const MAX_COLUMNS: u16 = 16;

/// Settings for harf
///
/// Loaded from a TOML file (default: ~/.config/harf/settings.toml).
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Feature toggles (e.g. combine_diacritics)
    features: HashMap<String, bool>,

    /// On-screen keyboard columns
    columns: Option<u16>,

    /// Layout file to load instead of the built-in tables
    layout_path: Option<PathBuf>,

    /// Path to the settings file (for reload)
    source_path: Option<PathBuf>,
}

/// Errors that can occur when loading settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("Invalid setting value: {0}")]
    InvalidValue(String),
}

/// TOML representation for deserializing settings
#[derive(Debug, Clone, serde::Deserialize, Default)]
struct SettingsToml {
    #[serde(default)]
    features: Option<HashMap<String, toml::Value>>,

    #[serde(default)]
    keyboard: Option<KeyboardSettings>,

    #[serde(default)]
    layout: Option<LayoutSettings>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
struct KeyboardSettings {
    #[serde(default)]
    columns: Option<i64>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
struct LayoutSettings {
    #[serde(default)]
    path: Option<PathBuf>,
}

impl Settings {
    /// Create a new empty settings object
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(&path)?;
        let mut settings = Self::from_toml(&content)?;
        settings.source_path = Some(path.as_ref().to_path_buf());
        Ok(settings)
    }

    /// Load settings from TOML string
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        let toml_settings: SettingsToml =
            toml::from_str(content).map_err(|e| SettingsError::TomlParse(e.to_string()))?;

        let mut settings = Self::new();

        if let Some(features) = toml_settings.features {
            for (key, value) in features {
                let bool_value = parse_bool_value(&value)?;
                settings.features.insert(key, bool_value);
            }
        }

        if let Some(keyboard) = toml_settings.keyboard {
            if let Some(columns) = keyboard.columns {
                let clamped = columns.clamp(i64::from(MIN_COLUMNS), i64::from(MAX_COLUMNS));
                if clamped != columns {
                    log::warn!("keyboard.columns {} out of range, using {}", columns, clamped);
                }
                settings.columns = Some(clamped as u16);
            }
        }

        if let Some(layout) = toml_settings.layout {
            settings.layout_path = layout.path;
        }

        Ok(settings)
    }

    /// Get the default settings path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("harf").join("settings.toml"))
    }

    /// Load from default location (~/.config/harf/settings.toml)
    pub fn load_default() -> Result<Self, SettingsError> {
        if let Some(path) = Self::default_path() {
            if path.exists() {
                return Self::from_file(path);
            }
        }
        Ok(Self::new())
    }

    /// Get a boolean feature value (unset features are off)
    pub fn get_bool(&self, name: &str) -> bool {
        self.features.get(name).copied().unwrap_or(false)
    }

    /// Set a boolean feature value
    pub fn set_bool(&mut self, name: &str, value: bool) {
        self.features.insert(name.to_string(), value);
    }

    /// Whether keystrokes may collapse into diacritic letters (on unless disabled)
    pub fn combine_diacritics(&self) -> bool {
        self.features
            .get(COMBINE_DIACRITICS)
            .copied()
            .unwrap_or(true)
    }

    /// On-screen keyboard columns
    pub fn columns(&self) -> u16 {
        self.columns.unwrap_or(DEFAULT_COLUMNS)
    }

    /// Layout file, if one is configured
    pub fn layout_path(&self) -> Option<&Path> {
        self.layout_path.as_deref()
    }

    /// Path the settings were loaded from
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Reload settings from the original file
    pub fn reload(&mut self) -> Result<(), SettingsError> {
        if let Some(ref path) = self.source_path {
            let new_settings = Self::from_file(path)?;
            *self = new_settings;
            Ok(())
        } else {
            Err(SettingsError::InvalidValue("No source path set".to_string()))
        }
    }
}

/// Parse a TOML value as a boolean
fn parse_bool_value(value: &toml::Value) -> Result<bool, SettingsError> {
    match value {
        toml::Value::Boolean(b) => Ok(*b),
        toml::Value::Integer(1) => Ok(true),
        toml::Value::Integer(0) => Ok(false),
        toml::Value::String(s) => match s.to_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Ok(true),
            "false" | "no" | "off" | "0" => Ok(false),
            _ => Err(SettingsError::InvalidValue(format!(
                "Cannot convert '{}' to boolean",
                s
            ))),
        },
        _ => Err(SettingsError::InvalidValue(format!(
            "Cannot convert {:?} to boolean",
            value
        ))),
    }
}

/// Create default settings content for a new installation
pub fn default_settings_content() -> &'static str {
    r#"# Harf Settings
# Place this file at: ~/.config/harf/settings.toml

[features]
# Collapse a letter followed by its trigger key (e.g. t then ') into
# the diacritic letter (ث)
combine_diacritics = true

[keyboard]
# Columns of the on-screen keyboard in harf-tui
columns = 10

[layout]
# Optional layout file extending or replacing the built-in tables
# path = "/home/me/.config/harf/layout.toml"
"#
}
