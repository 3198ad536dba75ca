// Harf Core Library
// Latin-to-Arabic transliteration: tables, engine and session state

pub mod clipboard;
pub mod config;
pub mod input;
pub mod mapping;
pub mod settings;
pub mod state;
pub mod tables;
pub mod transform;

pub use clipboard::{copy_buffer, ClipboardError, ClipboardSink, Notification, NotificationKind};
pub use config::{load_layout, ConfigError, LayoutConfig};
pub use input::InputEvent;
pub use mapping::{ActiveMap, CharacterMap, CompositeKey, DiacriticMap, KeyCap, Layout, MappingError};
pub use settings::{Settings, SettingsError};
pub use state::{OutputBuffer, Session};
pub use transform::{TransformConfig, TransformResult, TransliterationEngine};
