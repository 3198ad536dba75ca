// Harf Config API
// Layout files that extend or replace the built-in tables

pub mod parser;

pub use parser::{load_layout, ConfigError, LayoutConfig, LayoutSection, LayoutToml};
