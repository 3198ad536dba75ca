// Harf Transform Module
// Core transliteration logic for keystroke processing

pub mod combo;
pub mod engine;

pub use combo::{find_combination, CombinationMatch};
pub use engine::{TransformConfig, TransformResult, TransliterationEngine};
