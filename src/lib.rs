// Harf front ends shared by the binaries

#[cfg(feature = "cli")]
pub mod tui;
