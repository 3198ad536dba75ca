// Harf TUI
// Interactive on-screen Arabic keyboard in the terminal

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use harf_core::config::load_layout;
use harf_core::settings::Settings;

/// Interactive Latin-to-Arabic keyboard
#[derive(Parser, Debug)]
#[command(name = "harf-tui")]
#[command(version)]
#[command(about = "Interactive Latin-to-Arabic keyboard", long_about = None)]
struct Args {
    /// TOML layout file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// TOML settings file
    #[arg(long, value_name = "SETTINGS")]
    settings: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // The alternate screen owns the terminal; only log when asked to
    if std::env::var_os("RUST_LOG").is_some() {
        env_logger::init();
    }

    let settings = match &args.settings {
        Some(path) => Settings::from_file(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => Settings::load_default().context("failed to load default settings")?,
    };

    let layout_path = args.config.as_deref().or_else(|| settings.layout_path());
    let layout = load_layout(layout_path).context("failed to load layout")?;

    harf::tui::run(layout, &settings).context("terminal UI failed")
}
