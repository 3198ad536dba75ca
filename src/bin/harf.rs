// Harf CLI
// Transliterate Latin keystrokes into Arabic text from the command line

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use harf_core::config::load_layout;
use harf_core::mapping::Layout;
use harf_core::settings::Settings;
use harf_core::state::Session;
use harf_core::transform::{TransformConfig, TransliterationEngine};

/// Latin-to-Arabic transliteration keyboard
#[derive(Parser, Debug)]
#[command(name = "harf")]
#[command(version)]
#[command(about = "Latin-to-Arabic transliteration keyboard", long_about = None)]
struct Args {
    /// Text to transliterate; reads stdin line by line when omitted
    #[arg(value_name = "TEXT")]
    text: Vec<String>,

    /// TOML layout file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// TOML settings file
    #[arg(long, value_name = "SETTINGS")]
    settings: Option<PathBuf>,

    /// Disable diacritic combination
    #[arg(long)]
    no_combine: bool,

    /// Print the key table and exit
    #[arg(long)]
    list_keys: bool,

    /// Print the combination rules and exit
    #[arg(long)]
    list_rules: bool,

    /// Validate the layout and exit
    #[arg(long)]
    check_config: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(default_level);
    let mut builder = env_logger::Builder::from_env(env);
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

fn load_settings(args: &Args) -> Result<Settings> {
    match &args.settings {
        Some(path) => Settings::from_file(path)
            .with_context(|| format!("failed to load settings from {}", path.display())),
        None => Settings::load_default().context("failed to load default settings"),
    }
}

fn load_engine(args: &Args, settings: &Settings) -> Result<TransliterationEngine> {
    // --config wins over the layout named in settings
    let layout_path = args.config.as_deref().or_else(|| settings.layout_path());
    let layout = load_layout(layout_path).with_context(|| match layout_path {
        Some(path) => format!("failed to load layout from {}", path.display()),
        None => "failed to build built-in layout".to_string(),
    })?;
    log::debug!(
        "layout {}: {} keys, {} combinations",
        layout.name(),
        layout.active().len(),
        layout.diacritics().len()
    );

    let mut config = TransformConfig::from_settings(layout, settings);
    if args.no_combine {
        config.combine_diacritics = false;
    }
    Ok(TransliterationEngine::new(config))
}

/// Type one line through a fresh session
fn transliterate_line(engine: &TransliterationEngine, line: &str) -> String {
    let mut session = Session::new(engine.clone());
    session.type_text(line);
    session.into_buffer().into_string()
}

fn list_keys(layout: &Layout, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Layout {} ({} keys):", layout.name(), layout.active().len())?;
    for (latin, arabic) in layout.active().iter() {
        writeln!(out, "  {}  {}", latin, arabic)?;
    }
    Ok(())
}

fn list_rules(layout: &Layout, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{} combination rule(s):", layout.diacritics().len())?;
    for (key, result) in layout.diacritics().iter() {
        writeln!(out, "  {} + {}  ->  {}", key.base, key.trigger, result)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let settings = load_settings(&args)?;
    let engine = load_engine(&args, &settings)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.check_config {
        writeln!(
            out,
            "Layout {} is valid ({} keys, {} combinations)",
            engine.layout().name(),
            engine.layout().active().len(),
            engine.layout().diacritics().len()
        )?;
        return Ok(());
    }

    if args.list_keys || args.list_rules {
        if args.list_keys {
            list_keys(engine.layout(), &mut out)?;
        }
        if args.list_rules {
            list_rules(engine.layout(), &mut out)?;
        }
        return Ok(());
    }

    if !args.text.is_empty() {
        writeln!(out, "{}", transliterate_line(&engine, &args.text.join(" ")))?;
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read stdin")?;
        writeln!(out, "{}", transliterate_line(&engine, &line))?;
    }
    Ok(())
}
