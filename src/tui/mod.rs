mod app;
mod clipboard;
mod handlers;
mod theme;
mod ui;

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use harf_core::mapping::Layout;
use harf_core::settings::Settings;
use ratatui::prelude::*;

use app::App;
use handlers::handle_input;
use ui::draw_ui;

/// Short poll so toasts expire without a keypress
const POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Run the interactive keyboard until the user quits
pub fn run(layout: Layout, settings: &Settings) -> io::Result<()> {
    let mut app = App::new(layout, settings);
    log::info!(
        "starting TUI with layout {} ({} keys)",
        app.layout().name(),
        app.key_caps.len()
    );

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = loop {
        if let Err(err) = terminal.draw(|f| draw_ui(f, &app)) {
            break Err(err);
        }

        let key = match next_key_press(
            || event::poll(POLL_INTERVAL),
            event::read,
        ) {
            Ok(Some(key)) => key,
            Ok(None) => continue,
            // Leave the loop so the terminal is restored below
            Err(err) => break Err(err),
        };

        if handle_input(&mut app, key) {
            break Ok(());
        }
    };

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}

/// Wait one poll interval for a key press.
///
/// `Ok(None)` when nothing arrived or the event was not a key press.
fn next_key_press<P, R>(poll: P, read: R) -> io::Result<Option<KeyEvent>>
where
    P: FnOnce() -> io::Result<bool>,
    R: FnOnce() -> io::Result<Event>,
{
    if !poll()? {
        return Ok(None);
    }
    match read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
        _ => Ok(None),
    }
}
