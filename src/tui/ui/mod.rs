mod editor_panel;
mod footer;
mod header;
mod keyboard_panel;
mod rules_panel;

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders};

use crate::tui::app::App;
use crate::tui::theme::theme;

pub fn draw_ui(frame: &mut Frame, app: &App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                            // Header
            Constraint::Min(5),                               // Editor
            Constraint::Length(keyboard_panel::height(app)),  // On-screen keyboard
            Constraint::Length(9),                            // Rules
            Constraint::Length(2),                            // Footer
        ])
        .split(frame.area());

    header::render(frame, app, root[0]);
    editor_panel::render(frame, app, root[1]);
    keyboard_panel::render(frame, app, root[2]);
    rules_panel::render(frame, app, root[3]);
    footer::render(frame, app, root[4]);
}

/// Bordered block shared by the panes
fn pane_block(title: &str, focused: bool) -> Block<'static> {
    let t = theme();
    Block::default()
        .title(t.panel_title(title, focused))
        .borders(Borders::ALL)
        .border_style(t.panel_border(focused))
        .border_type(if focused {
            BorderType::Thick
        } else {
            BorderType::Plain
        })
}
