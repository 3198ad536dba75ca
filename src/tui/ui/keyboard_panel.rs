use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Pane};
use crate::tui::theme::theme;

/// Rows needed for the grid plus borders
pub fn height(app: &App) -> u16 {
    let columns = usize::from(app.columns.max(1));
    let rows = app.key_caps.len().div_ceil(columns);
    rows.min(usize::from(u16::MAX - 2)) as u16 + 2
}

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let t = theme();
    let focused = app.focused_pane == Pane::Keyboard;
    let block = super::pane_block("KEYBOARD", focused);

    let columns = usize::from(app.columns.max(1));
    let lines: Vec<Line> = app
        .key_caps
        .chunks(columns)
        .enumerate()
        .map(|(row, caps)| {
            let mut spans = Vec::with_capacity(caps.len() * 2);
            for (col, cap) in caps.iter().enumerate() {
                let selected = focused && row * columns + col == app.key_index;
                spans.push(Span::styled(
                    format!(" {} {} ", cap.latin, cap.arabic),
                    t.key_cap(selected),
                ));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
