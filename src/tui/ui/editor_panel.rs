use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

use crate::tui::app::{App, Pane, PLACEHOLDER};
use crate::tui::theme::theme;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let t = theme();
    let focused = app.focused_pane == Pane::Editor;
    let block = super::pane_block("TEXT", focused);

    let text = if app.text().is_empty() {
        Text::styled(PLACEHOLDER, t.placeholder())
    } else {
        let mut text = Text::styled(app.text(), t.text_primary());
        if focused {
            // Cursor marker after the last character
            if let Some(last) = text.lines.last_mut() {
                last.spans.push(Span::styled("▏", t.key_hint()));
            }
        }
        text
    };

    // Visible part follows the end of the buffer
    let inner_height = block.inner(area).height as usize;
    let scroll = text.lines.len().saturating_sub(inner_height.max(1));

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Right)
        .wrap(Wrap { trim: false })
        .scroll((scroll.min(u16::MAX as usize) as u16, 0));
    frame.render_widget(paragraph, area);
}
