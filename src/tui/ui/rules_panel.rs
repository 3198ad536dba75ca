use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Pane};
use crate::tui::theme::theme;

const USAGE_RULES: [&str; 3] = [
    "Type Latin letters to get the matching Arabic letter.",
    "Some keys combine with the previous letter, e.g. t then ' gives ث.",
    "Click a key on the keyboard to insert its letter as is.",
];

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let t = theme();
    let focused = app.focused_pane == Pane::Rules;
    let block = super::pane_block("RULES", focused);

    let mut lines: Vec<Line> = USAGE_RULES
        .iter()
        .enumerate()
        .map(|(i, rule)| {
            Line::from(vec![
                Span::styled(format!("{}. ", i + 1), t.key_hint()),
                Span::styled(*rule, t.text_secondary()),
            ])
        })
        .collect();

    let diacritics = app.layout().diacritics();
    lines.push(Line::styled(
        format!("Combinations ({})", diacritics.len()),
        t.text_muted(),
    ));
    lines.extend(diacritics.iter().skip(app.rules_scroll).map(|(key, result)| {
        Line::from(vec![
            Span::styled(format!("  {} ", key.base), t.glyph()),
            Span::styled("+ ", t.text_muted()),
            Span::styled(format!("{} ", key.trigger), t.key_hint()),
            Span::styled("-> ", t.text_muted()),
            Span::styled(result.to_string(), t.glyph()),
        ])
    }));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
