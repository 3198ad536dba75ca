use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Pane};
use crate::tui::theme::{theme, Theme};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let t = theme();

    let line1 = match app.active_toast() {
        Some(toast) => Line::styled(
            toast.notification.message,
            t.toast(toast.notification.kind),
        ),
        None => Line::styled(format!("Status: {}", app.status), t.status_message()),
    };

    let footer = Paragraph::new(vec![line1, hints(app, t)]);
    frame.render_widget(footer, area);
}

fn hints(app: &App, t: &Theme) -> Line<'static> {
    let pane_hint: &[(&str, &str)] = match app.focused_pane {
        Pane::Editor => &[("keys", ":type  "), ("C-l", ":clear  ")],
        Pane::Keyboard => &[("arrows", ":select  "), ("Enter", ":insert  ")],
        Pane::Rules => &[("Up/Down", ":scroll  ")],
    };

    let mut spans = vec![
        Span::styled("Tab", t.key_hint()),
        Span::styled(":pane  ", t.text_muted()),
    ];
    for (key, label) in pane_hint {
        spans.push(Span::styled(*key, t.key_hint()));
        spans.push(Span::styled(*label, t.text_muted()));
    }
    spans.extend([
        Span::styled("C-y", t.key_hint()),
        Span::styled(":copy  ", t.text_muted()),
        Span::styled("C-t", t.key_hint()),
        Span::styled(":combine  ", t.text_muted()),
        Span::styled("Esc", t.key_hint()),
        Span::styled(":quit", t.text_muted()),
    ]);
    Line::from(spans)
}
