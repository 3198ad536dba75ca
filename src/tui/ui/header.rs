use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::tui::theme::theme;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let t = theme();
    let combine = app.session.engine().combine_diacritics();

    let line = Line::from(vec![
        Span::styled("harf ", t.text_primary().add_modifier(Modifier::BOLD)),
        Span::styled(format!("[{}] ", app.layout().name()), t.text_secondary()),
        Span::styled(
            format!(" combine {} ", if combine { "on" } else { "off" }),
            t.flag_badge(combine),
        ),
        Span::raw(" "),
        Span::styled(
            format!("{} chars", app.session.buffer().char_len()),
            t.text_muted(),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Left), area);
}
