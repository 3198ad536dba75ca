mod palette;

use harf_core::clipboard::NotificationKind;
use ratatui::prelude::*;

pub use palette::Palette;

pub struct Theme {
    pub palette: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    pub fn new() -> Self {
        Self {
            palette: Palette::new(),
        }
    }

    // Panel border style
    pub fn panel_border(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.palette.border_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.palette.border_default)
        }
    }

    // On/off badge in the header
    pub fn flag_badge(&self, enabled: bool) -> Style {
        let bg = if enabled {
            self.palette.accent_success
        } else {
            self.palette.accent_danger
        };
        Style::default()
            .fg(Color::Black)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text_primary(&self) -> Style {
        Style::default().fg(self.palette.text_primary)
    }

    pub fn text_secondary(&self) -> Style {
        Style::default().fg(self.palette.text_secondary)
    }

    // Muted text (hints, labels)
    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.palette.text_muted)
    }

    // Editor placeholder
    pub fn placeholder(&self) -> Style {
        self.text_muted().add_modifier(Modifier::ITALIC)
    }

    // Arabic glyph in tables and key caps
    pub fn glyph(&self) -> Style {
        Style::default()
            .fg(self.palette.accent_glyph)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title_focused(&self) -> Style {
        Style::default()
            .fg(self.palette.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title_unfocused(&self) -> Style {
        Style::default().fg(self.palette.text_muted)
    }

    // One on-screen key
    pub fn key_cap(&self, selected: bool) -> Style {
        if selected {
            Style::default()
                .fg(self.palette.selection_fg)
                .bg(self.palette.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(self.palette.text_secondary)
                .bg(self.palette.key_bg)
        }
    }

    // Key hint style (the key part like "Tab")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.palette.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    // Status message style
    pub fn status_message(&self) -> Style {
        Style::default().fg(self.palette.accent_warning)
    }

    pub fn toast(&self, kind: NotificationKind) -> Style {
        let fg = match kind {
            NotificationKind::Success => self.palette.accent_success,
            NotificationKind::Failure => self.palette.accent_danger,
        };
        Style::default().fg(fg).add_modifier(Modifier::BOLD)
    }

    // Panel title with optional focus indicator
    pub fn panel_title(&self, title: &str, focused: bool) -> Line<'_> {
        if focused {
            Line::styled(format!(" {} ", title), self.title_focused())
        } else {
            Line::styled(format!(" {} ", title), self.title_unfocused())
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::OnceLock<Theme> = std::sync::OnceLock::new();

pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::new)
}
