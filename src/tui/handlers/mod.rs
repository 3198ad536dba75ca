use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Pane};

/// Handle input and return true if the app should quit
pub fn handle_input(app: &mut App, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => return true,
        KeyCode::Char('q') if ctrl => return true,
        KeyCode::Char('y') if ctrl => {
            // Detached: the outcome arrives through the toast slot
            drop(app.copy_to_clipboard());
            return false;
        }
        KeyCode::Char('t') if ctrl => {
            app.toggle_combination();
            return false;
        }
        KeyCode::Tab => {
            app.cycle_pane_forward();
            return false;
        }
        KeyCode::BackTab => {
            app.cycle_pane_backward();
            return false;
        }
        _ => {}
    }

    match app.focused_pane {
        Pane::Editor => handle_editor_input(app, key, ctrl),
        Pane::Keyboard => handle_keyboard_input(app, key.code),
        Pane::Rules => handle_rules_input(app, key.code),
    }

    false
}

fn handle_editor_input(app: &mut App, key: KeyEvent, ctrl: bool) {
    match key.code {
        KeyCode::Char('l') if ctrl => app.clear_text(),
        // Other control chords are not text
        KeyCode::Char(_) if ctrl => {}
        KeyCode::Char(ch) => app.type_char(ch),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Enter => app.newline(),
        _ => {}
    }
}

fn handle_keyboard_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Left | KeyCode::Char('h') => app.move_key_selection(-1, 0),
        KeyCode::Right | KeyCode::Char('l') => app.move_key_selection(1, 0),
        KeyCode::Up | KeyCode::Char('k') => app.move_key_selection(0, -1),
        KeyCode::Down | KeyCode::Char('j') => app.move_key_selection(0, 1),
        KeyCode::Enter | KeyCode::Char(' ') => app.click_selected_key(),
        _ => {}
    }
}

fn handle_rules_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.scroll_rules(-1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_rules(1),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::tests::test_app;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_editor_typing() {
        let mut app = test_app();
        for ch in "slam".chars() {
            assert!(!handle_input(&mut app, press(KeyCode::Char(ch))));
        }
        assert_eq!(app.text(), "سلام");

        handle_input(&mut app, press(KeyCode::Backspace));
        assert_eq!(app.text(), "سلا");
        handle_input(&mut app, press(KeyCode::Enter));
        assert_eq!(app.text(), "سلا\n");
    }

    #[test]
    fn test_ctrl_l_clears_editor() {
        let mut app = test_app();
        handle_input(&mut app, press(KeyCode::Char('b')));
        handle_input(&mut app, ctrl('l'));
        assert_eq!(app.text(), "");
    }

    #[test]
    fn test_unknown_control_chord_is_ignored() {
        let mut app = test_app();
        handle_input(&mut app, ctrl('b'));
        assert_eq!(app.text(), "");
    }

    #[test]
    fn test_quit_keys() {
        let mut app = test_app();
        assert!(handle_input(&mut app, press(KeyCode::Esc)));
        assert!(handle_input(&mut app, ctrl('q')));
        assert!(!handle_input(&mut app, press(KeyCode::Char('q'))));
    }

    #[test]
    fn test_keyboard_pane_clicks_selected_key() {
        let mut app = test_app();
        handle_input(&mut app, press(KeyCode::Tab));
        assert_eq!(app.focused_pane, Pane::Keyboard);

        handle_input(&mut app, press(KeyCode::Right));
        let cap = app.selected_key().unwrap();
        handle_input(&mut app, press(KeyCode::Enter));
        assert_eq!(app.text(), cap.arabic.to_string());

        // Letters navigate instead of typing here
        handle_input(&mut app, press(KeyCode::Char('j')));
        assert_eq!(app.key_index, 1 + usize::from(app.columns));
        assert_eq!(app.text(), cap.arabic.to_string());
    }

    #[test]
    fn test_rules_pane_scrolls() {
        let mut app = test_app();
        handle_input(&mut app, press(KeyCode::BackTab));
        assert_eq!(app.focused_pane, Pane::Rules);

        handle_input(&mut app, press(KeyCode::Down));
        handle_input(&mut app, press(KeyCode::Down));
        assert_eq!(app.rules_scroll, 2);
        handle_input(&mut app, press(KeyCode::Up));
        assert_eq!(app.rules_scroll, 1);
    }

    #[test]
    fn test_ctrl_t_toggles_combination() {
        let mut app = test_app();
        handle_input(&mut app, ctrl('t'));
        assert!(!app.session.engine().combine_diacritics());
        handle_input(&mut app, press(KeyCode::Char('h')));
        handle_input(&mut app, press(KeyCode::Char('\'')));
        assert_eq!(app.text(), "ه'");
    }
}
