use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use harf_core::clipboard::{copy_text, ClipboardError, ClipboardSink, Notification};
use harf_core::mapping::{KeyCap, Layout};
use harf_core::settings::Settings;
use harf_core::state::Session;
use harf_core::transform::{TransformConfig, TransformResult, TransliterationEngine};
use parking_lot::Mutex;

use crate::tui::clipboard::SystemClipboard;

/// How long a toast stays in the footer
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

pub const PLACEHOLDER: &str = "أكتب هنا...";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Pane {
    Editor,
    Keyboard,
    Rules,
}

#[derive(Clone, Debug)]
pub struct Toast {
    pub notification: Notification,
    pub shown_at: Instant,
}

/// Slot the clipboard thread posts its outcome into
pub type ToastSlot = Arc<Mutex<Option<Toast>>>;

/// Opens a clipboard backend on the copying thread
pub type ClipboardFactory =
    Arc<dyn Fn() -> Result<Box<dyn ClipboardSink + Send>, ClipboardError> + Send + Sync>;

/// Clipboard opened on first copy and kept for the lifetime of the app.
///
/// Some backends (X11) only serve the copied text while a handle is alive.
type SharedClipboard = Arc<Mutex<Option<Box<dyn ClipboardSink + Send>>>>;

pub struct App {
    pub focused_pane: Pane,
    pub session: Session,
    pub key_caps: Vec<KeyCap>,
    pub key_index: usize,
    pub columns: u16,
    pub rules_scroll: usize,
    pub status: String,
    toast: ToastSlot,
    clipboard: SharedClipboard,
    open_clipboard: ClipboardFactory,
}

impl App {
    pub fn new(layout: Layout, settings: &Settings) -> Self {
        let factory: ClipboardFactory = Arc::new(|| {
            let clipboard = SystemClipboard::new()?;
            Ok(Box::new(clipboard) as Box<dyn ClipboardSink + Send>)
        });
        Self::with_clipboard(layout, settings, factory)
    }

    pub fn with_clipboard(layout: Layout, settings: &Settings, clipboard: ClipboardFactory) -> Self {
        let engine = TransliterationEngine::new(TransformConfig::from_settings(layout, settings));
        let key_caps = engine.layout().key_caps();

        Self {
            focused_pane: Pane::Editor,
            session: Session::new(engine),
            key_caps,
            key_index: 0,
            columns: settings.columns(),
            rules_scroll: 0,
            status: "Ready".to_string(),
            toast: Arc::new(Mutex::new(None)),
            clipboard: Arc::new(Mutex::new(None)),
            open_clipboard: clipboard,
        }
    }

    pub fn layout(&self) -> &Layout {
        self.session.engine().layout()
    }

    pub fn text(&self) -> &str {
        self.session.text()
    }

    pub fn set_status<S: Into<String>>(&mut self, msg: S) {
        self.status = msg.into();
    }

    pub fn selected_key(&self) -> Option<KeyCap> {
        self.key_caps.get(self.key_index).copied()
    }

    /// Physical keystroke in the editor
    pub fn type_char(&mut self, ch: char) {
        match self.session.keystroke(ch) {
            TransformResult::Combined { base, result } => {
                self.set_status(format!("{}{} -> {}", base, ch, result));
            }
            TransformResult::Translated(_) | TransformResult::Passthrough => {}
        }
    }

    /// Click the selected on-screen key
    pub fn click_selected_key(&mut self) {
        if let Some(cap) = self.selected_key() {
            self.session.click(cap.arabic);
        }
    }

    pub fn backspace(&mut self) {
        self.session.backspace();
    }

    pub fn newline(&mut self) {
        let mut text = self.session.text().to_string();
        text.push('\n');
        self.session.replace(text);
    }

    pub fn clear_text(&mut self) {
        self.session.clear();
        self.set_status("Cleared");
    }

    pub fn toggle_combination(&mut self) {
        let engine = self.session.engine_mut();
        let enabled = !engine.combine_diacritics();
        engine.set_combine_diacritics(enabled);
        self.set_status(format!(
            "Diacritic combination {}",
            if enabled { "on" } else { "off" }
        ));
    }

    /// Copy the current text on a background thread.
    ///
    /// The text is snapshotted first; the session keeps handling keys while
    /// the copy runs and the result shows up as a toast. The backend is
    /// opened on the first copy and reused afterwards; a failed open is
    /// retried on the next copy.
    pub fn copy_to_clipboard(&mut self) -> JoinHandle<()> {
        let text = self.session.text().to_string();
        let factory = Arc::clone(&self.open_clipboard);
        let clipboard = Arc::clone(&self.clipboard);
        let slot = Arc::clone(&self.toast);

        thread::spawn(move || {
            let mut clipboard = clipboard.lock();
            let opened = match clipboard.take() {
                Some(sink) => Ok(sink),
                None => factory(),
            };
            let notification = match opened {
                Ok(mut sink) => {
                    let notification = copy_text(&text, sink.as_mut());
                    *clipboard = Some(sink);
                    notification
                }
                Err(err) => {
                    log::warn!("failed to open clipboard: {}", err);
                    Notification::failure(format!("Failed to copy text: {}", err))
                }
            };
            drop(clipboard);
            *slot.lock() = Some(Toast {
                notification,
                shown_at: Instant::now(),
            });
        })
    }

    /// Toast to display, if it has not expired
    pub fn active_toast(&self) -> Option<Toast> {
        let mut slot = self.toast.lock();
        match slot.as_ref() {
            Some(toast) if toast.shown_at.elapsed() < TOAST_DURATION => Some(toast.clone()),
            Some(_) => {
                *slot = None;
                None
            }
            None => None,
        }
    }

    pub fn move_key_selection(&mut self, d_col: i32, d_row: i32) {
        if self.key_caps.is_empty() {
            return;
        }
        let columns = i32::from(self.columns.max(1));
        let last = self.key_caps.len() as i32 - 1;
        let target = self.key_index as i32 + d_col + d_row * columns;
        self.key_index = target.clamp(0, last) as usize;
    }

    pub fn scroll_rules(&mut self, delta: i32) {
        let max = self.layout().diacritics().len().saturating_sub(1) as i32;
        let next = (self.rules_scroll as i32 + delta).clamp(0, max.max(0));
        self.rules_scroll = next as usize;
    }

    pub fn cycle_pane_forward(&mut self) {
        self.focused_pane = match self.focused_pane {
            Pane::Editor => Pane::Keyboard,
            Pane::Keyboard => Pane::Rules,
            Pane::Rules => Pane::Editor,
        };
    }

    pub fn cycle_pane_backward(&mut self) {
        self.focused_pane = match self.focused_pane {
            Pane::Editor => Pane::Rules,
            Pane::Keyboard => Pane::Editor,
            Pane::Rules => Pane::Keyboard,
        };
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    struct MemoryClipboard(Arc<Mutex<Option<String>>>);

    impl ClipboardSink for MemoryClipboard {
        fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            *self.0.lock() = Some(text.to_string());
            Ok(())
        }
    }

    pub(crate) fn test_app() -> App {
        let factory: ClipboardFactory =
            Arc::new(|| Err(ClipboardError::new("no clipboard in tests")));
        App::with_clipboard(Layout::builtin(), &Settings::new(), factory)
    }

    #[test]
    fn test_typing_and_clicking() {
        let mut app = test_app();
        app.type_char('h');
        app.type_char('\'');
        assert_eq!(app.text(), "ة");
        assert_eq!(app.status, "ه' -> ة");

        app.key_index = 0;
        app.click_selected_key();
        assert_eq!(app.text(), "ةق");
    }

    #[test]
    fn test_newline_and_backspace() {
        let mut app = test_app();
        app.type_char('b');
        app.newline();
        assert_eq!(app.text(), "ب\n");
        app.backspace();
        app.backspace();
        assert_eq!(app.text(), "");
    }

    #[test]
    fn test_toggle_combination() {
        let mut app = test_app();
        app.toggle_combination();
        app.type_char('t');
        app.type_char('\'');
        assert_eq!(app.text(), "ت'");
    }

    #[test]
    fn test_copy_success_posts_toast() {
        let copied = Arc::new(Mutex::new(None));
        let sink_target = Arc::clone(&copied);
        let factory: ClipboardFactory = Arc::new(move || {
            Ok(Box::new(MemoryClipboard(Arc::clone(&sink_target))) as Box<dyn ClipboardSink + Send>)
        });
        let mut app = App::with_clipboard(Layout::builtin(), &Settings::new(), factory);
        app.type_char('n');
        app.type_char('w');
        app.type_char('r');

        app.copy_to_clipboard().join().unwrap();
        assert_eq!(copied.lock().as_deref(), Some("نور"));
        let toast = app.active_toast().unwrap();
        assert!(toast.notification.is_success());
        assert_eq!(toast.notification.message, "Text copied to clipboard!");
    }

    #[test]
    fn test_clipboard_is_opened_once() {
        let opened = Arc::new(AtomicUsize::new(0));
        let copied = Arc::new(Mutex::new(None));
        let (counter, sink_target) = (Arc::clone(&opened), Arc::clone(&copied));
        let factory: ClipboardFactory = Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(MemoryClipboard(Arc::clone(&sink_target))) as Box<dyn ClipboardSink + Send>)
        });
        let mut app = App::with_clipboard(Layout::builtin(), &Settings::new(), factory);

        app.type_char('b');
        app.copy_to_clipboard().join().unwrap();
        app.type_char('a');
        app.copy_to_clipboard().join().unwrap();

        assert_eq!(opened.load(Ordering::SeqCst), 1);
        assert_eq!(copied.lock().as_deref(), Some("با"));
    }

    #[test]
    fn test_failed_open_is_retried() {
        let opened = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&opened);
        let factory: ClipboardFactory = Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Err(ClipboardError::new("no display"))
        });
        let mut app = App::with_clipboard(Layout::builtin(), &Settings::new(), factory);

        app.copy_to_clipboard().join().unwrap();
        app.copy_to_clipboard().join().unwrap();
        assert_eq!(opened.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_copy_failure_keeps_text() {
        let mut app = test_app();
        app.type_char('t');
        app.copy_to_clipboard().join().unwrap();
        let toast = app.active_toast().unwrap();
        assert!(!toast.notification.is_success());
        assert_eq!(
            toast.notification.message,
            "Failed to copy text: no clipboard in tests"
        );
        assert_eq!(app.text(), "ت");
    }

    #[test]
    fn test_key_selection_is_clamped() {
        let mut app = test_app();
        app.move_key_selection(-1, 0);
        assert_eq!(app.key_index, 0);
        app.move_key_selection(0, 1);
        assert_eq!(app.key_index, 10);
        app.move_key_selection(0, 100);
        assert_eq!(app.key_index, app.key_caps.len() - 1);
    }

    #[test]
    fn test_pane_cycle() {
        let mut app = test_app();
        app.cycle_pane_forward();
        assert_eq!(app.focused_pane, Pane::Keyboard);
        app.cycle_pane_backward();
        app.cycle_pane_backward();
        assert_eq!(app.focused_pane, Pane::Rules);
    }
}
