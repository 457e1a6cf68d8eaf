use crate::application::{App, AppMode, FormField, Tab};
use crate::infrastructure::ClipboardExporter;
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match app.mode {
            AppMode::Normal => Self::handle_normal_mode(app, key, modifiers),
            AppMode::Editing => Self::handle_editing_mode(app, key),
            AppMode::Help => Self::handle_help_mode(app, key),
            AppMode::Notice => Self::handle_notice_mode(app, key),
        }
    }

    fn handle_normal_mode(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            return;
        }

        match key {
            KeyCode::Tab => {
                app.next_tab();
                return;
            }
            KeyCode::BackTab => {
                app.previous_tab();
                return;
            }
            KeyCode::Char('1') => {
                app.select_tab(Tab::Log);
                return;
            }
            KeyCode::Char('2') => {
                app.select_tab(Tab::Summary);
                return;
            }
            KeyCode::Char('3') => {
                app.select_tab(Tab::Progress);
                return;
            }
            KeyCode::Char('v') => {
                app.view_summary();
                return;
            }
            KeyCode::F(1) | KeyCode::Char('?') => {
                app.show_help();
                return;
            }
            KeyCode::Char('q') => {
                // Will be handled by main loop
                return;
            }
            _ => {}
        }

        match app.tab {
            Tab::Log => Self::handle_log_tab(app, key),
            Tab::Summary => Self::handle_summary_tab(app, key),
            Tab::Progress => {}
        }
    }

    fn handle_log_tab(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                app.focus_previous();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.focus_next();
            }
            KeyCode::Left | KeyCode::Char('h') if app.focus == FormField::Category => {
                app.previous_category();
            }
            KeyCode::Right | KeyCode::Char('l') if app.focus == FormField::Category => {
                app.next_category();
            }
            KeyCode::Enter | KeyCode::F(2) => {
                if app.focus.is_text() {
                    app.start_editing();
                } else {
                    app.focus_next();
                }
            }
            KeyCode::Char('a') => {
                app.add_workout();
            }
            _ => {}
        }
    }

    fn handle_summary_tab(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                app.scroll_summary_up(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.scroll_summary_down(1);
            }
            KeyCode::PageUp => {
                app.scroll_summary_up(5);
            }
            KeyCode::PageDown => {
                app.scroll_summary_down(5);
            }
            KeyCode::Home => {
                app.summary_scroll = 0;
            }
            KeyCode::Char('y') => {
                let result = ClipboardExporter::copy_report(&app.store);
                app.set_clipboard_result(result);
            }
            KeyCode::Char('Y') => {
                let result = ClipboardExporter::copy_json(&app.store);
                app.set_clipboard_result(result);
            }
            _ => {}
        }
    }

    fn handle_editing_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter => {
                app.finish_editing();
            }
            KeyCode::Esc => {
                app.cancel_editing();
            }
            KeyCode::Backspace => {
                app.delete_before_cursor();
            }
            KeyCode::Delete => {
                app.delete_at_cursor();
            }
            KeyCode::Left => {
                app.move_cursor_left();
            }
            KeyCode::Right => {
                app.move_cursor_right();
            }
            KeyCode::Home => {
                app.move_cursor_home();
            }
            KeyCode::End => {
                app.move_cursor_end();
            }
            KeyCode::Char(c) => {
                app.insert_char(c);
            }
            _ => {}
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.close_help();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if app.help_scroll > 0 {
                    app.help_scroll -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.help_scroll += 1;
            }
            KeyCode::PageUp => {
                app.help_scroll = app.help_scroll.saturating_sub(5);
            }
            KeyCode::PageDown => {
                app.help_scroll += 5;
            }
            KeyCode::Home => {
                app.help_scroll = 0;
            }
            _ => {}
        }
    }

    fn handle_notice_mode(app: &mut App, key: KeyCode) {
        if matches!(key, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            app.dismiss_notice();
        }
    }
}
