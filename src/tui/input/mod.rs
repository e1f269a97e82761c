mod form;
mod list;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::App;

use form::handle_form;
use list::handle_list;

pub use form::step_date;

/// Handle a key event for the focused region
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // Help overlay swallows the next key
    if app.show_help {
        app.show_help = false;
        return;
    }

    if app.focus.is_form() {
        handle_form(app, key);
    } else {
        handle_list(app, key);
    }
}
