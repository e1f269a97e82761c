use chrono::{Days, Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Focus};
use crate::util::unicode::{
    next_grapheme_boundary, prev_grapheme_boundary, word_boundary_left, word_boundary_right,
};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Step a date buffer by `days`. An empty buffer starts from `today`;
/// text that is not a `YYYY-MM-DD` date is left alone (None).
pub fn step_date(buffer: &str, days: i64, today: NaiveDate) -> Option<String> {
    let raw = buffer.trim();
    if raw.is_empty() {
        return Some(today.format(DATE_FORMAT).to_string());
    }
    let base = NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()?;
    let step = Days::new(days.unsigned_abs());
    let stepped = if days >= 0 {
        base.checked_add_days(step)?
    } else {
        base.checked_sub_days(step)?
    };
    Some(stepped.format(DATE_FORMAT).to_string())
}

/// Buffer and cursor of the focused form field
fn active_field(app: &mut App) -> Option<(&mut String, &mut usize)> {
    match app.focus {
        Focus::Text => Some((app.tasks.text_buffer_mut(), &mut app.text_cursor)),
        Focus::Date => Some((app.tasks.date_buffer_mut(), &mut app.date_cursor)),
        Focus::List => None,
    }
}

pub(super) fn handle_form(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Enter) => {
            app.submit_form();
            return;
        }
        // Esc leaves an edit; with nothing to cancel it moves to the list
        (_, KeyCode::Esc) => {
            if app.tasks.is_editing() {
                app.cancel_edit();
            } else {
                app.focus = Focus::List;
            }
            return;
        }
        (_, KeyCode::Tab) => {
            app.focus = app.focus.next();
            return;
        }
        (_, KeyCode::BackTab) => {
            app.focus = app.focus.prev();
            return;
        }
        (KeyModifiers::NONE, KeyCode::Up | KeyCode::Down) if app.focus == Focus::Date => {
            let days = if key.code == KeyCode::Up { 1 } else { -1 };
            let today = Local::now().date_naive();
            if let Some(stepped) = step_date(app.tasks.date_buffer(), days, today) {
                app.date_cursor = stepped.len();
                app.tasks.set_date_buffer(stepped);
            }
            return;
        }
        (KeyModifiers::NONE, KeyCode::Down) => {
            app.focus = Focus::List;
            return;
        }
        _ => {}
    }

    let Some((buf, cursor)) = active_field(app) else {
        return;
    };
    *cursor = (*cursor).min(buf.len());

    match (key.modifiers, key.code) {
        (m, KeyCode::Char('a')) if m.contains(KeyModifiers::CONTROL) => *cursor = 0,
        (m, KeyCode::Char('e')) if m.contains(KeyModifiers::CONTROL) => *cursor = buf.len(),
        // Kill to start of line
        (m, KeyCode::Char('u')) if m.contains(KeyModifiers::CONTROL) => {
            buf.drain(..*cursor);
            *cursor = 0;
        }
        (_, KeyCode::Home) => *cursor = 0,
        (_, KeyCode::End) => *cursor = buf.len(),
        (m, KeyCode::Left) if m.contains(KeyModifiers::ALT) => {
            *cursor = word_boundary_left(buf, *cursor);
        }
        (m, KeyCode::Right) if m.contains(KeyModifiers::ALT) => {
            *cursor = word_boundary_right(buf, *cursor);
        }
        // Readline word movement: Alt+B / Alt+F
        (m, KeyCode::Char('b')) if m.contains(KeyModifiers::ALT) => {
            *cursor = word_boundary_left(buf, *cursor);
        }
        (m, KeyCode::Char('f')) if m.contains(KeyModifiers::ALT) => {
            *cursor = word_boundary_right(buf, *cursor);
        }
        (_, KeyCode::Left) => {
            if let Some(prev) = prev_grapheme_boundary(buf, *cursor) {
                *cursor = prev;
            }
        }
        (_, KeyCode::Right) => {
            if let Some(next) = next_grapheme_boundary(buf, *cursor) {
                *cursor = next;
            }
        }
        // Word backspace (Alt or Ctrl)
        (m, KeyCode::Backspace)
            if m.contains(KeyModifiers::ALT) || m.contains(KeyModifiers::CONTROL) =>
        {
            let start = word_boundary_left(buf, *cursor);
            buf.drain(start..*cursor);
            *cursor = start;
        }
        (_, KeyCode::Backspace) => {
            if let Some(prev) = prev_grapheme_boundary(buf, *cursor) {
                buf.drain(prev..*cursor);
                *cursor = prev;
            }
        }
        (_, KeyCode::Delete) => {
            if let Some(next) = next_grapheme_boundary(buf, *cursor) {
                buf.drain(*cursor..next);
            }
        }
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            buf.insert(*cursor, c);
            *cursor += c.len_utf8();
        }
        _ => {}
    }
}
