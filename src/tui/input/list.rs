use crossterm::event::{KeyCode, KeyEvent};

use crate::model::FilterMode;
use crate::tui::app::{App, Focus};

pub(super) fn handle_list(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,

        // Cursor
        KeyCode::Char('j') | KeyCode::Down => app.move_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_cursor(-1),
        KeyCode::Char('g') | KeyCode::Home => app.list_cursor = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.list_cursor = usize::MAX;
            app.clamp_cursor();
        }

        // Task actions
        KeyCode::Char(' ') | KeyCode::Char('x') => app.toggle_selected(),
        KeyCode::Char('e') | KeyCode::Enter => app.edit_selected(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),
        KeyCode::Char('a') | KeyCode::Char('i') => app.focus = Focus::Text,
        KeyCode::Esc => app.cancel_edit(),

        // Filters
        KeyCode::Char('1') => app.set_filter(FilterMode::All),
        KeyCode::Char('2') => app.set_filter(FilterMode::Completed),
        KeyCode::Char('3') => app.set_filter(FilterMode::Pending),
        KeyCode::Char('f') => app.set_filter(app.tasks.filter().next()),

        KeyCode::BackTab => app.focus = app.focus.prev(),
        KeyCode::Tab => app.focus = app.focus.next(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Config;
    use crate::tui::input::test_keys::*;
    use pretty_assertions::assert_eq;

    /// App with the given tasks, focused on the list with the cursor on row 0
    fn list_app(texts: &[&str]) -> App {
        let mut app = App::new(&Config::default());
        for text in texts {
            type_str(&mut app, text);
            press(&mut app, KeyCode::Enter);
        }
        app.focus = Focus::List;
        app.list_cursor = 0;
        app
    }

    fn rows(app: &App) -> Vec<(String, bool)> {
        app.tasks
            .visible_tasks()
            .iter()
            .map(|t| (t.text.clone(), t.completed))
            .collect()
    }

    #[test]
    fn navigate_and_toggle() {
        let mut app = list_app(&["A", "B", "C"]);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(
            rows(&app),
            vec![
                ("A".into(), false),
                ("B".into(), true),
                ("C".into(), false)
            ]
        );
        press(&mut app, KeyCode::Char('G'));
        assert_eq!(app.list_cursor, 2);
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.list_cursor, 0);
    }

    #[test]
    fn toggle_then_pending_filter() {
        let mut app = list_app(&["A", "B"]);
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.tasks.filter(), FilterMode::Pending);
        assert_eq!(rows(&app), vec![("B".into(), false)]);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(rows(&app), vec![("A".into(), true)]);
        press(&mut app, KeyCode::Char('f'));
        assert_eq!(app.tasks.filter(), FilterMode::Pending);
    }

    #[test]
    fn delete_selected_row() {
        let mut app = list_app(&["A", "B", "C"]);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(
            rows(&app),
            vec![("A".into(), false), ("C".into(), false)]
        );
        assert_eq!(app.list_cursor, 1);
        // Deleting the last row moves the cursor up
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.list_cursor, 0);
    }

    #[test]
    fn actions_on_empty_list_are_noops() {
        let mut app = list_app(&[]);
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Char('j'));
        assert!(app.tasks.is_empty());
        assert_eq!(app.list_cursor, 0);
        assert_eq!(app.focus, Focus::List);
    }

    #[test]
    fn edit_through_keys() {
        let mut app = list_app(&["A"]);
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.focus, Focus::Text);
        assert_eq!(app.tasks.text_buffer(), "A");
        type_str(&mut app, "2");
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "2024-02-02");
        press(&mut app, KeyCode::Enter);

        let task = &app.tasks.tasks()[0];
        assert_eq!(task.text, "A2");
        assert_eq!(task.due_date.as_deref(), Some("2024-02-02"));
        assert!(!app.tasks.is_editing());
        assert_eq!(app.focus, Focus::List);
        assert_eq!(
            app.status.active().map(|n| n.message.as_str()),
            Some("Task updated")
        );
    }

    #[test]
    fn quit_and_help() {
        let mut app = list_app(&[]);
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn a_focuses_form() {
        let mut app = list_app(&[]);
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.focus, Focus::Text);
    }
}
