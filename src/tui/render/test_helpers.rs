use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::Config;
use crate::tui::app::{App, Focus};

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

pub fn test_terminal(w: u16, h: u16) -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(w, h)).unwrap()
}

/// Render into an in-memory backend and return it for style inspection.
pub fn render_to_backend<F>(w: u16, h: u16, f: F) -> TestBackend
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let mut terminal = test_terminal(w, h);
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();
    terminal.backend().clone()
}

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = render_to_backend(w, h, f);
    let buf = backend.buffer();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Build an App holding `(text, due date, completed)` tasks, with the form
/// focused and empty.
pub fn app_with_tasks(tasks: &[(&str, &str, bool)]) -> App {
    let mut app = App::new(&Config::default());
    for (text, date, completed) in tasks {
        app.tasks.set_text_buffer(*text);
        app.tasks.set_date_buffer(*date);
        app.submit_form();
        if *completed {
            let id = app.tasks.id_at(app.tasks.len() - 1).unwrap();
            app.tasks.toggle_complete(id).unwrap();
        }
    }
    app.focus = Focus::Text;
    app
}
