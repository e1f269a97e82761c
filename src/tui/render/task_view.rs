use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Task;
use crate::ops::task_list::EditSession;
use crate::tui::app::{App, Focus};
use crate::util::unicode::truncate_to_width;

use super::pad_to_width;

/// Screen rows used by one task
const ROWS_PER_TASK: usize = 2;
const DETAIL_INDENT: &str = "    ";

pub const EMPTY_MESSAGE: &str = "No tasks to display.";
pub const COMPLETED_NOTE: &str = "task completed";

/// Render the visible tasks, two rows each, scrolled to keep the cursor in view
pub fn render_task_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let visible = app.tasks.visible_tasks();

    if visible.is_empty() {
        let empty = Paragraph::new(format!(" {}", EMPTY_MESSAGE))
            .style(Style::default().fg(app.theme.red).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let capacity = (area.height as usize / ROWS_PER_TASK).max(1);
    let cursor = app.list_cursor.min(visible.len() - 1);
    let mut scroll = app.list_scroll.min(visible.len() - 1);
    if cursor < scroll {
        scroll = cursor;
    } else if cursor >= scroll + capacity {
        scroll = cursor + 1 - capacity;
    }

    let editing = match app.tasks.edit_session() {
        EditSession::Editing(id) => Some(id),
        EditSession::Idle => None,
    };
    let width = area.width as usize;

    let mut lines: Vec<Line> = Vec::new();
    for (i, task) in visible.iter().enumerate().skip(scroll).take(capacity) {
        let is_cursor = i == cursor && app.focus == Focus::List;
        let is_editing = editing == Some(task.id);
        lines.extend(task_lines(app, task, is_cursor, is_editing, width));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);

    app.list_scroll = scroll;
}

fn task_lines(
    app: &App,
    task: &Task,
    is_cursor: bool,
    is_editing: bool,
    width: usize,
) -> [Line<'static>; 2] {
    let theme = &app.theme;
    let row_bg = if is_cursor {
        theme.selection_bg
    } else if task.completed {
        theme.done_bg
    } else {
        theme.background
    };
    let bg_style = Style::default().bg(row_bg);

    let (checkbox, checkbox_color) = if task.completed {
        ("[x] ", theme.green)
    } else {
        ("[ ] ", theme.text)
    };
    let mut title_style = Style::default().fg(theme.text_bright).bg(row_bg);
    if is_cursor {
        title_style = title_style.add_modifier(Modifier::BOLD);
    }
    let suffix = if is_editing { "  (editing)" } else { "" };
    let text_width = width.saturating_sub(checkbox.len() + suffix.len());

    let mut title = vec![
        Span::styled(checkbox, Style::default().fg(checkbox_color).bg(row_bg)),
        Span::styled(truncate_to_width(&task.text, text_width), title_style),
    ];
    if is_editing {
        title.push(Span::styled(
            suffix,
            Style::default().fg(theme.yellow).bg(row_bg),
        ));
    }

    let detail_text = if task.completed {
        COMPLETED_NOTE.to_string()
    } else {
        format!("Due: {}", task.due_label())
    };
    let mut detail = vec![
        Span::styled(DETAIL_INDENT, bg_style),
        Span::styled(detail_text, Style::default().fg(theme.dim).bg(row_bg)),
    ];

    if is_cursor || task.completed {
        pad_to_width(&mut title, width, bg_style);
        pad_to_width(&mut detail, width, bg_style);
    }

    [Line::from(title), Line::from(detail)]
}
