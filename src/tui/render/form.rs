use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Focus};
use crate::util::unicode::{byte_offset_to_display_col, display_width, skip_display_cols};

pub const FORM_HEIGHT: u16 = 3;

const TEXT_LABEL: &str = " Task  ";
const DATE_LABEL: &str = " Due   ";
const TEXT_PLACEHOLDER: &str = "Add your tasks here";
const DATE_PLACEHOLDER: &str = "YYYY-MM-DD";

/// Label on the submit button: ADD, or UPDATE while editing
pub fn submit_label(app: &App) -> &'static str {
    if app.tasks.is_editing() {
        "[ UPDATE ]"
    } else {
        "[ ADD ]"
    }
}

/// First visible column of a single-line field so that the cursor stays
/// inside `width` cells, keeping a margin on either side while scrolling.
fn scroll_for_cursor(buffer: &str, cursor: usize, scroll: usize, width: usize) -> usize {
    if width == 0 {
        return 0;
    }
    let cursor_col = byte_offset_to_display_col(buffer, cursor);
    let margin = 10.min(width / 3);
    let total = display_width(buffer);
    // A cursor at the end sits one cell past the text
    let content_end = if cursor_col >= total { total + 1 } else { total };

    let mut scroll = scroll;
    if cursor_col >= scroll + width.saturating_sub(margin) {
        scroll = cursor_col.saturating_sub(width.saturating_sub(margin + 1));
    }
    scroll = scroll.min(content_end.saturating_sub(width.saturating_sub(1)));
    if cursor_col < scroll + margin {
        scroll = cursor_col.saturating_sub(margin);
    }
    scroll
}

/// Render the two input fields and the submit button.
///
/// Updates the horizontal scroll of both fields so their cursors stay visible.
pub fn render_form(frame: &mut Frame, app: &mut App, area: Rect) {
    let field_width = |label: &str| (area.width as usize).saturating_sub(label.len());
    app.text_scroll = scroll_for_cursor(
        app.tasks.text_buffer(),
        app.text_cursor,
        app.text_scroll,
        field_width(TEXT_LABEL),
    );
    app.date_scroll = scroll_for_cursor(
        app.tasks.date_buffer(),
        app.date_cursor,
        app.date_scroll,
        field_width(DATE_LABEL),
    );

    let app = &*app;
    let bg = app.theme.background;
    let label_style = Style::default().fg(app.theme.dim).bg(bg);

    let text_line = field_line(
        app,
        TEXT_LABEL,
        skip_display_cols(app.tasks.text_buffer(), app.text_scroll),
        TEXT_PLACEHOLDER,
        app.focus == Focus::Text,
        label_style,
    );
    let date_line = field_line(
        app,
        DATE_LABEL,
        skip_display_cols(app.tasks.date_buffer(), app.date_scroll),
        DATE_PLACEHOLDER,
        app.focus == Focus::Date,
        label_style,
    );

    let button_style = Style::default()
        .fg(app.theme.background)
        .bg(if app.tasks.is_editing() {
            app.theme.yellow
        } else {
            app.theme.highlight
        })
        .add_modifier(Modifier::BOLD);
    let button_line = Line::from(vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(submit_label(app), button_style),
    ]);

    let paragraph =
        Paragraph::new(vec![text_line, date_line, button_line]).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);

    // Terminal cursor inside the focused field
    let (row, buffer, cursor, scroll, label) = match app.focus {
        Focus::Text => (0, app.tasks.text_buffer(), app.text_cursor, app.text_scroll, TEXT_LABEL),
        Focus::Date => (1, app.tasks.date_buffer(), app.date_cursor, app.date_scroll, DATE_LABEL),
        Focus::List => return,
    };
    let col = label.len() + byte_offset_to_display_col(buffer, cursor).saturating_sub(scroll);
    if row < area.height && (col as u16) < area.width {
        frame.set_cursor_position((area.x + col as u16, area.y + row));
    }
}

fn field_line<'a>(
    app: &App,
    label: &'a str,
    value: &'a str,
    placeholder: &'a str,
    focused: bool,
    label_style: Style,
) -> Line<'a> {
    let bg = app.theme.background;
    let label_style = if focused {
        label_style.fg(app.theme.highlight).add_modifier(Modifier::BOLD)
    } else {
        label_style
    };
    let value_span = if value.is_empty() {
        Span::styled(placeholder, Style::default().fg(app.theme.dim).bg(bg))
    } else {
        Span::styled(value, Style::default().fg(app.theme.text_bright).bg(bg))
    };
    Line::from(vec![Span::styled(label, label_style), value_span])
}
