use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::notify::NoticeKind;
use crate::tui::app::{App, Focus};

/// Key hints for the focused region
pub fn key_hints(app: &App) -> &'static str {
    match (app.focus, app.tasks.is_editing()) {
        (Focus::List, _) => "space toggle  e edit  d delete  1-3 filter  ? help  q quit",
        (_, true) => "Enter update  Tab next field  Esc cancel edit",
        (Focus::Date, false) => "Enter add  \u{2191}\u{2193} change date  Tab next field",
        (Focus::Text, false) => "Enter add  Tab next field  Esc task list",
    }
}

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;

    let line = if let Some(notice) = app.status.active() {
        let icon = match notice.kind {
            NoticeKind::Warning => "!",
            NoticeKind::Success => "\u{2713}",
        };
        let style = Style::default().fg(app.theme.notice_color(notice.kind)).bg(bg);
        Line::from(vec![
            Span::styled(format!(" {} ", icon), style),
            Span::styled(notice.message.clone(), style),
        ])
    } else if app.show_key_hints {
        Line::from(Span::styled(
            format!(" {}", key_hints(app)),
            Style::default().fg(app.theme.dim).bg(bg),
        ))
    } else {
        Line::from("")
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
