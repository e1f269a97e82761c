pub mod filter_bar;
pub mod form;
pub mod help_overlay;
pub mod status_row;
pub mod task_view;

#[cfg(test)]
pub(crate) mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use super::app::App;

pub const TITLE: &str = "MY TO DO LIST";

/// Draw the whole screen
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: title | form | filter bar + separator | task list | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title + blank
            Constraint::Length(form::FORM_HEIGHT),
            Constraint::Length(1), // blank
            Constraint::Length(2), // filter bar + separator
            Constraint::Min(1),    // task list
            Constraint::Length(1), // status row
        ])
        .split(area);

    render_title(frame, app, chunks[0]);
    form::render_form(frame, app, chunks[1]);
    filter_bar::render_filter_bar(frame, app, chunks[3]);
    task_view::render_task_view(frame, app, chunks[4]);
    status_row::render_status_row(frame, app, chunks[5]);

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, frame.area());
    }
}

fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let style = Style::default()
        .fg(app.theme.text_bright)
        .bg(app.theme.background)
        .add_modifier(Modifier::BOLD);
    let title = Paragraph::new(Line::from(Span::styled(TITLE, style))).alignment(Alignment::Center);
    frame.render_widget(title, area);
}

/// Pad a line's spans with `bg` out to `width` cells
pub(super) fn pad_to_width(spans: &mut Vec<Span<'_>>, width: usize, bg: Style) {
    let used: usize = spans
        .iter()
        .map(|s| crate::util::unicode::display_width(&s.content))
        .sum();
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), bg));
    }
}

#[cfg(test)]
mod tests {
    use super::test_helpers::*;
    use super::*;

    #[test]
    fn full_screen_layout() {
        let mut app = app_with_tasks(&[("Buy milk", "2024-01-01", false)]);
        let output = render_to_string(TERM_W, TERM_H, |frame, _| render(frame, &mut app));
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0].trim(), TITLE);
        assert!(lines[2].contains("Add your tasks here"));
        assert!(lines[4].contains("[ ADD ]"));
        assert!(lines[6].contains("All Tasks (1)"));
        assert!(lines[8].starts_with("[ ] Buy milk"));
        assert!(lines[9].contains("Due: 2024-01-01"));
    }

    #[test]
    fn help_overlay_on_top() {
        let mut app = app_with_tasks(&[]);
        app.show_help = true;
        let output = render_to_string(TERM_W, TERM_H, |frame, _| render(frame, &mut app));
        assert!(output.contains("Key Bindings"));
    }
}
