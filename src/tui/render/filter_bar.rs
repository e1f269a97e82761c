use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::FilterMode;
use crate::tui::app::App;

/// Render the filter buttons with per-filter counts, and a separator below
pub fn render_filter_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // buttons
            Constraint::Length(1), // separator
        ])
        .split(area);

    let bg = app.theme.background;
    let counts = app.tasks.counts();
    let active = app.tasks.filter();

    let mut spans: Vec<Span> = vec![Span::styled(" ", Style::default().bg(bg))];
    for (i, mode) in FilterMode::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" ", Style::default().bg(bg)));
        }
        let style = if *mode == active {
            Style::default()
                .fg(app.theme.background)
                .bg(app.theme.yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.dim).bg(app.theme.selection_bg)
        };
        spans.push(Span::styled(
            format!(" {} ({}) ", mode.label(), counts.for_filter(*mode)),
            style,
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        chunks[0],
    );

    let separator = "\u{2500}".repeat(chunks[1].width as usize);
    frame.render_widget(
        Paragraph::new(Span::styled(
            separator,
            Style::default().fg(app.theme.dim).bg(bg),
        )),
        chunks[1],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;
    use ratatui::layout::Position;
    use pretty_assertions::assert_eq;

    #[test]
    fn shows_counts_for_each_filter() {
        let app = app_with_tasks(&[("A", "", true), ("B", "", false), ("C", "", false)]);
        let output = render_to_string(60, 2, |frame, area| {
            render_filter_bar(frame, &app, area)
        });
        let first = output.lines().next().unwrap();
        assert_eq!(
            first,
            "  All Tasks (3)   Completed Tasks (1)   Pending Tasks (2)"
        );
        assert!(output.lines().nth(1).unwrap().starts_with("\u{2500}\u{2500}"));
    }

    #[test]
    fn active_filter_is_highlighted() {
        let mut app = app_with_tasks(&[]);
        app.set_filter(FilterMode::Pending);
        let backend = render_to_backend(60, 2, |frame, area| {
            render_filter_bar(frame, &app, area)
        });
        let buf = backend.buffer();
        // " All Tasks (0) " starts at column 1, "Pending" button after the other two
        let bg_at = |x: usize| buf.cell(Position::new(x as u16, 0)).unwrap().bg;
        assert_eq!(bg_at(2), app.theme.selection_bg);
        let pending_col = 1 + " All Tasks (0) ".len() + 1 + " Completed Tasks (0) ".len() + 1;
        assert_eq!(bg_at(pending_col + 1), app.theme.yellow);
    }
}
