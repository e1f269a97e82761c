use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::{Config, FilterMode, TaskId};
use crate::ops::task_list::{SubmitOutcome, TaskList};

use super::input;
use super::render;
use super::status::StatusLine;
use super::theme::Theme;

/// Which part of the screen receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Task text input
    Text,
    /// Due date input
    Date,
    /// Task list
    List,
}

impl Focus {
    pub fn next(self) -> Focus {
        match self {
            Focus::Text => Focus::Date,
            Focus::Date => Focus::List,
            Focus::List => Focus::Text,
        }
    }

    pub fn prev(self) -> Focus {
        match self {
            Focus::Text => Focus::List,
            Focus::Date => Focus::Text,
            Focus::List => Focus::Date,
        }
    }

    pub fn is_form(self) -> bool {
        matches!(self, Focus::Text | Focus::Date)
    }
}

/// Main application state
pub struct App {
    pub tasks: TaskList,
    pub focus: Focus,
    /// Byte offset of the cursor in the text buffer
    pub text_cursor: usize,
    /// Byte offset of the cursor in the date buffer
    pub date_cursor: usize,
    /// First visible column of the text field (updated by the renderer)
    pub text_scroll: usize,
    /// First visible column of the date field (updated by the renderer)
    pub date_scroll: usize,
    /// Cursor index into the visible task list
    pub list_cursor: usize,
    /// First visible task (updated by the renderer)
    pub list_scroll: usize,
    pub status: StatusLine,
    pub theme: Theme,
    pub show_help: bool,
    pub show_key_hints: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let mut tasks = TaskList::new().with_notify_duration(config.notifications.duration());
        tasks.set_filter(config.ui.default_filter);
        App {
            tasks,
            focus: Focus::Text,
            text_cursor: 0,
            date_cursor: 0,
            text_scroll: 0,
            date_scroll: 0,
            list_cursor: 0,
            list_scroll: 0,
            status: StatusLine::new(),
            theme: Theme::from_config(&config.ui),
            show_help: false,
            show_key_hints: config.ui.show_key_hints,
            should_quit: false,
        }
    }

    /// Id of the task under the list cursor
    pub fn selected_id(&self) -> Option<TaskId> {
        self.tasks
            .visible_tasks()
            .get(self.list_cursor)
            .map(|t| t.id)
    }

    /// Keep the list cursor on a visible row
    pub fn clamp_cursor(&mut self) {
        let count = self.tasks.visible_tasks().len();
        self.list_cursor = self.list_cursor.min(count.saturating_sub(1));
    }

    /// Put the list cursor on a task if it is visible
    fn select(&mut self, id: TaskId) {
        if let Some(pos) = self.tasks.visible_tasks().iter().position(|t| t.id == id) {
            self.list_cursor = pos;
        }
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let count = self.tasks.visible_tasks().len();
        if count == 0 {
            self.list_cursor = 0;
            return;
        }
        let target = self.list_cursor as isize + delta;
        self.list_cursor = target.clamp(0, count as isize - 1) as usize;
    }

    /// Submit the form; a rejected submit leaves focus and buffers alone
    pub fn submit_form(&mut self) {
        let Ok(outcome) = self.tasks.submit(&mut self.status) else {
            return;
        };
        self.text_cursor = 0;
        self.date_cursor = 0;
        match outcome {
            SubmitOutcome::Added(id) => {
                self.select(id);
                self.focus = Focus::Text;
            }
            SubmitOutcome::Updated(id) => {
                self.select(id);
                self.focus = Focus::List;
            }
        }
        self.clamp_cursor();
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_id()
            && self.tasks.toggle_complete(id).is_ok()
        {
            // The toggled task may drop out of a Completed/Pending view
            self.clamp_cursor();
        }
    }

    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        let was_editing = self.tasks.is_editing();
        if self.tasks.delete_task(id).is_ok() {
            if was_editing && !self.tasks.is_editing() {
                self.text_cursor = 0;
                self.date_cursor = 0;
            }
            self.clamp_cursor();
        }
    }

    /// Load the selected task into the form and focus the text field
    pub fn edit_selected(&mut self) {
        if let Some(id) = self.selected_id()
            && self.tasks.begin_edit(id).is_ok()
        {
            self.text_cursor = self.tasks.text_buffer().len();
            self.date_cursor = self.tasks.date_buffer().len();
            self.focus = Focus::Text;
        }
    }

    pub fn cancel_edit(&mut self) {
        if self.tasks.is_editing() {
            self.tasks.cancel_edit();
            self.text_cursor = 0;
            self.date_cursor = 0;
        }
    }

    pub fn set_filter(&mut self, mode: FilterMode) {
        let selected = self.selected_id();
        self.tasks.set_filter(mode);
        match selected {
            Some(id) if self.tasks.get(id).is_some_and(|t| mode.matches(t)) => self.select(id),
            _ => self.list_cursor = 0,
        }
        self.clamp_cursor();
    }
}

/// Run the TUI application
pub fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Restore the terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    tracing::info!("starting tui");
    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!(tasks = app.tasks.len(), "exiting tui");
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.status.tick(Instant::now());
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
