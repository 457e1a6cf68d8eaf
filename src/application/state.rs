//! Application state management for the workout tracker.
//!
//! This module holds the owned workout store together with the form buffers,
//! the active tab and any pending notice for the terminal user interface.

use crate::domain::{Category, DomainResult, Summary, SummaryAggregator, WorkoutStore};

/// Top-level screens of the application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Tab {
    /// Workout entry form
    #[default]
    Log,
    /// Text listing of every logged workout
    Summary,
    /// Charts of minutes per category
    Progress,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Log, Tab::Summary, Tab::Progress];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Log => "Log Workout",
            Tab::Summary => "Summary",
            Tab::Progress => "Progress",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Log => 0,
            Tab::Summary => 1,
            Tab::Progress => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Field of the entry form that currently has focus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormField {
    Category,
    #[default]
    Exercise,
    Duration,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Category => FormField::Exercise,
            FormField::Exercise => FormField::Duration,
            FormField::Duration => FormField::Category,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            FormField::Category => FormField::Duration,
            FormField::Exercise => FormField::Category,
            FormField::Duration => FormField::Exercise,
        }
    }

    pub fn is_text(self) -> bool {
        !matches!(self, FormField::Category)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Modal message shown on top of the current tab until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: &str, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: title.to_string(),
            message: message.into(),
        }
    }

    pub fn error(title: &str, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.to_string(),
            message: message.into(),
        }
    }
}

/// Represents the current mode of the application.
///
/// The mode determines how key presses are interpreted and which overlays
/// are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Navigation between tabs and form fields
    Normal,
    /// Typing into the focused text field
    Editing,
    /// Help screen is displayed
    Help,
    /// A notice pop-up is waiting to be dismissed
    Notice,
}

/// Main application state containing the workout store and UI state.
///
/// # Examples
///
/// ```
/// use acefit::application::{App, AppMode};
///
/// let mut app = App::default();
/// app.exercise_input = "Pushups".to_string();
/// app.duration_input = "20".to_string();
/// app.add_workout();
///
/// assert_eq!(app.store.len(), 1);
/// assert_eq!(app.mode, AppMode::Notice);
/// ```
#[derive(Debug)]
pub struct App {
    /// Every workout logged during this session
    pub store: WorkoutStore,
    /// Active tab
    pub tab: Tab,
    /// Current application mode
    pub mode: AppMode,
    /// Focused form field on the log tab
    pub focus: FormField,
    /// Category selected in the form
    pub category: Category,
    /// Committed exercise text
    pub exercise_input: String,
    /// Committed duration text
    pub duration_input: String,
    /// Edit buffer for the focused field (editing mode)
    pub input: String,
    /// Cursor position within the edit buffer, in characters
    pub cursor_position: usize,
    /// Pending pop-up message
    pub notice: Option<Notice>,
    /// Scroll position in help text
    pub help_scroll: usize,
    /// Scroll position in the summary report
    pub summary_scroll: usize,
    /// Temporary status message to display
    pub status_message: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            store: WorkoutStore::default(),
            tab: Tab::default(),
            mode: AppMode::Normal,
            focus: FormField::default(),
            category: Category::default(),
            exercise_input: String::new(),
            duration_input: String::new(),
            input: String::new(),
            cursor_position: 0,
            notice: None,
            help_scroll: 0,
            summary_scroll: 0,
            status_message: None,
        }
    }
}

impl App {
    pub fn with_tab(tab: Tab) -> Self {
        Self {
            tab,
            ..Self::default()
        }
    }

    pub fn select_tab(&mut self, tab: Tab) {
        if self.tab != tab {
            tracing::info!(tab = tab.title(), "switched tab");
        }
        self.tab = tab;
        self.summary_scroll = 0;
        self.status_message = None;
    }

    pub fn next_tab(&mut self) {
        self.select_tab(self.tab.next());
    }

    pub fn previous_tab(&mut self) {
        self.select_tab(self.tab.previous());
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    pub fn next_category(&mut self) {
        self.category = self.category.next();
    }

    pub fn previous_category(&mut self) {
        self.category = self.category.previous();
    }

    /// Switches to editing mode for the focused text field.
    ///
    /// Does nothing when the category selector has focus.
    pub fn start_editing(&mut self) {
        let current = match self.focus {
            FormField::Category => return,
            FormField::Exercise => &self.exercise_input,
            FormField::Duration => &self.duration_input,
        };
        self.input = current.clone();
        self.cursor_position = self.input.chars().count();
        self.mode = AppMode::Editing;
    }

    /// Commits the edit buffer to the focused field.
    ///
    /// Committing the duration submits the form; committing the exercise
    /// moves focus on to the duration.
    pub fn finish_editing(&mut self) {
        let value = std::mem::take(&mut self.input);
        self.cursor_position = 0;
        self.mode = AppMode::Normal;

        match self.focus {
            FormField::Category => {}
            FormField::Exercise => {
                self.exercise_input = value;
                self.focus = FormField::Duration;
            }
            FormField::Duration => {
                self.duration_input = value;
                self.add_workout();
            }
        }
    }

    /// Cancels editing and returns to normal mode without changing the field.
    pub fn cancel_editing(&mut self) {
        self.mode = AppMode::Normal;
        self.input.clear();
        self.cursor_position = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        let at = byte_index(&self.input, self.cursor_position);
        self.input.insert(at, c);
        self.cursor_position += 1;
    }

    pub fn delete_before_cursor(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            let at = byte_index(&self.input, self.cursor_position);
            self.input.remove(at);
        }
    }

    pub fn delete_at_cursor(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            let at = byte_index(&self.input, self.cursor_position);
            self.input.remove(at);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            self.cursor_position += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.input.chars().count();
    }

    /// Validates the form and logs the workout under the selected category.
    ///
    /// Success raises an info notice and clears both text fields. Failure
    /// raises an error notice and leaves the form and the store untouched.
    pub fn add_workout(&mut self) {
        let category = self.category;
        match self.store.log(category, &self.exercise_input, &self.duration_input) {
            Ok(record) => {
                tracing::info!(
                    category = category.label(),
                    exercise = record.exercise(),
                    duration = record.duration(),
                    "workout logged"
                );
                let message = format!(
                    "'{}' added to {} ({} min).",
                    record.exercise(),
                    category,
                    record.duration()
                );
                self.exercise_input.clear();
                self.duration_input.clear();
                self.focus = FormField::Exercise;
                self.show_notice(Notice::info("Success", message));
            }
            Err(error) => {
                tracing::warn!(%error, "workout rejected");
                self.show_notice(Notice::error("Error", error.to_string()));
            }
        }
    }

    /// Opens the summary tab, or tells the user there is nothing to show yet.
    pub fn view_summary(&mut self) {
        match self.summary() {
            Ok(_) => self.select_tab(Tab::Summary),
            Err(error) => self.show_notice(Notice::info("Workouts", error.to_string())),
        }
    }

    pub fn summary(&self) -> DomainResult<Summary> {
        SummaryAggregator::summarize(&self.store)
    }

    pub fn report(&self) -> DomainResult<String> {
        SummaryAggregator::report(&self.store)
    }

    pub fn show_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
        self.mode = AppMode::Notice;
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
        self.mode = AppMode::Normal;
    }

    pub fn show_help(&mut self) {
        self.mode = AppMode::Help;
        self.help_scroll = 0;
    }

    pub fn close_help(&mut self) {
        self.mode = AppMode::Normal;
    }

    pub fn scroll_summary_up(&mut self, lines: usize) {
        self.summary_scroll = self.summary_scroll.saturating_sub(lines);
    }

    pub fn scroll_summary_down(&mut self, lines: usize) {
        let max = self
            .report()
            .map(|report| report.lines().count().saturating_sub(1))
            .unwrap_or(0);
        self.summary_scroll = (self.summary_scroll + lines).min(max);
    }

    /// Processes the result of a clipboard copy.
    ///
    /// # Arguments
    ///
    /// * `result` - Confirmation text or error message from the clipboard adapter
    pub fn set_clipboard_result(&mut self, result: Result<String, String>) {
        match result {
            Ok(message) => {
                self.status_message = Some(message);
            }
            Err(error) => {
                tracing::warn!(%error, "clipboard copy failed");
                self.status_message = Some(format!("Copy failed: {}", error));
            }
        }
    }
}

fn byte_index(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map_or(s.len(), |(index, _)| index)
}
