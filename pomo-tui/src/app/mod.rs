use crate::config::Settings;
use crate::todos::{TodoList, TEXT_LIMIT};
use pomo_core::{Gradient, Theme, TickOutcome, TimerState, TICK};
use std::path::PathBuf;

mod state;
mod todos;
pub use state::{TextInput, TodoMode, View};

pub struct App {
    pub running: bool,
    pub current_view: View,
    pub status_message: Option<String>,

    // Pomodoro timer
    pub timer: TimerState,
    pub progress_lines: usize,
    pub gradient: Gradient,
    pub theme: Theme,

    // Todo list
    pub todos: TodoList,
    pub todo_mode: TodoMode,
    pub todo_input: TextInput,
    pub selected_todo: usize,
    /// Where todos are saved. `None` keeps them in memory only.
    pub todo_path: Option<PathBuf>,
}

impl App {
    pub fn new(settings: &Settings) -> Self {
        Self {
            running: true,
            current_view: View::Timer,
            status_message: None,
            timer: TimerState::new(settings.durations),
            progress_lines: settings.progress_lines,
            gradient: settings.gradient,
            theme: Theme::default(),
            todos: TodoList::new(),
            todo_mode: TodoMode::Browsing,
            todo_input: TextInput::with_limit(TEXT_LIMIT),
            selected_todo: 0,
            todo_path: None,
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn switch_view(&mut self) {
        self.current_view = match self.current_view {
            View::Timer => View::Todos,
            View::Todos => View::Timer,
        };
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Whether keystrokes currently go into the todo text input.
    pub fn is_typing(&self) -> bool {
        self.current_view == View::Todos && self.todo_mode != TodoMode::Browsing
    }

    pub fn toggle_timer(&mut self) {
        self.timer.toggle();
    }

    pub fn reset_timer(&mut self) {
        self.timer.reset();
        self.set_status(format!("{} session reset", self.timer.session_type()));
    }

    pub fn end_session(&mut self) {
        self.timer.end_session();
        self.set_status(format!(
            "Session ended. Up next: {}",
            self.timer.session_type()
        ));
    }

    /// Advance the countdown by one second of wall-clock time.
    pub fn tick(&mut self) {
        if let TickOutcome::Advanced { from, to } = self.timer.tick(TICK) {
            self.set_status(format!("{} finished. Starting {}", from, to));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_app;
    use pomo_core::SessionType;

    #[test]
    fn tab_switches_between_views() {
        let mut app = test_app();
        assert_eq!(app.current_view, View::Timer);
        app.switch_view();
        assert_eq!(app.current_view, View::Todos);
        app.switch_view();
        assert_eq!(app.current_view, View::Timer);
    }

    #[test]
    fn tick_reports_finished_sessions() {
        let mut app = test_app();
        app.toggle_timer();
        app.tick();
        assert!(app.status_message.is_none());
        app.tick();
        assert_eq!(
            app.status_message.as_deref(),
            Some("Work finished. Starting Short Break")
        );
        assert_eq!(app.timer.session_type(), SessionType::ShortBreak);
        assert!(app.timer.is_running());
    }

    #[test]
    fn end_session_pauses_on_next_session() {
        let mut app = test_app();
        app.toggle_timer();
        app.end_session();
        assert!(!app.timer.is_running());
        assert_eq!(
            app.status_message.as_deref(),
            Some("Session ended. Up next: Short Break")
        );
    }

    #[test]
    fn typing_only_in_todo_input() {
        let mut app = test_app();
        assert!(!app.is_typing());
        app.current_view = View::Todos;
        app.begin_add_todo();
        assert!(app.is_typing());
    }
}
