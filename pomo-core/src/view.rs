use crate::durations::format_countdown;
use crate::progress::ProgressGrid;
use crate::session::TimerState;

/// Presentation parameters for the timer panel. Purely descriptive; the
/// renderer never mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Column width of the whole panel.
    pub width: usize,
    /// Columns taken by the panel border and padding around the grid.
    pub grid_inset: usize,
    /// How many todos the summary lists before collapsing the rest.
    pub summary_limit: usize,
    pub empty_todos: String,
}

impl Theme {
    /// Width the sand grid gets inside the panel.
    pub fn grid_width(&self) -> usize {
        self.width.saturating_sub(self.grid_inset)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            width: 60,
            grid_inset: 4,
            summary_limit: 3,
            empty_todos: "No todos yet (Press Tab to add some)".to_string(),
        }
    }
}

/// The timer panel as text, one field per visual block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
    pub header: String,
    pub grid: Vec<String>,
    pub status: String,
    pub todos: Vec<String>,
}

pub fn header_line(timer: &TimerState) -> String {
    let session = timer.session_type();
    format!(
        "{} {}  {}",
        session.emoji(),
        session.name(),
        format_countdown(timer.remaining())
    )
}

pub fn status_line(running: bool, session_count: u32) -> String {
    let status = if running { "Running ⏱️" } else { "Paused ⏸️" };
    format!("{} | Sessions: {}", status, session_count)
}

/// First few todo texts as bullets, with a trailer counting the rest.
pub fn todo_summary<T: AsRef<str>>(todos: &[T], theme: &Theme) -> Vec<String> {
    if todos.is_empty() {
        return vec![theme.empty_todos.clone()];
    }

    let mut lines: Vec<String> = todos
        .iter()
        .take(theme.summary_limit)
        .map(|todo| format!("• {}", todo.as_ref()))
        .collect();

    if todos.len() > theme.summary_limit {
        lines.push(format!("... and {} more", todos.len() - theme.summary_limit));
    }
    lines
}

pub fn compose<T: AsRef<str>>(
    timer: &TimerState,
    grid: &ProgressGrid,
    todos: &[T],
    theme: &Theme,
) -> Composition {
    Composition {
        header: header_line(timer),
        grid: grid.lines(),
        status: status_line(timer.is_running(), timer.session_count()),
        todos: todo_summary(todos, theme),
    }
}
