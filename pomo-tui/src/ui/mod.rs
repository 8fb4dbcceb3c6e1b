use crate::app::{App, View};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
    Frame,
};

mod timer_view;
mod todo_view;
pub(super) mod utils;

pub fn render(frame: &mut Frame, app: &mut App) {
    let column = utils::centered_column(app.theme.width as u16, frame.area());

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .vertical_margin(1)
        .constraints([
            Constraint::Min(0),    // Current view
            Constraint::Length(1), // Status message
            Constraint::Length(1), // Key hints
        ])
        .split(column);

    match app.current_view {
        View::Timer => timer_view::render_timer_view(frame, app, rows[0]),
        View::Todos => todo_view::render_todo_view(frame, app, rows[0]),
    }

    render_status_message(frame, rows[1], app);
    render_global_hints(frame, rows[2]);
}

fn render_status_message(frame: &mut Frame, area: Rect, app: &App) {
    let Some(message) = app.status_message.as_deref() else {
        return;
    };

    let color = if message.starts_with("Error") {
        Color::Red
    } else {
        Color::Yellow
    };

    let status = Paragraph::new(message)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center);
    frame.render_widget(status, area);
}

fn render_global_hints(frame: &mut Frame, area: Rect) {
    let hints = utils::key_hints(&[("tab", "switch view"), ("q", "quit")]);
    frame.render_widget(Paragraph::new(hints).alignment(Alignment::Center), area);
}
