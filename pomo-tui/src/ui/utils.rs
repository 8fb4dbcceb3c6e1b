use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
};

/// Full-height column of `width` centered horizontally in `r`. Shrinks to
/// `r` when the terminal is narrower.
pub fn centered_column(width: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((r.width - width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(r)[1]
}

/// Key hint line in the form `key: action • key: action`.
pub fn key_hints(hints: &[(&str, &str)]) -> Line<'static> {
    let muted = Style::default().fg(Color::DarkGray);
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", muted));
        }
        spans.push(Span::styled(key.to_string(), Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(format!(": {}", action), muted));
    }
    Line::from(spans)
}

pub fn to_color(rgb: pomo_core::Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}
