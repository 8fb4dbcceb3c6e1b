use super::*;
use pomo_core::{compose, ProgressGrid};

/// Header line and the blank line under it.
const PANEL_HEADER_ROWS: u16 = 2;

/// Rows the timer panel asks for: header rows, the grid, two border rows and
/// two padding rows.
fn panel_height(progress_lines: usize) -> u16 {
    u16::try_from(progress_lines)
        .unwrap_or(u16::MAX)
        .saturating_add(PANEL_HEADER_ROWS + 4)
}

pub fn render_timer_view(frame: &mut Frame, app: &App, body: Rect) {
    let todo_lines = app.theme.summary_limit as u16 + 1;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            // Header, blank, grid, plus borders and vertical padding
            Constraint::Length(panel_height(app.progress_lines)),
            Constraint::Length(2),              // Running / paused
            Constraint::Length(todo_lines + 4), // Todo summary
            Constraint::Min(0),
            Constraint::Length(1), // Controls
        ])
        .split(body);

    let panel = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if app.timer.is_running() {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Indexed(205))
        })
        .padding(Padding::new(1, 1, 1, 1));
    let inner = panel.inner(chunks[0]);

    // Only build the rows the panel can show
    let grid = ProgressGrid::render(
        app.timer.remaining(),
        app.timer.total(),
        app.theme.grid_width().min(inner.width as usize),
        app.progress_lines
            .min(inner.height.saturating_sub(PANEL_HEADER_ROWS) as usize),
        &app.gradient,
    );
    let composition = compose(&app.timer, &grid, app.todo_items(), &app.theme);

    let mut lines = vec![
        Line::from(Span::styled(
            composition.header,
            Style::default()
                .fg(Color::Indexed(205))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(grid_lines(&grid));

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(panel),
        chunks[0],
    );

    let status = Paragraph::new(composition.status)
        .style(Style::default().fg(Color::Indexed(241)))
        .alignment(Alignment::Center);
    frame.render_widget(status, chunks[1]);

    let todos: Vec<Line> = composition.todos.into_iter().map(Line::from).collect();
    let summary = Paragraph::new(todos)
        .style(Style::default().fg(Color::Indexed(99)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Todos ")
                .padding(Padding::uniform(1)),
        );
    frame.render_widget(summary, chunks[2]);

    let controls = utils::key_hints(&[
        ("space", "start/pause"),
        ("r", "reset"),
        ("e", "end session"),
    ]);
    frame.render_widget(
        Paragraph::new(controls).alignment(Alignment::Center),
        chunks[4],
    );
}

/// One styled line per grid row, each cell in its gradient color.
/// Drained cells are dimmed.
fn grid_lines(grid: &ProgressGrid) -> Vec<Line<'static>> {
    grid.rows()
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .map(|cell| {
                    let mut style = Style::default().fg(utils::to_color(cell.color));
                    if !cell.filled {
                        style = style.add_modifier(Modifier::DIM);
                    }
                    Span::styled(cell.glyph().to_string(), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}
