use super::*;
use crate::app::TodoMode;
use crate::types::TodoItem;
use ratatui::widgets::{List, ListItem, ListState};

pub fn render_todo_view(frame: &mut Frame, app: &App, body: Rect) {
    match app.todo_mode {
        TodoMode::Browsing => render_todo_list(frame, app, body),
        TodoMode::Adding => render_todo_input(frame, app, body, " Add new todo "),
        TodoMode::Editing { .. } => render_todo_input(frame, app, body, " Edit todo "),
    }
}

fn render_todo_list(frame: &mut Frame, app: &App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // List
            Constraint::Length(1), // Controls
        ])
        .split(body);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Indexed(99)))
        .title(format!(" Todos ({}) ", app.todos.len()))
        .padding(Padding::horizontal(1));

    if app.todos.is_empty() {
        let empty = Paragraph::new("No todos yet. Press 'a' to add one.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, chunks[0]);
    } else {
        let items: Vec<ListItem> = app
            .todo_items()
            .iter()
            .enumerate()
            .map(|(i, todo)| todo_list_item(todo, i == app.selected_todo))
            .collect();

        let mut list_state = ListState::default();
        list_state.select(Some(app.selected_todo));

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::BOLD));
        frame.render_stateful_widget(list, chunks[0], &mut list_state);
    }

    let controls = utils::key_hints(&[
        ("a", "add"),
        ("e", "edit"),
        ("enter", "toggle"),
        ("d", "delete"),
    ]);
    frame.render_widget(
        Paragraph::new(controls).alignment(Alignment::Center),
        chunks[1],
    );
}

fn todo_list_item(todo: &TodoItem, selected: bool) -> ListItem<'static> {
    let marker = if selected { "▶ " } else { "  " };
    let check = if todo.completed { "[x] " } else { "[ ] " };

    let text_style = if todo.completed {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(Color::White)
    };

    ListItem::new(Line::from(vec![
        Span::styled(marker, Style::default().fg(Color::Indexed(205))),
        Span::styled(check, Style::default().fg(Color::DarkGray)),
        Span::styled(todo.text.clone(), text_style),
    ]))
}

fn render_todo_input(frame: &mut Frame, app: &App, body: Rect, title: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input field
            Constraint::Length(1), // Character count
            Constraint::Min(0),
            Constraint::Length(1), // Controls
        ])
        .split(body);

    let (before, after) = app.todo_input.split_at_cursor();
    let input = Paragraph::new(format!("{}█{}", before, after))
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(title.to_string())
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(input, chunks[0]);

    if let Some(limit) = app.todo_input.limit {
        let count = Paragraph::new(format!(
            "{}/{}",
            app.todo_input.value.chars().count(),
            limit
        ))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Right);
        frame.render_widget(count, chunks[1]);
    }

    let controls = utils::key_hints(&[("enter", "confirm"), ("esc", "cancel")]);
    frame.render_widget(
        Paragraph::new(controls).alignment(Alignment::Center),
        chunks[3],
    );
}
