use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_todo_list_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    let changed = match key.code {
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.begin_add_todo();
            false
        }
        KeyCode::Char('e') | KeyCode::Char('E') => {
            app.begin_edit_todo();
            false
        }
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => app.delete_selected_todo(),
        KeyCode::Enter => app.toggle_selected_todo(),
        KeyCode::Down | KeyCode::Char('j') => {
            app.todo_select_next();
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.todo_select_previous();
            false
        }
        _ => false,
    };

    if changed {
        enqueue_action(action_tx, Action::SaveTodos);
    }
}

pub(super) fn handle_todo_input_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Enter => {
            if app.confirm_todo_input() {
                enqueue_action(action_tx, Action::SaveTodos);
            }
        }
        KeyCode::Esc => app.cancel_todo_input(),
        KeyCode::Backspace => app.todo_input.backspace(),
        KeyCode::Left => app.todo_input.move_left(),
        KeyCode::Right => app.todo_input.move_right(),
        KeyCode::Home => app.todo_input.home(),
        KeyCode::End => app.todo_input.end(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.todo_input.insert(c);
        }
        _ => {}
    }
}
