use crate::app::{App, View};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::action_queue::{Action, ActionTx};

mod timer;
mod todos;

fn enqueue_action(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}

pub(super) fn handle_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    // Ctrl+C always quits, even mid-edit
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    app.clear_status();

    if app.is_typing() {
        todos::handle_todo_input_key(key, app, action_tx);
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Tab => app.switch_view(),
        _ => match app.current_view {
            View::Timer => timer::handle_timer_key(key, app),
            View::Todos => todos::handle_todo_list_key(key, app, action_tx),
        },
    }
}
