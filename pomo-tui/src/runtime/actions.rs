use crate::app::App;
use crate::todo_store;

use super::action_queue::Action;

pub(super) async fn run_action(action: Action, app: &mut App) {
    match action {
        Action::SaveTodos => save_todos(app).await,
    }
}

async fn save_todos(app: &mut App) {
    let Some(path) = app.todo_path.clone() else {
        return;
    };

    match todo_store::save_todos(&path, app.todo_items()).await {
        Ok(()) => {
            tracing::debug!(count = app.todos.len(), path = %path.display(), "saved todos");
        }
        Err(e) => {
            tracing::error!(error = ?e, path = %path.display(), "failed to save todos");
            app.set_status(format!("Error saving todos: {}", e));
        }
    }
}
