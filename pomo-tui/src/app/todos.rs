use super::*;
use crate::types::TodoItem;

impl App {
    pub fn todo_items(&self) -> &[TodoItem] {
        self.todos.items()
    }

    /// Replace the list with todos loaded from disk.
    pub fn load_todos(&mut self, items: Vec<TodoItem>) {
        self.todos = TodoList::from_items(items);
        self.selected_todo = 0;
    }

    pub fn todo_select_next(&mut self) {
        if self.selected_todo + 1 < self.todos.len() {
            self.selected_todo += 1;
        }
    }

    pub fn todo_select_previous(&mut self) {
        self.selected_todo = self.selected_todo.saturating_sub(1);
    }

    pub fn begin_add_todo(&mut self) {
        self.todo_input.clear();
        self.todo_mode = TodoMode::Adding;
    }

    /// Open the selected todo for editing. No-op on an empty list.
    pub fn begin_edit_todo(&mut self) {
        let Some(todo) = self.todos.get(self.selected_todo) else {
            return;
        };
        let text = todo.text.clone();
        self.todo_input.set_value(&text);
        self.todo_mode = TodoMode::Editing {
            index: self.selected_todo,
        };
    }

    pub fn cancel_todo_input(&mut self) {
        self.todo_input.clear();
        self.todo_mode = TodoMode::Browsing;
    }

    /// Apply the text input to the list and return to browsing. Returns
    /// whether the list changed. Empty input changes nothing.
    pub fn confirm_todo_input(&mut self) -> bool {
        let text = self.todo_input.value.trim().to_string();
        let mode = self.todo_mode;
        self.cancel_todo_input();

        if text.is_empty() {
            return false;
        }

        match mode {
            TodoMode::Adding => {
                self.todos.add(&text);
                self.selected_todo = self.todos.len() - 1;
                true
            }
            TodoMode::Editing { index } => self.todos.edit(index, &text),
            TodoMode::Browsing => false,
        }
    }

    pub fn delete_selected_todo(&mut self) -> bool {
        if self.todos.delete(self.selected_todo).is_none() {
            return false;
        }
        if self.selected_todo >= self.todos.len() {
            self.selected_todo = self.todos.len().saturating_sub(1);
        }
        true
    }

    pub fn toggle_selected_todo(&mut self) -> bool {
        self.todos.toggle(self.selected_todo).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_app;

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.todo_input.insert(c);
        }
    }

    fn app_with(texts: &[&str]) -> App {
        let mut app = test_app();
        for text in texts {
            app.begin_add_todo();
            type_text(&mut app, text);
            assert!(app.confirm_todo_input());
        }
        app
    }

    #[test]
    fn add_selects_new_todo() {
        let app = app_with(&["one", "two"]);
        assert_eq!(app.todos.len(), 2);
        assert_eq!(app.selected_todo, 1);
        assert_eq!(app.todo_mode, TodoMode::Browsing);
        assert_eq!(app.todo_input.value, "");
    }

    #[test]
    fn empty_input_is_ignored() {
        let mut app = test_app();
        app.begin_add_todo();
        type_text(&mut app, "   ");
        assert!(!app.confirm_todo_input());
        assert!(app.todos.is_empty());
        assert_eq!(app.todo_mode, TodoMode::Browsing);
    }

    #[test]
    fn edit_prefills_and_replaces_text() {
        let mut app = app_with(&["draft", "other"]);
        app.todo_select_previous();
        app.begin_edit_todo();
        assert_eq!(app.todo_input.value, "draft");
        assert_eq!(app.todo_mode, TodoMode::Editing { index: 0 });

        type_text(&mut app, " v2");
        assert!(app.confirm_todo_input());
        assert_eq!(app.todos.get(0).unwrap().text, "draft v2");
        assert_eq!(app.todos.get(0).unwrap().id, 1);
    }

    #[test]
    fn cancel_leaves_list_untouched() {
        let mut app = app_with(&["keep"]);
        app.begin_edit_todo();
        type_text(&mut app, "!!!");
        app.cancel_todo_input();
        assert_eq!(app.todos.get(0).unwrap().text, "keep");
    }

    #[test]
    fn edit_on_empty_list_stays_browsing() {
        let mut app = test_app();
        app.begin_edit_todo();
        assert_eq!(app.todo_mode, TodoMode::Browsing);
    }

    #[test]
    fn delete_last_moves_selection_up() {
        let mut app = app_with(&["a", "b", "c"]);
        assert_eq!(app.selected_todo, 2);
        assert!(app.delete_selected_todo());
        assert_eq!(app.selected_todo, 1);
        assert!(app.delete_selected_todo());
        assert!(app.delete_selected_todo());
        assert_eq!(app.selected_todo, 0);
        assert!(!app.delete_selected_todo());
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut app = app_with(&["a", "b"]);
        app.todo_select_next();
        assert_eq!(app.selected_todo, 1);
        app.todo_select_previous();
        app.todo_select_previous();
        assert_eq!(app.selected_todo, 0);
    }

    #[test]
    fn toggle_selected() {
        let mut app = app_with(&["a"]);
        assert!(app.toggle_selected_todo());
        assert!(app.todos.get(0).unwrap().completed);

        let mut empty = test_app();
        assert!(!empty.toggle_selected_todo());
    }

    #[test]
    fn loading_resets_selection() {
        let mut app = app_with(&["a", "b"]);
        app.load_todos(vec![TodoItem {
            text: "from disk".to_string(),
            completed: true,
            id: 42,
        }]);
        assert_eq!(app.selected_todo, 0);
        assert_eq!(app.todo_items()[0].text, "from disk");
    }
}
