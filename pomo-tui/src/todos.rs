use crate::types::TodoItem;

/// Maximum todo text length, in characters.
pub const TEXT_LIMIT: usize = 100;

/// In-memory todo list. Ids grow monotonically and are never reused within
/// a run, even after deletes.
#[derive(Debug, Clone, PartialEq)]
pub struct TodoList {
    items: Vec<TodoItem>,
    next_id: i64,
}

impl TodoList {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Wrap items loaded from disk. The next id continues after the highest
    /// id seen.
    pub fn from_items(items: Vec<TodoItem>) -> Self {
        let max_id = items.iter().map(|t| t.id).max().unwrap_or(0);
        Self {
            items,
            next_id: max_id + 1,
        }
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TodoItem> {
        self.items.get(index)
    }

    /// Append a todo and return its id.
    pub fn add(&mut self, text: &str) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(TodoItem {
            text: text.to_string(),
            completed: false,
            id,
        });
        id
    }

    pub fn delete(&mut self, index: usize) -> Option<TodoItem> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Flip the completed flag. Returns the new value.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let item = self.items.get_mut(index)?;
        item.completed = !item.completed;
        Some(item.completed)
    }

    pub fn edit(&mut self, index: usize, text: &str) -> bool {
        match self.items.get_mut(index) {
            Some(item) => {
                item.text = text.to_string();
                true
            }
            None => false,
        }
    }
}

impl Default for TodoList {
    fn default() -> Self {
        Self::new()
    }
}
