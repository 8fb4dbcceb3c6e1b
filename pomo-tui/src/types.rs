use serde::{Deserialize, Serialize};

/// A todo entry as stored in the per-directory JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TodoItem {
    pub text: String,
    pub completed: bool,
    pub id: i64,
}

impl AsRef<str> for TodoItem {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
