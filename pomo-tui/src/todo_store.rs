//! Todo persistence: one JSON file per working directory.
//!
//! Files live under `~/.local/share/pomodoro/` and are named after the md5 of
//! the working directory path, so every directory gets its own list.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::types::TodoItem;

/// Shared data directory, created if missing.
pub fn data_dir() -> Result<PathBuf> {
    let dir = dirs::home_dir()
        .context("Cannot determine home directory")?
        .join(".local")
        .join("share")
        .join("pomodoro");
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create data directory {}", dir.display()))?;
    Ok(dir)
}

/// Name of the todo file for `cwd`: hex md5 of the raw path bytes.
pub fn todo_file_name(cwd: &Path) -> String {
    let digest = md5::compute(cwd.as_os_str().as_encoded_bytes());
    format!("{:x}.json", digest)
}

/// Todo file for the current working directory.
pub fn todo_file_path() -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("Cannot determine working directory")?;
    Ok(data_dir()?.join(todo_file_name(&cwd)))
}

/// Load todos from `path`. A missing file is an empty list.
pub async fn load_todos(path: &Path) -> Result<Vec<TodoItem>> {
    let raw = match tokio::fs::read(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read todos at {}", path.display()))
        }
    };

    // Older files may hold a bare `null` for an empty list.
    let todos: Option<Vec<TodoItem>> = serde_json::from_slice(&raw)
        .with_context(|| format!("Failed to parse todos at {}", path.display()))?;
    Ok(todos.unwrap_or_default())
}

pub async fn save_todos(path: &Path, todos: &[TodoItem]) -> Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    let raw = serde_json::to_string_pretty(todos)?;
    tokio::fs::write(path, raw)
        .await
        .with_context(|| format!("Failed to write todos at {}", path.display()))?;
    Ok(())
}
