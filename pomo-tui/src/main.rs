mod app;
mod cli;
mod config;
mod logging;
mod runtime;
#[cfg(test)]
mod test_utils;
mod todo_store;
mod todos;
mod types;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use cli::{Cli, Commands};
use config::PomoConfig;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::ConfigPath) = cli.command {
        let path = PomoConfig::ensure_default_file()?;
        println!("{}", path.display());
        return Ok(());
    }

    let settings = match PomoConfig::load().and_then(|config| config.resolve(&cli)) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };

    let data_dir = todo_store::data_dir()?;
    logging::init_logging(&data_dir)?;
    tracing::info!(?settings, "starting pomo");

    let mut app = App::new(&settings);

    let todo_path = todo_store::todo_file_path()?;
    match todo_store::load_todos(&todo_path).await {
        Ok(todos) => {
            tracing::debug!(count = todos.len(), path = %todo_path.display(), "loaded todos");
            app.load_todos(todos);
        }
        Err(e) => {
            tracing::warn!("Could not load todos, starting empty: {:#}", e);
        }
    }
    app.todo_path = Some(todo_path);

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = runtime::run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    finish(res, &app)
}

/// Log how the run ended and hand its result back, so a failed run exits
/// non-zero once the terminal is restored.
fn finish(res: Result<()>, app: &App) -> Result<()> {
    match &res {
        Ok(()) => tracing::info!(sessions = app.timer.session_count(), "exiting"),
        Err(err) => tracing::error!("{:#}", err),
    }
    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_app;

    #[test]
    fn failed_run_is_returned_as_error() {
        let app = test_app();
        let err = finish(Err(anyhow::anyhow!("terminal went away")), &app).unwrap_err();
        assert_eq!(err.to_string(), "terminal went away");
    }

    #[test]
    fn clean_run_is_ok() {
        assert!(finish(Ok(()), &test_app()).is_ok());
    }
}
