use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};

pub(super) fn handle_timer_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char(' ') => app.toggle_timer(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.reset_timer(),
        KeyCode::Char('e') | KeyCode::Char('E') => app.end_session(),
        _ => {}
    }
}
