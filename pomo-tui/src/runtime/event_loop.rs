use crate::app::App;
use crate::ui;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

use super::action_queue::channel;
use super::actions::run_action;
use super::tick_clock::TickClock;
use super::views::handle_key;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let (action_tx, mut action_rx) = channel();

    let mut clock = TickClock::new(Instant::now());

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handle_key(key, app, &action_tx);
                }
                // Layout is recomputed from the frame size on every draw.
                Event::Resize(width, height) => {
                    tracing::debug!(width, height, "terminal resized");
                }
                _ => {}
            }
        }

        for _ in 0..clock.due(Instant::now(), app.timer.is_running()) {
            app.tick();
        }

        while let Ok(action) = action_rx.try_recv() {
            run_action(action, app).await;
        }

        if !app.running {
            break;
        }
    }

    Ok(())
}
