use crate::app::App;
use crate::config::Settings;
use pomo_core::{DurationConfig, Gradient};
use std::time::Duration;

/// App with a 2s work session and 1s breaks, no todo file.
pub fn test_app() -> App {
    let settings = Settings {
        durations: DurationConfig::new(
            Duration::from_secs(2),
            Duration::from_secs(1),
            Duration::from_secs(1),
        )
        .unwrap(),
        progress_lines: 5,
        gradient: Gradient::default(),
    };
    App::new(&settings)
}
