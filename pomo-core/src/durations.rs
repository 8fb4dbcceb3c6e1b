use std::fmt;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_WORK: Duration = Duration::from_secs(25 * 60);
pub const DEFAULT_SHORT_BREAK: Duration = Duration::from_secs(5 * 60);
pub const DEFAULT_LONG_BREAK: Duration = Duration::from_secs(15 * 60);

/// Every n-th completed work session is followed by a long break.
pub const LONG_BREAK_INTERVAL: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionType {
    Work,
    ShortBreak,
    LongBreak,
}

impl SessionType {
    pub fn name(&self) -> &'static str {
        match self {
            SessionType::Work => "Work",
            SessionType::ShortBreak => "Short Break",
            SessionType::LongBreak => "Long Break",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            SessionType::Work => "🍅",
            SessionType::ShortBreak => "☕",
            SessionType::LongBreak => "🛋️",
        }
    }
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DurationError {
    #[error("{session} duration must be greater than zero")]
    NotPositive { session: SessionType },
}

/// Session lengths for the three session types. Always fully populated and
/// validated on construction, so resolving a duration cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationConfig {
    work: Duration,
    short_break: Duration,
    long_break: Duration,
}

impl DurationConfig {
    pub fn new(
        work: Duration,
        short_break: Duration,
        long_break: Duration,
    ) -> Result<Self, DurationError> {
        for (session, duration) in [
            (SessionType::Work, work),
            (SessionType::ShortBreak, short_break),
            (SessionType::LongBreak, long_break),
        ] {
            if duration.is_zero() {
                return Err(DurationError::NotPositive { session });
            }
        }

        Ok(Self {
            work,
            short_break,
            long_break,
        })
    }

    pub fn resolve(&self, session: SessionType) -> Duration {
        match session {
            SessionType::Work => self.work,
            SessionType::ShortBreak => self.short_break,
            SessionType::LongBreak => self.long_break,
        }
    }
}

impl Default for DurationConfig {
    fn default() -> Self {
        Self {
            work: DEFAULT_WORK,
            short_break: DEFAULT_SHORT_BREAK,
            long_break: DEFAULT_LONG_BREAK,
        }
    }
}

/// Format a countdown as MM:SS, or H:MM:SS once an hour or more is left.
pub fn format_countdown(duration: Duration) -> String {
    let total = duration.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mins(m: u64) -> Duration {
        Duration::from_secs(m * 60)
    }

    #[test]
    fn resolve_returns_configured_duration_per_session() {
        let config = DurationConfig::new(mins(50), mins(10), mins(30)).unwrap();
        assert_eq!(config.resolve(SessionType::Work), mins(50));
        assert_eq!(config.resolve(SessionType::ShortBreak), mins(10));
        assert_eq!(config.resolve(SessionType::LongBreak), mins(30));
    }

    #[test]
    fn default_is_classic_pomodoro() {
        let config = DurationConfig::default();
        assert_eq!(config.resolve(SessionType::Work), mins(25));
        assert_eq!(config.resolve(SessionType::ShortBreak), mins(5));
        assert_eq!(config.resolve(SessionType::LongBreak), mins(15));
    }

    #[test]
    fn zero_duration_is_rejected() {
        let err = DurationConfig::new(mins(25), Duration::ZERO, mins(15)).unwrap_err();
        assert_eq!(
            err,
            DurationError::NotPositive {
                session: SessionType::ShortBreak
            }
        );
        assert_eq!(err.to_string(), "Short Break duration must be greater than zero");
    }

    #[test]
    fn countdown_format() {
        assert_eq!(format_countdown(mins(25)), "25:00");
        assert_eq!(format_countdown(Duration::from_secs(59)), "00:59");
        assert_eq!(format_countdown(Duration::from_secs(5400)), "1:30:00");
        assert_eq!(format_countdown(Duration::ZERO), "00:00");
    }
}
