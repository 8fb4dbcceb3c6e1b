use clap::{Parser, Subcommand};
use pomo_core::progress::MAX_LINES;
use std::time::Duration;
use thiserror::Error;

const DURATION_EXAMPLES: &str = "Examples: 10m, 25m, 1h, 1h30m, 90s (breaks take --sb / --lb)";

#[derive(Debug, Parser)]
#[command(name = "pomo")]
#[command(about = "Pomodoro timer with a per-directory todo list")]
pub struct Cli {
    /// Work session duration (e.g. 25m, 1h30m)
    #[arg(short = 's', long = "session", value_parser = parse_duration_arg)]
    pub session: Option<Duration>,

    /// Short break duration (e.g. 5m, 10m)
    #[arg(long = "short-break", visible_alias = "sb", value_parser = parse_duration_arg)]
    pub short_break: Option<Duration>,

    /// Long break duration (e.g. 15m, 30m)
    #[arg(long = "long-break", visible_alias = "lb", value_parser = parse_duration_arg)]
    pub long_break: Option<Duration>,

    /// Number of progress bar lines
    #[arg(short = 'l', long = "lines", value_parser = clap::value_parser!(u16).range(0..=MAX_LINES as i64))]
    pub lines: Option<u16>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print config path and create default file if missing
    ConfigPath,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DurationParseError {
    #[error("empty duration")]
    Empty,
    #[error("missing unit after {0:?}")]
    MissingUnit(String),
    #[error("unknown unit {0:?}")]
    UnknownUnit(String),
    #[error("invalid number {0:?}")]
    InvalidNumber(String),
    #[error("duration out of range")]
    OutOfRange,
}

/// Parse durations like `25m`, `1h30m`, `90s`, `1.5h` or `500ms`.
///
/// A bare `0` is accepted; every other value needs a unit on each number.
pub fn parse_duration(input: &str) -> Result<Duration, DurationParseError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(DurationParseError::Empty);
    }
    if s == "0" {
        return Ok(Duration::ZERO);
    }

    let mut total_secs = 0.0_f64;
    let mut rest = s;
    while !rest.is_empty() {
        let number_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        let (number, tail) = rest.split_at(number_len);
        if number.is_empty() {
            return Err(DurationParseError::InvalidNumber(rest.to_string()));
        }
        let value: f64 = number
            .parse()
            .map_err(|_| DurationParseError::InvalidNumber(number.to_string()))?;

        let unit_len = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, tail) = tail.split_at(unit_len);
        let secs = match unit {
            "" => return Err(DurationParseError::MissingUnit(number.to_string())),
            "ms" => value / 1000.0,
            "s" => value,
            "m" => value * 60.0,
            "h" => value * 3600.0,
            other => return Err(DurationParseError::UnknownUnit(other.to_string())),
        };

        total_secs += secs;
        rest = tail;
    }

    Duration::try_from_secs_f64(total_secs).map_err(|_| DurationParseError::OutOfRange)
}

fn parse_duration_arg(s: &str) -> Result<Duration, String> {
    let duration = parse_duration(s).map_err(|e| format!("{}\n{}", e, DURATION_EXAMPLES))?;
    if duration.is_zero() {
        return Err(format!("duration must be positive\n{}", DURATION_EXAMPLES));
    }
    Ok(duration)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_and_hours() {
        assert_eq!(parse_duration("25m"), Ok(Duration::from_secs(25 * 60)));
        assert_eq!(parse_duration("1h"), Ok(Duration::from_secs(3600)));
        assert_eq!(parse_duration("1h30m"), Ok(Duration::from_secs(5400)));
    }

    #[test]
    fn test_seconds_fractions_and_millis() {
        assert_eq!(parse_duration("90s"), Ok(Duration::from_secs(90)));
        assert_eq!(parse_duration("1.5h"), Ok(Duration::from_secs(5400)));
        assert_eq!(parse_duration("500ms"), Ok(Duration::from_millis(500)));
        assert_eq!(parse_duration("0"), Ok(Duration::ZERO));
    }

    #[test]
    fn test_rejects_malformed_input() {
        assert_eq!(parse_duration(""), Err(DurationParseError::Empty));
        assert_eq!(
            parse_duration("25"),
            Err(DurationParseError::MissingUnit("25".to_string()))
        );
        assert_eq!(
            parse_duration("5d"),
            Err(DurationParseError::UnknownUnit("d".to_string()))
        );
        assert_eq!(
            parse_duration("m5"),
            Err(DurationParseError::InvalidNumber("m5".to_string()))
        );
        assert_eq!(
            parse_duration("1..5m"),
            Err(DurationParseError::InvalidNumber("1..5".to_string()))
        );
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from(["pomo", "-s", "50m", "--sb", "10m", "--lb", "30m", "-l", "3"])
            .unwrap();
        assert_eq!(cli.session, Some(Duration::from_secs(50 * 60)));
        assert_eq!(cli.short_break, Some(Duration::from_secs(10 * 60)));
        assert_eq!(cli.long_break, Some(Duration::from_secs(30 * 60)));
        assert_eq!(cli.lines, Some(3));
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_rejects_bad_and_zero_durations() {
        assert!(Cli::try_parse_from(["pomo", "-s", "soon"]).is_err());
        assert!(Cli::try_parse_from(["pomo", "--short-break", "0s"]).is_err());
    }

    #[test]
    fn test_lines_flag_is_bounded() {
        let cli = Cli::try_parse_from(["pomo", "-l", "200"]).unwrap();
        assert_eq!(cli.lines, Some(200));
        assert!(Cli::try_parse_from(["pomo", "-l", "201"]).is_err());
        assert!(Cli::try_parse_from(["pomo", "--lines", "65535"]).is_err());
        assert!(Cli::try_parse_from(["pomo", "-l", "-1"]).is_err());
    }

    #[test]
    fn test_single_dash_break_flags_are_not_aliases() {
        // -sb reads as -s with the value "b"
        assert!(Cli::try_parse_from(["pomo", "-sb", "10m"]).is_err());
        let cli = Cli::try_parse_from(["pomo", "--sb", "10m"]).unwrap();
        assert_eq!(cli.short_break, Some(Duration::from_secs(600)));
    }

    #[test]
    fn test_config_path_subcommand() {
        let cli = Cli::try_parse_from(["pomo", "config-path"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::ConfigPath)));
    }
}
