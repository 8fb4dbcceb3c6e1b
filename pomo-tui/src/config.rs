use anyhow::{bail, Context, Result};
use pomo_core::progress::{DEFAULT_LINES, MAX_LINES};
use pomo_core::{DurationConfig, Gradient, Rgb};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::cli::{parse_duration, Cli};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PomoConfig {
    /// Work session length, e.g. "25m"
    #[serde(default = "default_session")]
    pub session: String,

    #[serde(default = "default_short_break")]
    pub short_break: String,

    #[serde(default = "default_long_break")]
    pub long_break: String,

    /// Number of lines in the sand timer
    #[serde(default = "default_progress_lines")]
    pub progress_lines: usize,

    /// Color of the first cell to drain
    #[serde(default = "default_gradient_start")]
    pub gradient_start: Rgb,

    /// Color of the last cell to drain
    #[serde(default = "default_gradient_end")]
    pub gradient_end: Rgb,
}

fn default_session() -> String {
    "25m".to_string()
}

fn default_short_break() -> String {
    "5m".to_string()
}

fn default_long_break() -> String {
    "15m".to_string()
}

fn default_progress_lines() -> usize {
    DEFAULT_LINES
}

fn default_gradient_start() -> Rgb {
    Gradient::default().start
}

fn default_gradient_end() -> Rgb {
    Gradient::default().end
}

impl Default for PomoConfig {
    fn default() -> Self {
        Self {
            session: default_session(),
            short_break: default_short_break(),
            long_break: default_long_break(),
            progress_lines: default_progress_lines(),
            gradient_start: default_gradient_start(),
            gradient_end: default_gradient_end(),
        }
    }
}

/// Everything the app needs at startup, after CLI flags have been applied on
/// top of the config file.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub durations: DurationConfig,
    pub progress_lines: usize,
    pub gradient: Gradient,
}

impl PomoConfig {
    pub fn config_path() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Cannot determine config directory")?
            .join("pomo")
            .join("config.toml"))
    }

    /// Load config from disk. Returns default config if file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    /// Write the default config unless a file already exists. Returns the path.
    pub fn ensure_default_file() -> Result<PathBuf> {
        let path = Self::config_path()?;
        if !path.exists() {
            Self::default().save_to(&path)?;
        }
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(path, raw)
            .with_context(|| format!("Failed to write config at {}", path.display()))?;
        Ok(())
    }

    /// Merge CLI overrides and validate durations.
    pub fn resolve(&self, cli: &Cli) -> Result<Settings> {
        let session = match cli.session {
            Some(d) => d,
            None => parse_duration(&self.session)
                .with_context(|| format!("Invalid session duration {:?} in config", self.session))?,
        };
        let short_break = match cli.short_break {
            Some(d) => d,
            None => parse_duration(&self.short_break).with_context(|| {
                format!("Invalid short_break duration {:?} in config", self.short_break)
            })?,
        };
        let long_break = match cli.long_break {
            Some(d) => d,
            None => parse_duration(&self.long_break).with_context(|| {
                format!("Invalid long_break duration {:?} in config", self.long_break)
            })?,
        };

        let progress_lines = match cli.lines {
            Some(lines) => usize::from(lines),
            None => self.progress_lines,
        };
        if progress_lines > MAX_LINES {
            bail!(
                "progress_lines must be at most {}, got {}",
                MAX_LINES,
                progress_lines
            );
        }

        Ok(Settings {
            durations: DurationConfig::new(session, short_break, long_break)?,
            progress_lines,
            gradient: Gradient::new(self.gradient_start, self.gradient_end),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pomo_core::SessionType;
    use std::time::Duration;

    fn no_flags() -> Cli {
        Cli::parse_from(["pomo"])
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = PomoConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, PomoConfig::default());

        let settings = config.resolve(&no_flags()).unwrap();
        assert_eq!(settings.durations, DurationConfig::default());
        assert_eq!(settings.progress_lines, 5);
        assert_eq!(settings.gradient, Gradient::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "session = \"50m\"\ngradient_end = \"#00ff00\"\n").unwrap();

        let config = PomoConfig::load_from(&path).unwrap();
        assert_eq!(config.session, "50m");
        assert_eq!(config.short_break, "5m");
        assert_eq!(config.gradient_end, Rgb::new(0, 255, 0));

        let settings = config.resolve(&no_flags()).unwrap();
        assert_eq!(
            settings.durations.resolve(SessionType::Work),
            Duration::from_secs(50 * 60)
        );
    }

    #[test]
    fn cli_flags_override_file() {
        let config = PomoConfig {
            session: "50m".to_string(),
            progress_lines: 8,
            ..PomoConfig::default()
        };
        let cli = Cli::parse_from(["pomo", "-s", "10m", "-l", "2"]);
        let settings = config.resolve(&cli).unwrap();
        assert_eq!(
            settings.durations.resolve(SessionType::Work),
            Duration::from_secs(600)
        );
        assert_eq!(settings.progress_lines, 2);
    }

    #[test]
    fn invalid_file_values_are_errors() {
        let config = PomoConfig {
            long_break: "forever".to_string(),
            ..PomoConfig::default()
        };
        assert!(config.resolve(&no_flags()).is_err());

        let config = PomoConfig {
            short_break: "0".to_string(),
            ..PomoConfig::default()
        };
        assert!(config.resolve(&no_flags()).is_err());
    }

    #[test]
    fn oversized_progress_lines_in_file_is_an_error() {
        let config = PomoConfig {
            progress_lines: 65_535,
            ..PomoConfig::default()
        };
        let err = config.resolve(&no_flags()).unwrap_err();
        assert!(err.to_string().contains("at most 200"), "{err}");

        // The flag wins over a bad file value
        let cli = Cli::parse_from(["pomo", "-l", "3"]);
        assert_eq!(config.resolve(&cli).unwrap().progress_lines, 3);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = PomoConfig {
            progress_lines: 3,
            gradient_start: Rgb::new(1, 2, 3),
            ..PomoConfig::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(PomoConfig::load_from(&path).unwrap(), config);
    }
}
