//! The "sand timer": a grid of cells that drains as the session elapses.
//!
//! Cells are numbered from the top-right corner, right-to-left along each
//! line and then down, so the bottom-left cell is last. Each cell owns a
//! fixed slice of the session: it drains once the elapsed whole seconds pass
//! `index / (cells - 1)` of the session length. The same fraction picks the
//! cell's color along the gradient.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const FILLED: char = '▓';
pub const DRAINED: char = '░';

/// Grids narrower than this are too cramped to read and render as nothing.
pub const MIN_WIDTH: usize = 10;

pub const DEFAULT_LINES: usize = 5;

/// Upper bound for the configured number of grid lines.
pub const MAX_LINES: usize = 200;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ColorError {
    #[error("expected a #RRGGBB color, got {0:?}")]
    InvalidHex(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex(s.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ColorError::InvalidHex(s.to_string()))
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_hex()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub start: Rgb,
    pub end: Rgb,
}

impl Gradient {
    pub const fn new(start: Rgb, end: Rgb) -> Self {
        Self { start, end }
    }

    /// Color at `progress` (0.0 = start, 1.0 = end).
    pub fn at(&self, progress: f64) -> Rgb {
        fn lerp(from: u8, to: u8, t: f64) -> u8 {
            let value = (from as f64 + t * (to as f64 - from as f64)) as i64;
            value.clamp(0, 255) as u8
        }

        Rgb {
            r: lerp(self.start.r, self.end.r, progress),
            g: lerp(self.start.g, self.end.g, progress),
            b: lerp(self.start.b, self.end.b, progress),
        }
    }
}

impl Default for Gradient {
    /// Magenta to yellow.
    fn default() -> Self {
        Self {
            start: Rgb::new(0xFF, 0x7C, 0xCB),
            end: Rgb::new(0xFD, 0xFF, 0x8C),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressCell {
    pub filled: bool,
    pub color: Rgb,
}

impl ProgressCell {
    pub fn glyph(&self) -> char {
        if self.filled {
            FILLED
        } else {
            DRAINED
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressGrid {
    width: usize,
    rows: Vec<Vec<ProgressCell>>,
}

impl ProgressGrid {
    /// Build the grid for a session with `remaining` of `total` left.
    ///
    /// Returns an empty grid when `width` is under [`MIN_WIDTH`], `height`
    /// is zero or the cell count does not fit in a `usize`.
    pub fn render(
        remaining: Duration,
        total: Duration,
        width: usize,
        height: usize,
        gradient: &Gradient,
    ) -> Self {
        let cells = match height.checked_mul(width) {
            Some(cells) if width >= MIN_WIDTH && height > 0 => cells,
            _ => return Self::empty(),
        };

        let remaining = remaining.min(total);
        let elapsed_secs = total.saturating_sub(remaining).as_secs() as f64;
        let total_secs = total.as_secs() as f64;
        let finished = remaining.is_zero();

        let rows = (0..height)
            .map(|line| {
                (0..width)
                    .map(|col| {
                        let index = line * width + (width - 1 - col);
                        let position = if cells > 1 {
                            index as f64 / (cells - 1) as f64
                        } else {
                            0.0
                        };
                        let threshold = position * total_secs;
                        ProgressCell {
                            filled: !finished && elapsed_secs <= threshold,
                            color: gradient.at(position),
                        }
                    })
                    .collect()
            })
            .collect();

        Self { width, rows }
    }

    fn empty() -> Self {
        Self {
            width: 0,
            rows: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<ProgressCell>] {
        &self.rows
    }

    pub fn cell(&self, line: usize, col: usize) -> Option<&ProgressCell> {
        self.rows.get(line)?.get(col)
    }

    pub fn filled_count(&self) -> usize {
        self.rows.iter().flatten().filter(|cell| cell.filled).count()
    }

    /// Plain glyph lines, without color.
    pub fn lines(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.iter().map(ProgressCell::glyph).collect())
            .collect()
    }
}

impl fmt::Display for ProgressGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}
