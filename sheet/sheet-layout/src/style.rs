//! Line colors, dash styles and strokes.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::SheetError;

/// An sRGB color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineColor {
    /// Red component.
    pub r: f64,
    /// Green component.
    pub g: f64,
    /// Blue component.
    pub b: f64,
}

impl LineColor {
    /// Black, the default guideline color.
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// Mid gray, used for the annotation text.
    pub const GRAY: Self = Self::rgb(0.5, 0.5, 0.5);

    /// Create a color from its components.
    #[must_use]
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Format as a `#rrggbb` hex string.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            channel_byte(self.r),
            channel_byte(self.g),
            channel_byte(self.b)
        )
    }

    fn from_hex(hex: &str) -> Option<Self> {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .ok()
                .map(|v| f64::from(v) / 255.0)
        };
        Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    fn from_name(name: &str) -> Option<Self> {
        let color = match name {
            "k" | "black" => Self::BLACK,
            "w" | "white" => Self::rgb(1.0, 1.0, 1.0),
            "r" | "red" => Self::rgb(1.0, 0.0, 0.0),
            "g" => Self::rgb(0.0, 0.5, 0.0),
            "green" => Self::rgb(0.0, 128.0 / 255.0, 0.0),
            "b" | "blue" => Self::rgb(0.0, 0.0, 1.0),
            "c" => Self::rgb(0.0, 0.75, 0.75),
            "cyan" => Self::rgb(0.0, 1.0, 1.0),
            "m" => Self::rgb(0.75, 0.0, 0.75),
            "magenta" => Self::rgb(1.0, 0.0, 1.0),
            "y" => Self::rgb(0.75, 0.75, 0.0),
            "yellow" => Self::rgb(1.0, 1.0, 0.0),
            "gray" | "grey" => Self::rgb(128.0 / 255.0, 128.0 / 255.0, 128.0 / 255.0),
            "lightgray" | "lightgrey" => Self::rgb(211.0 / 255.0, 211.0 / 255.0, 211.0 / 255.0),
            _ => return None,
        };
        Some(color)
    }
}

impl Default for LineColor {
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for LineColor {
    type Err = SheetError;

    /// Parse a color.
    ///
    /// Accepts single-letter codes (`k`, `r`, `g`, `b`, `c`, `m`, `y`, `w`),
    /// a handful of color names, `#rrggbb`, and a gray level in `[0, 1]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parsed = if let Some(hex) = trimmed.strip_prefix('#') {
            Self::from_hex(hex)
        } else if let Ok(level) = trimmed.parse::<f64>() {
            (0.0..=1.0)
                .contains(&level)
                .then(|| Self::rgb(level, level, level))
        } else {
            Self::from_name(&trimmed.to_ascii_lowercase())
        };
        parsed.ok_or_else(|| SheetError::InvalidColor(s.to_string()))
    }
}

impl fmt::Display for LineColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel_byte(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Dash style of a guideline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LineStyle {
    /// Continuous line (`-`).
    Solid,
    /// Dashed line (`--`).
    #[default]
    Dashed,
    /// Alternating dash and dot (`-.`).
    DashDot,
    /// Dotted line (`:`).
    Dotted,
}

impl LineStyle {
    /// Dash pattern in multiples of the stroke width. Empty for solid lines.
    #[must_use]
    pub const fn dash_pattern(self) -> &'static [f64] {
        match self {
            Self::Solid => &[],
            Self::Dashed => &[3.7, 1.6],
            Self::DashDot => &[6.4, 1.6, 1.0, 1.6],
            Self::Dotted => &[1.0, 1.65],
        }
    }

    /// Short code as accepted on the command line.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Solid => "-",
            Self::Dashed => "--",
            Self::DashDot => "-.",
            Self::Dotted => ":",
        }
    }
}

impl FromStr for LineStyle {
    type Err = SheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "-" | "solid" => Ok(Self::Solid),
            "--" | "dashed" => Ok(Self::Dashed),
            "-." | "dashdot" => Ok(Self::DashDot),
            ":" | "dotted" => Ok(Self::Dotted),
            other => Err(SheetError::InvalidLineStyle(other.to_string())),
        }
    }
}

impl fmt::Display for LineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// How a segment is drawn.
///
/// Width and dash lengths are in paper units.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Stroke {
    /// Line width.
    pub width: f64,
    /// Line color.
    pub color: LineColor,
    /// Alternating on/off lengths. Empty for a solid line.
    pub dashes: Vec<f64>,
}

impl Stroke {
    /// A solid stroke.
    #[must_use]
    pub const fn solid(width: f64, color: LineColor) -> Self {
        Self {
            width,
            color,
            dashes: Vec::new(),
        }
    }

    /// A stroke in the given style, with dashes scaled by the width.
    #[must_use]
    pub fn styled(width: f64, color: LineColor, style: LineStyle) -> Self {
        Self {
            width,
            color,
            dashes: style.dash_pattern().iter().map(|d| d * width).collect(),
        }
    }

    /// Whether the stroke is drawn without gaps.
    #[must_use]
    pub fn is_solid(&self) -> bool {
        self.dashes.is_empty()
    }
}
