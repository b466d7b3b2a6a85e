//! Sheet information printed at the bottom of the page.

use nalgebra::Point2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::GeometryConfig;
use crate::style::LineColor;
use crate::units::{Orientation, POINTS_PER_INCH};

/// Resolution the annotation font size is derived from, in pixels per paper
/// unit.
pub const SURFACE_DPI: f64 = 100.0;

/// Font size in points per pixel of rendering-surface height.
pub const FONT_SCALE: f64 = 0.01;

/// Version printed in the annotation.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A right-aligned block of informational text.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Annotation {
    /// Text lines, top to bottom.
    pub lines: Vec<String>,
    /// Right end of the baseline of the last line.
    pub anchor: Point2<f64>,
    /// Font size in paper units.
    pub font_size: f64,
    /// Text color.
    pub color: LineColor,
}

impl Annotation {
    /// Build the annotation for a sheet.
    ///
    /// # Example
    ///
    /// ```
    /// use sheet_layout::{Annotation, SheetParams};
    ///
    /// let config = SheetParams::default().resolve().unwrap();
    /// let note = Annotation::for_config(&config);
    /// assert!(note.lines[0].starts_with("papersize = 210 x 297 mm"));
    /// ```
    #[must_use]
    pub fn for_config(config: &GeometryConfig) -> Self {
        let mut x = config.paper_width - 2.0 * config.vertical_margin;
        if config.orientation == Orientation::Portrait {
            x *= 1.02;
        }
        let surface_height_px = config.paper_height * SURFACE_DPI;
        Self {
            lines: annotation_text(config),
            anchor: Point2::new(x, 0.01 * config.paper_height),
            font_size: font_size_points(surface_height_px) / POINTS_PER_INCH,
            color: LineColor::GRAY,
        }
    }

    /// All lines joined with newlines.
    #[must_use]
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Font size in points for a rendering surface `height_px` pixels tall.
#[must_use]
pub fn font_size_points(height_px: f64) -> f64 {
    FONT_SCALE * height_px
}

/// The annotation text, split over two lines in portrait orientation.
#[must_use]
pub fn annotation_text(config: &GeometryConfig) -> Vec<String> {
    let unit = config.unit;
    let [ascender, x, descender] = config.ratio;
    let first = format!(
        "papersize = {} x {} {unit}, x-height = {} {unit}, slant line spacing = {} {unit}, ",
        round2(config.paper_width),
        round2(config.paper_height),
        round2(config.x_height),
        round2(config.slant_line_spacing),
    );
    let second = format!(
        "height ratios (descender : x : ascender) = {}:{}:{}, \
         slant angle (from horizontal) = {} deg [v{VERSION}]",
        round2(descender),
        round2(x),
        round2(ascender),
        round2(config.slant_angle),
    );
    match config.orientation {
        Orientation::Portrait => vec![first, second],
        Orientation::Landscape => vec![first + &second],
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
