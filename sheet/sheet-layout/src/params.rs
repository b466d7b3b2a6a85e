//! Raw sheet parameters and presets.

use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::style::{LineColor, LineStyle};
use crate::units::{Orientation, Unit};

/// Default paper size (A4, portrait) in mm.
pub const DEFAULT_PAPER_SIZE_MM: (f64, f64) = (210.0, 297.0);
/// Default top margin in mm.
pub const DEFAULT_TOP_MARGIN_MM: f64 = 10.0;
/// Default left and right margin in mm.
pub const DEFAULT_VERTICAL_MARGIN_MM: f64 = 5.0;
/// Default x-height in mm.
pub const DEFAULT_X_HEIGHT_MM: f64 = 6.0;
/// Default horizontal distance between slant lines in mm.
pub const DEFAULT_SLANT_LINE_SPACING_MM: f64 = 13.0;
/// Default vertical gap between line-sets in mm.
pub const DEFAULT_GAP_MM: f64 = 4.0;
/// Default line width before unit scaling.
pub const DEFAULT_LINE_WIDTH: f64 = 1.0;
/// Default slant angle in degrees from horizontal.
pub const DEFAULT_SLANT_ANGLE: f64 = 55.0;
/// Default height ratio, descender : x-height : ascender.
pub const DEFAULT_RATIO: [f64; 3] = [3.0, 2.0, 3.0];

/// Parameters for a practice sheet, as supplied by the user.
///
/// Lengths left as `None` receive a unit-dependent default when the
/// parameters are resolved into a [`GeometryConfig`](crate::GeometryConfig).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SheetParams {
    /// Path of the document to write.
    pub output: PathBuf,

    /// Overwrite `output` if it already exists.
    pub force: bool,

    /// Unit of every length below.
    pub unit: Unit,

    /// Paper width and height in portrait orientation.
    pub paper_size: Option<(f64, f64)>,

    /// Paper orientation.
    pub orientation: Orientation,

    /// Height of the letter 'x'.
    pub x_height: Option<f64>,

    /// Height ratio in input order: descender, x-height, ascender.
    pub ratio: [f64; 3],

    /// Line width.
    pub line_width: Option<f64>,

    /// Line color.
    pub line_color: LineColor,

    /// Style of the ascender and descender lines.
    pub line_style: LineStyle,

    /// Margin above the first line-set.
    pub top_margin: Option<f64>,

    /// Left and right margin.
    pub vertical_margin: Option<f64>,

    /// Vertical gap between line-sets.
    pub gap: Option<f64>,

    /// Slant angle in degrees, positive from horizontal.
    pub slant_angle: f64,

    /// Horizontal distance between slant lines.
    pub slant_line_spacing: Option<f64>,

    /// Omit slant lines.
    pub no_slant_lines: bool,

    /// Add sheet information at the bottom of the page.
    pub annotate: bool,
}

impl Default for SheetParams {
    fn default() -> Self {
        Self {
            output: PathBuf::new(),
            force: false,
            unit: Unit::Millimeter,
            paper_size: None,
            orientation: Orientation::Portrait,
            x_height: None,
            ratio: DEFAULT_RATIO,
            line_width: None,
            line_color: LineColor::BLACK,
            line_style: LineStyle::Dashed,
            top_margin: None,
            vertical_margin: None,
            gap: None,
            slant_angle: DEFAULT_SLANT_ANGLE,
            slant_line_spacing: None,
            no_slant_lines: false,
            annotate: false,
        }
    }
}

impl SheetParams {
    /// Parameters writing to `output` with every other value defaulted.
    #[must_use]
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            ..Default::default()
        }
    }

    /// A4 paper in millimeters.
    ///
    /// Same as the defaults, spelled out.
    #[must_use]
    pub fn a4() -> Self {
        Self {
            unit: Unit::Millimeter,
            paper_size: Some(DEFAULT_PAPER_SIZE_MM),
            ..Default::default()
        }
    }

    /// ANSI Letter paper in inches.
    #[must_use]
    pub fn us_letter() -> Self {
        Self {
            unit: Unit::Inch,
            paper_size: Some((8.5, 11.0)),
            ..Default::default()
        }
    }

    /// Set the output path.
    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Allow overwriting an existing output file.
    #[must_use]
    pub const fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Set the unit of length.
    #[must_use]
    pub const fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    /// Set the paper size (portrait width, height).
    #[must_use]
    pub const fn with_paper_size(mut self, width: f64, height: f64) -> Self {
        self.paper_size = Some((width, height));
        self
    }

    /// Set the orientation.
    #[must_use]
    pub const fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set the x-height.
    #[must_use]
    pub const fn with_x_height(mut self, x_height: f64) -> Self {
        self.x_height = Some(x_height);
        self
    }

    /// Set the ratio descender : x-height : ascender.
    #[must_use]
    pub const fn with_ratio(mut self, descender: f64, x: f64, ascender: f64) -> Self {
        self.ratio = [descender, x, ascender];
        self
    }

    /// Set the slant angle in degrees.
    #[must_use]
    pub const fn with_slant_angle(mut self, degrees: f64) -> Self {
        self.slant_angle = degrees;
        self
    }

    /// Set the slant line spacing.
    #[must_use]
    pub const fn with_slant_line_spacing(mut self, spacing: f64) -> Self {
        self.slant_line_spacing = Some(spacing);
        self
    }

    /// Set top margin, side margin and gap between line-sets.
    #[must_use]
    pub const fn with_margins(mut self, top: f64, vertical: f64, gap: f64) -> Self {
        self.top_margin = Some(top);
        self.vertical_margin = Some(vertical);
        self.gap = Some(gap);
        self
    }

    /// Omit slant lines.
    #[must_use]
    pub const fn without_slant_lines(mut self) -> Self {
        self.no_slant_lines = true;
        self
    }

    /// Add the annotation line.
    #[must_use]
    pub const fn annotated(mut self) -> Self {
        self.annotate = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = SheetParams::default();
        assert_eq!(params.unit, Unit::Millimeter);
        assert_eq!(params.orientation, Orientation::Portrait);
        assert_eq!(params.ratio, [3.0, 2.0, 3.0]);
        assert!((params.slant_angle - 55.0).abs() < f64::EPSILON);
        assert!(params.paper_size.is_none());
        assert!(!params.force);
        assert!(!params.annotate);
    }

    #[test]
    fn test_us_letter() {
        let params = SheetParams::us_letter();
        assert_eq!(params.unit, Unit::Inch);
        assert_eq!(params.paper_size, Some((8.5, 11.0)));
    }

    #[test]
    fn test_builder() {
        let params = SheetParams::new("out.pdf")
            .with_ratio(2.0, 1.5, 2.0)
            .with_slant_angle(52.0)
            .with_margins(12.0, 6.0, 3.0)
            .without_slant_lines()
            .annotated();

        assert_eq!(params.output, PathBuf::from("out.pdf"));
        assert_eq!(params.ratio, [2.0, 1.5, 2.0]);
        assert_eq!(params.top_margin, Some(12.0));
        assert_eq!(params.vertical_margin, Some(6.0));
        assert_eq!(params.gap, Some(3.0));
        assert!(params.no_slant_lines);
        assert!(params.annotate);
    }
}
