//! Resolved sheet geometry.

// Line-set counts are small and non-negative
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::style::{LineColor, LineStyle, Stroke};
use crate::units::{Orientation, POINTS_PER_INCH, Unit};

/// Fully resolved geometry of a practice sheet.
///
/// Every length is in `unit`, and the paper size is already oriented. Built
/// once per sheet by [`SheetParams::resolve`](crate::SheetParams::resolve)
/// and never modified afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeometryConfig {
    /// Unit of every length in this config.
    pub unit: Unit,
    /// Orientation the paper size was resolved with.
    pub orientation: Orientation,
    /// Page width.
    pub paper_width: f64,
    /// Page height.
    pub paper_height: f64,
    /// Height of the letter 'x'.
    pub x_height: f64,
    /// Height ratio of the three regions of a line-set, top-down.
    ///
    /// This is the input ratio reversed: with the input order descender,
    /// x-height, ascender, the region under the top line comes first.
    pub ratio: [f64; 3],
    /// Line width in points of a figure where one paper unit spans an inch.
    pub line_width: f64,
    /// Color of every guideline.
    pub line_color: LineColor,
    /// Style of the outer two horizontal lines of each set.
    pub line_style: LineStyle,
    /// Distance from the top page edge to the first line-set.
    pub top_margin: f64,
    /// Left and right margin.
    pub vertical_margin: f64,
    /// Vertical gap between line-sets.
    pub gap: f64,
    /// Slant angle in degrees from horizontal, as entered.
    pub slant_angle: f64,
    /// Horizontal distance between neighboring slant lines.
    pub slant_line_spacing: f64,
    /// Omit slant lines.
    pub no_slant_lines: bool,
    /// Add the annotation line.
    pub annotate: bool,
}

impl GeometryConfig {
    /// Heights of the three regions of a line-set, top-down.
    #[must_use]
    pub fn region_heights(&self) -> [f64; 3] {
        self.ratio.map(|r| r / self.ratio[1] * self.x_height)
    }

    /// Total height of one line-set.
    #[must_use]
    pub fn set_height(&self) -> f64 {
        self.region_heights().iter().sum()
    }

    /// Vertical distance between the tops of consecutive line-sets.
    #[must_use]
    pub fn pitch(&self) -> f64 {
        self.set_height() + self.gap
    }

    /// Number of line-sets that fit below the top margin.
    #[must_use]
    pub fn line_set_count(&self) -> usize {
        let count = ((self.paper_height - self.top_margin) / self.pitch()).floor();
        if count.is_finite() && count > 0.0 {
            count as usize
        } else {
            0
        }
    }

    /// Left edge of the writable window.
    #[must_use]
    pub fn left(&self) -> f64 {
        self.vertical_margin
    }

    /// Right edge of the writable window.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.paper_width - self.vertical_margin
    }

    /// Slant angle reduced to `[0, 360)`.
    #[must_use]
    pub fn wrapped_angle(&self) -> f64 {
        self.slant_angle.rem_euclid(360.0)
    }

    /// Whether slant lines are drawn at all.
    ///
    /// They are not when suppressed or when the angle is exactly horizontal.
    #[must_use]
    pub fn draws_slant_lines(&self) -> bool {
        let angle = self.wrapped_angle();
        !(self.no_slant_lines || angle == 0.0 || angle == 180.0)
    }

    /// Stroke width in paper units.
    #[must_use]
    pub fn stroke_width(&self) -> f64 {
        self.line_width / POINTS_PER_INCH
    }

    /// Solid stroke in the configured width and color.
    #[must_use]
    pub fn solid_stroke(&self) -> Stroke {
        Stroke::solid(self.stroke_width(), self.line_color)
    }

    /// Stroke for the ascender and descender lines.
    #[must_use]
    pub fn guide_stroke(&self) -> Stroke {
        Stroke::styled(self.stroke_width(), self.line_color, self.line_style)
    }
}
