//! Line segments produced by the layout engine.

use nalgebra::Point2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::style::Stroke;

/// What a segment represents on the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SegmentKind {
    /// One of the four horizontal guidelines.
    Horizontal,
    /// Left or right end of a line-set.
    Vertical,
    /// A slant line.
    Slant,
}

/// A straight, styled line segment in page coordinates.
///
/// Page coordinates have their origin at the bottom-left corner of the
/// page, with y pointing up.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Segment {
    /// First endpoint.
    pub start: Point2<f64>,
    /// Second endpoint.
    pub end: Point2<f64>,
    /// How the segment is drawn.
    pub stroke: Stroke,
    /// What the segment represents.
    pub kind: SegmentKind,
}

impl Segment {
    /// Create a segment.
    #[must_use]
    pub const fn new(
        start: Point2<f64>,
        end: Point2<f64>,
        stroke: Stroke,
        kind: SegmentKind,
    ) -> Self {
        Self {
            start,
            end,
            stroke,
            kind,
        }
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(&self) -> f64 {
        nalgebra::distance(&self.start, &self.end)
    }

    /// Smallest and largest x coordinate.
    #[must_use]
    pub fn x_range(&self) -> (f64, f64) {
        (self.start.x.min(self.end.x), self.start.x.max(self.end.x))
    }

    /// Smallest and largest y coordinate.
    #[must_use]
    pub fn y_range(&self) -> (f64, f64) {
        (self.start.y.min(self.end.y), self.start.y.max(self.end.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::LineColor;
    use approx::assert_relative_eq;

    #[test]
    fn test_segment_measures() {
        let seg = Segment::new(
            Point2::new(4.0, 5.0),
            Point2::new(1.0, 1.0),
            Stroke::solid(0.1, LineColor::BLACK),
            SegmentKind::Slant,
        );
        assert_relative_eq!(seg.length(), 5.0);
        assert_eq!(seg.x_range(), (1.0, 4.0));
        assert_eq!(seg.y_range(), (1.0, 5.0));
    }
}
