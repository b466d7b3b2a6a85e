//! Line-sets and their horizontal and vertical guidelines.

// Line-set indices are small
#![allow(clippy::cast_precision_loss)]

use nalgebra::Point2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::GeometryConfig;
use crate::segment::{Segment, SegmentKind};

/// One group of four horizontal guidelines, repeated down the page.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineSet {
    /// Position in the stack, 0 at the top.
    pub index: usize,
    /// Distance from the top page edge to the set's top line.
    pub top_offset: f64,
}

impl LineSet {
    /// The line-set at `index` for the given geometry.
    #[must_use]
    pub fn at(config: &GeometryConfig, index: usize) -> Self {
        Self {
            index,
            top_offset: (index as f64).mul_add(config.pitch(), config.top_margin),
        }
    }

    /// Page y coordinate of the top line.
    #[must_use]
    pub fn top_y(&self, config: &GeometryConfig) -> f64 {
        config.paper_height - self.top_offset
    }

    /// Page y coordinate of the bottom line, where slant lines start.
    #[must_use]
    pub fn bottom_y(&self, config: &GeometryConfig) -> f64 {
        self.top_y(config) - config.set_height()
    }

    /// Page y coordinates of the four horizontal lines, top-down.
    #[must_use]
    pub fn line_ys(&self, config: &GeometryConfig) -> [f64; 4] {
        let top = self.top_y(config);
        let [h0, h1, h2] = config.region_heights();
        [top, top - h0, top - h0 - h1, top - h0 - h1 - h2]
    }
}

/// All line-sets that fit on the page, top to bottom.
///
/// # Example
///
/// ```
/// use sheet_layout::{line_sets, SheetParams};
///
/// let config = SheetParams::default().resolve().unwrap();
/// let sets: Vec<_> = line_sets(&config).collect();
/// assert_eq!(sets.len(), 10);
/// assert!((sets[1].top_offset - 38.0).abs() < 1e-9);
/// ```
pub fn line_sets(config: &GeometryConfig) -> impl Iterator<Item = LineSet> + '_ {
    (0..config.line_set_count()).map(move |index| LineSet::at(config, index))
}

/// The four horizontal guidelines of a line-set, top-down.
///
/// Each spans the writable window. The inner two (baseline and median) are
/// solid; the outer two use the configured style.
#[must_use]
pub fn horizontal_segments(config: &GeometryConfig, set: &LineSet) -> Vec<Segment> {
    let (left, right) = (config.left(), config.right());
    set.line_ys(config)
        .iter()
        .enumerate()
        .map(|(i, &y)| {
            let stroke = if matches!(i, 1 | 2) {
                config.solid_stroke()
            } else {
                config.guide_stroke()
            };
            Segment::new(
                Point2::new(left, y),
                Point2::new(right, y),
                stroke,
                SegmentKind::Horizontal,
            )
        })
        .collect()
}

/// The two solid verticals closing the left and right end of a line-set.
#[must_use]
pub fn vertical_segments(config: &GeometryConfig, set: &LineSet) -> Vec<Segment> {
    let (top, bottom) = (set.top_y(config), set.bottom_y(config));
    [config.left(), config.right()]
        .iter()
        .map(|&x| {
            Segment::new(
                Point2::new(x, top),
                Point2::new(x, bottom),
                config.solid_stroke(),
                SegmentKind::Vertical,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::SheetParams;
    use approx::assert_relative_eq;

    fn config() -> GeometryConfig {
        SheetParams::default()
            .with_ratio(2.0, 1.0, 3.0)
            .resolve()
            .unwrap()
    }

    #[test]
    fn test_line_set_offsets() {
        let config = config();
        let sets: Vec<_> = line_sets(&config).collect();
        assert_eq!(sets.len(), config.line_set_count());
        for (i, set) in sets.iter().enumerate() {
            assert_eq!(set.index, i);
            assert_relative_eq!(
                set.top_offset,
                10.0 + i as f64 * config.pitch(),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_line_ys_follow_top_down_ratio() {
        // Input 2:1:3 (desc : x : asc) is stored top-down as 3:1:2.
        let config = config();
        let set = LineSet::at(&config, 0);
        let ys = set.line_ys(&config);
        assert_relative_eq!(ys[0], 287.0);
        assert_relative_eq!(ys[1], 287.0 - 18.0);
        assert_relative_eq!(ys[2], 287.0 - 24.0);
        assert_relative_eq!(ys[3], 287.0 - 36.0);
        assert_relative_eq!(ys[3], set.bottom_y(&config));
    }

    #[test]
    fn test_horizontal_styles_and_span() {
        let config = config();
        let set = LineSet::at(&config, 2);
        let lines = horizontal_segments(&config, &set);
        assert_eq!(lines.len(), 4);

        let solid: Vec<bool> = lines.iter().map(|s| s.stroke.is_solid()).collect();
        assert_eq!(solid, vec![false, true, true, false]);

        for line in &lines {
            assert_eq!(line.kind, SegmentKind::Horizontal);
            assert_relative_eq!(line.start.x, 5.0);
            assert_relative_eq!(line.end.x, 205.0);
            assert_relative_eq!(line.start.y, line.end.y);
        }
    }

    #[test]
    fn test_verticals_span_full_set() {
        let config = config();
        let set = LineSet::at(&config, 0);
        let verticals = vertical_segments(&config, &set);
        assert_eq!(verticals.len(), 2);
        for v in &verticals {
            assert_eq!(v.kind, SegmentKind::Vertical);
            assert!(v.stroke.is_solid());
            assert_relative_eq!(v.length(), config.set_height(), epsilon = 1e-9);
        }
        assert_relative_eq!(verticals[0].start.x, config.left());
        assert_relative_eq!(verticals[1].start.x, config.right());
    }
}
