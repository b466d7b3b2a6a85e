//! Slant line tiling and clipping.
//!
//! Slant lines on every line-set belong to one family of parallel lines
//! through the page origin, spaced `slant_line_spacing` apart horizontally.
//! For a line-set whose bottom (descender) line sits at height `y_d`, line
//! `k` of the family crosses that line at
//!
//! ```text
//! x_k = y_d / slope + k * spacing
//! ```
//!
//! and rises `set_height` over a horizontal run of `set_height / slope`.
//! A line is drawn when its horizontal extent overlaps the open writable
//! window `(left, right)`; the part outside the window is trimmed.

// Indices are range-checked against MAX_EXACT_INDEX before every cast
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

use nalgebra::Point2;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::GeometryConfig;
use crate::error::{SheetError, SheetResult};
use crate::lineset::LineSet;
use crate::segment::{Segment, SegmentKind};

/// Offset, in line spacings, of the first candidate line from the family
/// origin, taken in the direction of the slope.
pub const SEED_OFFSET_SPACINGS: i64 = 10;

/// Most slant lines a single line-set may receive.
pub const MAX_SLANT_LINES_PER_SET: usize = 100_000;

/// Largest magnitude at which every integer is exactly representable in f64.
const MAX_EXACT_INDEX: f64 = 9_007_199_254_740_992.0;

/// Horizontal writable range of the page.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Window {
    /// Left edge.
    pub left: f64,
    /// Right edge.
    pub right: f64,
}

impl Window {
    /// Create a window.
    #[must_use]
    pub const fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    /// The writable window of a sheet.
    #[must_use]
    pub fn of(config: &GeometryConfig) -> Self {
        Self::new(config.left(), config.right())
    }

    /// Width of the window.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Whether `[lo, hi]` overlaps the open interval `(left, right)`.
    #[must_use]
    pub fn overlaps(&self, lo: f64, hi: f64) -> bool {
        hi > self.left && lo < self.right
    }

    /// Clamp `x` into the closed window.
    #[must_use]
    pub fn clamp(&self, x: f64) -> f64 {
        x.clamp(self.left, self.right)
    }
}

/// A clipped slant line together with its place in the tiling.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SlantLine {
    /// Index `k` within the family.
    pub index: i64,
    /// Unclipped x coordinate where the line meets the descender line.
    pub intercept: f64,
    /// The visible part of the line.
    pub segment: Segment,
}

/// Geometry of the slant lines crossing one line-set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlantTiling {
    /// Rise over run of every line.
    pub slope: f64,
    /// Signed horizontal distance from the bottom end to the top end.
    pub run: f64,
    /// Height the lines span.
    pub rise: f64,
    /// Page y of the descender line.
    pub bottom_y: f64,
    /// Horizontal spacing between neighboring lines.
    pub spacing: f64,
    /// Writable window.
    pub window: Window,
}

impl SlantTiling {
    /// Tiling for a line-set, or `None` when the sheet has no slant lines.
    #[must_use]
    pub fn for_set(config: &GeometryConfig, set: &LineSet) -> Option<Self> {
        if !config.draws_slant_lines() {
            return None;
        }
        let slope = config.slant_angle.to_radians().tan();
        let rise = config.set_height();
        Some(Self {
            slope,
            run: rise / slope,
            rise,
            bottom_y: set.bottom_y(config),
            spacing: config.slant_line_spacing,
            window: Window::of(config),
        })
    }

    /// x coordinate where line `k` meets the descender line.
    #[must_use]
    pub fn intercept(&self, k: i64) -> f64 {
        (k as f64).mul_add(self.spacing, self.bottom_y / self.slope)
    }

    /// Horizontal extent `(min, max)` of line `k`.
    #[must_use]
    pub fn extent(&self, k: i64) -> (f64, f64) {
        let x = self.intercept(k);
        (x.min(x + self.run), x.max(x + self.run))
    }

    /// Whether any part of line `k` lies inside the open window.
    ///
    /// This is an overlap test on the whole extent rather than a check that
    /// an endpoint lies inside the window. The two differ only at shallow
    /// angles, where a line can enter and leave the window between its
    /// endpoints; the endpoint rule leaves those lines out.
    #[must_use]
    pub fn is_visible(&self, k: i64) -> bool {
        let (lo, hi) = self.extent(k);
        self.window.overlaps(lo, hi)
    }

    /// Range of visible line indices, solved directly.
    ///
    /// Returns `None` when no line of the family crosses the window, or when
    /// the bounds are not finite or too large to index exactly.
    #[must_use]
    pub fn visible_range(&self) -> Option<(i64, i64)> {
        let base = self.bottom_y / self.slope;
        let reach_right = self.run.max(0.0);
        let reach_left = self.run.min(0.0);
        let lo = ((self.window.left - reach_right - base) / self.spacing).floor();
        let hi = ((self.window.right - reach_left - base) / self.spacing).ceil();
        let k_min = exact_index(lo)?.checked_add(1)?;
        let k_max = exact_index(hi)?.checked_sub(1)?;
        (k_min <= k_max).then_some((k_min, k_max))
    }

    /// Index of the first line drawn.
    ///
    /// Starts [`SEED_OFFSET_SPACINGS`] lines from the family origin in the
    /// direction of the slope and moves back toward the window until the
    /// line is visible.
    #[must_use]
    pub fn seed(&self) -> Option<i64> {
        let (k_min, k_max) = self.visible_range()?;
        let start = SEED_OFFSET_SPACINGS * self.slope.signum() as i64;
        let seed = start.clamp(k_min, k_max);
        // The closed form can be off by one at the window edges.
        [seed, seed - 1, seed + 1]
            .into_iter()
            .find(|&k| self.is_visible(k))
    }

    /// Upper bound on the number of visible lines.
    ///
    /// # Errors
    ///
    /// [`SheetError::SlantTilingDiverged`] when the bound is not finite or
    /// exceeds [`MAX_SLANT_LINES_PER_SET`], as happens for nearly horizontal
    /// lines.
    pub fn step_limit(&self) -> SheetResult<usize> {
        let steps = ((self.window.width() + self.run.abs()) / self.spacing).ceil();
        if !(steps.is_finite() && steps <= (MAX_SLANT_LINES_PER_SET - 2) as f64) {
            return Err(SheetError::SlantTilingDiverged {
                limit: MAX_SLANT_LINES_PER_SET,
            });
        }
        Ok(steps as usize + 2)
    }

    /// The visible part of line `k`.
    #[must_use]
    pub fn clipped(&self, k: i64) -> (Point2<f64>, Point2<f64>) {
        let x = self.intercept(k);
        let start = Point2::new(x, self.bottom_y);
        let end = Point2::new(x + self.run, self.bottom_y + self.rise);
        clip_to_window(start, end, self.slope, self.window)
    }
}

fn exact_index(value: f64) -> Option<i64> {
    (value.is_finite() && value.abs() < MAX_EXACT_INDEX).then_some(value as i64)
}

/// Trim a segment to the horizontal window, keeping it on the same line.
///
/// Each endpoint outside the window is moved onto the nearest window edge
/// and its y recomputed from `slope` relative to `start`. A positive slope
/// leaves through the right edge at its upper end, a negative slope through
/// the left edge; both cases reduce to clamping each endpoint on its own.
///
/// # Example
///
/// ```
/// use nalgebra::Point2;
/// use sheet_layout::{clip_to_window, Window};
///
/// let (a, b) = clip_to_window(
///     Point2::new(-1.0, 0.0),
///     Point2::new(3.0, 4.0),
///     1.0,
///     Window::new(0.0, 2.0),
/// );
/// assert_eq!(a, Point2::new(0.0, 1.0));
/// assert_eq!(b, Point2::new(2.0, 3.0));
/// ```
#[must_use]
pub fn clip_to_window(
    start: Point2<f64>,
    end: Point2<f64>,
    slope: f64,
    window: Window,
) -> (Point2<f64>, Point2<f64>) {
    let trim = |p: Point2<f64>| {
        let x = window.clamp(p.x);
        if x == p.x {
            p
        } else {
            Point2::new(x, slope.mul_add(x - start.x, start.y))
        }
    };
    (trim(start), trim(end))
}

/// All visible slant lines of a line-set, clipped to the window.
///
/// Lines are emitted from the seed outward: first to the right, then to the
/// left starting with the seed itself.
///
/// # Errors
///
/// [`SheetError::SlantTilingDiverged`] if the lines are too shallow to tile
/// within [`MAX_SLANT_LINES_PER_SET`], or the walk takes more steps than
/// [`SlantTiling::step_limit`] allows.
///
/// # Example
///
/// ```
/// use sheet_layout::{line_sets, slant_lines, SheetParams};
///
/// let config = SheetParams::default().resolve().unwrap();
/// let set = line_sets(&config).next().unwrap();
/// let lines = slant_lines(&config, &set).unwrap();
/// assert!(!lines.is_empty());
/// ```
pub fn slant_lines(config: &GeometryConfig, set: &LineSet) -> SheetResult<Vec<SlantLine>> {
    let Some(tiling) = SlantTiling::for_set(config, set) else {
        return Ok(Vec::new());
    };
    let limit = tiling.step_limit()?;
    let Some(seed) = tiling.seed() else {
        debug!(set = set.index, "No slant line crosses the window");
        return Ok(Vec::new());
    };

    let stroke = config.solid_stroke();
    let mut lines = Vec::new();

    for (first, step) in [(seed + 1, 1), (seed, -1)] {
        let mut k = first;
        while tiling.is_visible(k) {
            if lines.len() >= limit {
                return Err(SheetError::SlantTilingDiverged { limit });
            }
            let (start, end) = tiling.clipped(k);
            lines.push(SlantLine {
                index: k,
                intercept: tiling.intercept(k),
                segment: Segment::new(start, end, stroke.clone(), SegmentKind::Slant),
            });
            k += step;
        }
    }

    debug!(
        set = set.index,
        seed,
        lines = lines.len(),
        "Tiled slant lines"
    );

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lineset::{LineSet, line_sets};
    use crate::params::SheetParams;
    use approx::assert_relative_eq;

    const EPS: f64 = 1e-9;

    fn config_with_angle(angle: f64) -> GeometryConfig {
        SheetParams::default()
            .with_slant_angle(angle)
            .resolve()
            .unwrap()
    }

    fn assert_inside_window(config: &GeometryConfig, lines: &[SlantLine]) {
        for line in lines {
            let (lo, hi) = line.segment.x_range();
            assert!(lo >= config.left() - EPS, "{lo} left of window");
            assert!(hi <= config.right() + EPS, "{hi} right of window");
        }
    }

    fn assert_on_line(tiling: &SlantTiling, line: &SlantLine) {
        for p in [line.segment.start, line.segment.end] {
            let expected = tiling.slope.mul_add(p.x - line.intercept, tiling.bottom_y);
            assert_relative_eq!(p.y, expected, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_window_overlap_is_open() {
        let w = Window::new(5.0, 205.0);
        assert!(w.overlaps(0.0, 6.0));
        assert!(w.overlaps(204.0, 300.0));
        assert!(w.overlaps(-10.0, 300.0));
        assert!(!w.overlaps(0.0, 5.0));
        assert!(!w.overlaps(205.0, 210.0));
    }

    #[test]
    fn test_clip_positive_slope() {
        let w = Window::new(0.0, 10.0);
        let (a, b) = clip_to_window(Point2::new(-2.0, 0.0), Point2::new(12.0, 7.0), 0.5, w);
        assert_relative_eq!(a.x, 0.0);
        assert_relative_eq!(a.y, 1.0);
        assert_relative_eq!(b.x, 10.0);
        assert_relative_eq!(b.y, 6.0);
    }

    #[test]
    fn test_clip_negative_slope() {
        // Starts right of the window at the bottom, leaves left at the top.
        let w = Window::new(0.0, 10.0);
        let (a, b) = clip_to_window(Point2::new(12.0, 0.0), Point2::new(-2.0, 7.0), -0.5, w);
        assert_relative_eq!(a.x, 10.0);
        assert_relative_eq!(a.y, 1.0);
        assert_relative_eq!(b.x, 0.0);
        assert_relative_eq!(b.y, 6.0);
    }

    #[test]
    fn test_clip_inside_is_identity() {
        let w = Window::new(0.0, 10.0);
        let p = Point2::new(2.0, 0.0);
        let q = Point2::new(3.0, 4.0);
        assert_eq!(clip_to_window(p, q, 4.0, w), (p, q));
    }

    #[test]
    fn test_no_lines_for_horizontal_angles() {
        for angle in [0.0, 180.0] {
            let config = config_with_angle(angle);
            let set = LineSet::at(&config, 0);
            assert!(slant_lines(&config, &set).unwrap().is_empty());
        }
    }

    #[test]
    fn test_no_lines_when_suppressed() {
        let config = SheetParams::default()
            .without_slant_lines()
            .resolve()
            .unwrap();
        let set = LineSet::at(&config, 0);
        assert!(slant_lines(&config, &set).unwrap().is_empty());
    }

    #[test]
    fn test_seed_is_visible() {
        let config = config_with_angle(55.0);
        for set in line_sets(&config) {
            let tiling = SlantTiling::for_set(&config, &set).unwrap();
            let seed = tiling.seed().unwrap();
            assert!(tiling.is_visible(seed));
            let (k_min, k_max) = tiling.visible_range().unwrap();
            assert!((k_min..=k_max).contains(&seed));
        }
    }

    #[test]
    fn test_emits_exactly_the_visible_range() {
        for angle in [55.0, 90.0, 125.0, 235.0, 300.0, 5.0, 345.0] {
            let config = config_with_angle(angle);
            for set in line_sets(&config) {
                let tiling = SlantTiling::for_set(&config, &set).unwrap();
                let (k_min, k_max) = tiling.visible_range().unwrap();
                let mut indices: Vec<i64> = slant_lines(&config, &set)
                    .unwrap()
                    .iter()
                    .map(|l| l.index)
                    .collect();
                indices.sort_unstable();
                let expected: Vec<i64> = (k_min..=k_max).collect();
                assert_eq!(indices, expected, "angle {angle}, set {}", set.index);
            }
        }
    }

    #[test]
    fn test_lines_stay_in_window_and_collinear() {
        for angle in [55.0, 125.0, 5.0, 175.0, 345.0] {
            let config = config_with_angle(angle);
            for set in line_sets(&config) {
                let tiling = SlantTiling::for_set(&config, &set).unwrap();
                let lines = slant_lines(&config, &set).unwrap();
                assert_inside_window(&config, &lines);
                for line in &lines {
                    assert_on_line(&tiling, line);
                    let (lo, hi) = line.segment.y_range();
                    assert!(lo >= tiling.bottom_y - EPS);
                    assert!(hi <= tiling.bottom_y + tiling.rise + EPS);
                }
            }
        }
    }

    #[test]
    fn test_shallow_angle_covers_window_without_gaps() {
        // At 5 degrees a line runs far wider than the window.
        let config = config_with_angle(5.0);
        let set = LineSet::at(&config, 0);
        let tiling = SlantTiling::for_set(&config, &set).unwrap();
        assert!(tiling.run > config.right() - config.left());

        let mut intercepts: Vec<f64> = slant_lines(&config, &set)
            .unwrap()
            .iter()
            .map(|l| l.intercept)
            .collect();
        intercepts.sort_by(f64::total_cmp);
        for pair in intercepts.windows(2) {
            assert_relative_eq!(pair[1] - pair[0], 13.0, epsilon = 1e-6);
        }
        let first = intercepts[0];
        let last = intercepts[intercepts.len() - 1];
        assert!(first + tiling.run > config.left());
        assert!(first - 13.0 + tiling.run <= config.left() + EPS);
        assert!(last < config.right());
        assert!(last + 13.0 >= config.right() - EPS);
    }

    #[test]
    fn test_negative_slope_runs_leftward() {
        let config = config_with_angle(125.0);
        let set = LineSet::at(&config, 0);
        let tiling = SlantTiling::for_set(&config, &set).unwrap();
        assert!(tiling.slope < 0.0);
        assert!(tiling.run < 0.0);
        for line in slant_lines(&config, &set).unwrap() {
            // The bottom endpoint is the right one.
            assert!(line.segment.start.x >= line.segment.end.x - EPS);
            assert!(line.segment.start.y <= line.segment.end.y + EPS);
        }
    }

    #[test]
    fn test_family_is_shared_between_sets() {
        let config = config_with_angle(55.0);
        let sets: Vec<_> = line_sets(&config).collect();
        let a = SlantTiling::for_set(&config, &sets[0]).unwrap();
        let b = SlantTiling::for_set(&config, &sets[1]).unwrap();
        // Same line k, shifted by the vertical pitch along the slope.
        let shift = a.intercept(0) - b.intercept(0);
        assert_relative_eq!(shift, config.pitch() / a.slope, epsilon = 1e-9);
    }

    #[test]
    fn test_step_limit_bounds_line_count() {
        let config = config_with_angle(55.0);
        let set = LineSet::at(&config, 0);
        let tiling = SlantTiling::for_set(&config, &set).unwrap();
        let count = slant_lines(&config, &set).unwrap().len();
        assert!(count <= tiling.step_limit().unwrap());
    }

    #[test]
    fn test_nearly_horizontal_lines_hit_the_cap() {
        let mut config = config_with_angle(55.0);
        let set = LineSet::at(&config, 0);
        for angle in [179.999_999_9, 180.000_000_000_000_1, 0.000_001, 359.999_999] {
            // Bypasses validation to reach the tiling directly.
            config.slant_angle = angle;
            let tiling = SlantTiling::for_set(&config, &set).unwrap();
            assert!(matches!(
                tiling.step_limit(),
                Err(SheetError::SlantTilingDiverged { limit }) if limit == MAX_SLANT_LINES_PER_SET
            ));
            assert!(matches!(
                slant_lines(&config, &set),
                Err(SheetError::SlantTilingDiverged { .. })
            ));
        }
    }

    #[test]
    fn test_tiny_spacing_near_180_does_not_overflow() {
        let mut config = SheetParams::default()
            .with_slant_line_spacing(0.001)
            .resolve()
            .unwrap();
        config.slant_angle = 180.000_000_000_000_1;
        let set = LineSet::at(&config, 0);
        let tiling = SlantTiling::for_set(&config, &set).unwrap();
        // Bounds this far out cannot be indexed exactly.
        assert_eq!(tiling.visible_range(), None);
        assert!(slant_lines(&config, &set).is_err());
    }

    #[test]
    fn test_cap_leaves_ordinary_sheets_alone() {
        for angle in [5.0, 175.0, 185.0, 345.0] {
            let config = config_with_angle(angle);
            for set in line_sets(&config) {
                let tiling = SlantTiling::for_set(&config, &set).unwrap();
                let limit = tiling.step_limit().unwrap();
                assert!(limit < MAX_SLANT_LINES_PER_SET);
                assert!(slant_lines(&config, &set).unwrap().len() <= limit);
            }
        }
    }
}
