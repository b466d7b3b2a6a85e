//! Full-page layout.

use tracing::info;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::annotation::Annotation;
use crate::config::GeometryConfig;
use crate::error::SheetResult;
use crate::lineset::{horizontal_segments, line_sets, vertical_segments};
use crate::segment::{Segment, SegmentKind};
use crate::slant::slant_lines;
use crate::units::Unit;

/// A laid-out practice sheet, ready to be rendered.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sheet {
    /// Unit of every coordinate.
    pub unit: Unit,
    /// Page width.
    pub width: f64,
    /// Page height.
    pub height: f64,
    /// Number of line-sets on the page.
    pub line_set_count: usize,
    /// Every guideline, line-set by line-set.
    pub segments: Vec<Segment>,
    /// Optional information text.
    pub annotation: Option<Annotation>,
}

impl Sheet {
    /// Segments of one kind.
    pub fn segments_of(&self, kind: SegmentKind) -> impl Iterator<Item = &Segment> {
        self.segments.iter().filter(move |s| s.kind == kind)
    }
}

/// Lay out every line-set of a sheet.
///
/// For each line-set the horizontals come first, then the two verticals,
/// then the slant lines.
///
/// # Errors
///
/// Only [`SheetError::SlantTilingDiverged`](crate::SheetError::SlantTilingDiverged),
/// which signals a broken tiling invariant rather than bad input.
///
/// # Example
///
/// ```
/// use sheet_layout::{layout_sheet, SegmentKind, SheetParams};
///
/// let config = SheetParams::default().resolve().unwrap();
/// let sheet = layout_sheet(&config).unwrap();
/// assert_eq!(sheet.line_set_count, 10);
/// assert_eq!(sheet.segments_of(SegmentKind::Horizontal).count(), 40);
/// assert_eq!(sheet.segments_of(SegmentKind::Vertical).count(), 20);
/// ```
pub fn layout_sheet(config: &GeometryConfig) -> SheetResult<Sheet> {
    let mut segments = Vec::new();
    let mut line_set_count = 0;

    for set in line_sets(config) {
        segments.extend(horizontal_segments(config, &set));
        segments.extend(vertical_segments(config, &set));
        segments.extend(
            slant_lines(config, &set)?
                .into_iter()
                .map(|line| line.segment),
        );
        line_set_count += 1;
    }

    let annotation = config.annotate.then(|| Annotation::for_config(config));

    info!(
        line_sets = line_set_count,
        segments = segments.len(),
        annotated = annotation.is_some(),
        "Sheet layout complete"
    );

    Ok(Sheet {
        unit: config.unit,
        width: config.paper_width,
        height: config.paper_height,
        line_set_count,
        segments,
        annotation,
    })
}
