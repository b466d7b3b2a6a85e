//! Guideline geometry for Copperplate calligraphy practice sheets.
//!
//! This crate turns user-facing sheet parameters into the line segments of a
//! printable practice sheet: repeating sets of four horizontal guidelines
//! (ascender, median, baseline, descender), closed by short verticals and
//! crossed by slant lines at a fixed angle.
//!
//! # Features
//!
//! - **Resolution**: Unit-dependent defaults, orientation and validation
//!   ([`SheetParams::resolve`])
//! - **Line-sets**: Vertical stacking of identical line-sets ([`line_sets`])
//! - **Slant lines**: Periodic tiling of slant lines, clipped to the writable
//!   window ([`slant_lines`], [`clip_to_window`])
//! - **Annotation**: One line of sheet information ([`Annotation`])
//!
//! # Layer 0 Crate
//!
//! No rendering or document encoding happens here. The resulting [`Sheet`]
//! is handed to a renderer such as `sheet-io`.
//!
//! # Example
//!
//! ```
//! use sheet_layout::{layout_sheet, SheetParams};
//!
//! let config = SheetParams::default().with_slant_angle(52.0).resolve().unwrap();
//! let sheet = layout_sheet(&config).unwrap();
//! println!("{} line-sets, {} segments", sheet.line_set_count, sheet.segments.len());
//! ```
//!
//! # Coordinate System
//!
//! Page coordinates, in the sheet's unit:
//! - Origin at the bottom-left corner of the page
//! - X: to the right
//! - Y: up

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod annotation;
mod config;
mod error;
mod lineset;
mod params;
mod resolve;
mod segment;
mod sheet;
mod slant;
mod style;
mod units;

pub use annotation::{Annotation, FONT_SCALE, SURFACE_DPI, VERSION, annotation_text, font_size_points};
pub use config::GeometryConfig;
pub use error::{SheetError, SheetResult};
pub use lineset::{LineSet, horizontal_segments, line_sets, vertical_segments};
pub use params::{
    DEFAULT_GAP_MM, DEFAULT_LINE_WIDTH, DEFAULT_PAPER_SIZE_MM, DEFAULT_RATIO,
    DEFAULT_SLANT_ANGLE, DEFAULT_SLANT_LINE_SPACING_MM, DEFAULT_TOP_MARGIN_MM,
    DEFAULT_VERTICAL_MARGIN_MM, DEFAULT_X_HEIGHT_MM, SheetParams,
};
pub use resolve::{MAX_SLANT_ANGLE, MIN_SLANT_ANGLE, is_valid_slant_angle};
pub use segment::{Segment, SegmentKind};
pub use sheet::{Sheet, layout_sheet};
pub use slant::{
    MAX_SLANT_LINES_PER_SET, SEED_OFFSET_SPACINGS, SlantLine, SlantTiling, Window, clip_to_window,
    slant_lines,
};
pub use style::{LineColor, LineStyle, Stroke};
pub use units::{MM_PER_INCH, Orientation, POINTS_PER_INCH, Unit};

// Re-export nalgebra types for convenience
pub use nalgebra::Point2;
