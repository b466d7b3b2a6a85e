//! Resolution of raw parameters into a [`GeometryConfig`].
//!
//! Fills in unit-dependent defaults, applies the orientation, reverses the
//! height ratio into top-down order, and rejects parameters that cannot
//! produce a sheet.

use tracing::debug;

use crate::config::GeometryConfig;
use crate::error::{SheetError, SheetResult};
use crate::params::{
    DEFAULT_GAP_MM, DEFAULT_LINE_WIDTH, DEFAULT_PAPER_SIZE_MM, DEFAULT_SLANT_LINE_SPACING_MM,
    DEFAULT_TOP_MARGIN_MM, DEFAULT_VERTICAL_MARGIN_MM, DEFAULT_X_HEIGHT_MM, SheetParams,
};

/// Smallest slant angle (degrees from horizontal) that still produces usable
/// slant lines.
pub const MIN_SLANT_ANGLE: f64 = 5.0;

/// Largest wrapped slant angle accepted below a full turn.
pub const MAX_SLANT_ANGLE: f64 = 345.0;

/// Line widths are given per millimeter-equivalent of this many units.
const LINE_WIDTH_SCALE_MM: f64 = 10.0;

impl SheetParams {
    /// Resolve these parameters into a [`GeometryConfig`].
    ///
    /// # Errors
    ///
    /// - [`SheetError::OutputConflict`] if `output` is an existing file and
    ///   `force` is not set.
    /// - [`SheetError::InvalidSlantAngle`] if the angle modulo 360 is not 0
    ///   or 180 and lies within 5 degrees of 0, 180 or 360.
    ///   and lies below 5 or above 345 degrees.
    /// - [`SheetError::InvalidLength`], [`SheetError::InvalidRatio`] or
    ///   [`SheetError::MarginTooLarge`] for lengths that leave no sheet.
    ///
    /// # Example
    ///
    /// ```
    /// use sheet_layout::{SheetParams, Orientation};
    ///
    /// let config = SheetParams::default()
    ///     .with_orientation(Orientation::Landscape)
    ///     .resolve()
    ///     .unwrap();
    /// assert!((config.paper_width - 297.0).abs() < 1e-12);
    /// assert!((config.paper_height - 210.0).abs() < 1e-12);
    /// ```
    pub fn resolve(&self) -> SheetResult<GeometryConfig> {
        check_output(self)?;
        check_slant_angle(self.slant_angle)?;

        let unit = self.unit;
        let default = |mm: f64| unit.convert_mm(mm);

        let portrait = self.paper_size.unwrap_or((
            default(DEFAULT_PAPER_SIZE_MM.0),
            default(DEFAULT_PAPER_SIZE_MM.1),
        ));
        let (paper_width, paper_height) = self.orientation.orient(portrait);

        let line_width = self.line_width.unwrap_or(DEFAULT_LINE_WIDTH)
            * (LINE_WIDTH_SCALE_MM / unit.mm_per_unit());

        let [descender, x, ascender] = self.ratio;
        let config = GeometryConfig {
            unit,
            orientation: self.orientation,
            paper_width,
            paper_height,
            x_height: self.x_height.unwrap_or_else(|| default(DEFAULT_X_HEIGHT_MM)),
            ratio: [ascender, x, descender],
            line_width,
            line_color: self.line_color,
            line_style: self.line_style,
            top_margin: self
                .top_margin
                .unwrap_or_else(|| default(DEFAULT_TOP_MARGIN_MM)),
            vertical_margin: self
                .vertical_margin
                .unwrap_or_else(|| default(DEFAULT_VERTICAL_MARGIN_MM)),
            gap: self.gap.unwrap_or_else(|| default(DEFAULT_GAP_MM)),
            slant_angle: self.slant_angle,
            slant_line_spacing: self
                .slant_line_spacing
                .unwrap_or_else(|| default(DEFAULT_SLANT_LINE_SPACING_MM)),
            no_slant_lines: self.no_slant_lines,
            annotate: self.annotate,
        };

        check_lengths(&config, self.ratio)?;

        debug!(
            unit = %config.unit,
            width = config.paper_width,
            height = config.paper_height,
            line_sets = config.line_set_count(),
            "Resolved sheet geometry"
        );

        Ok(config)
    }
}

/// Check whether `angle` (degrees) is a legal slant angle.
///
/// The angle is reduced modulo 360. Exactly 0 and 180 are accepted and mean
/// "no slant lines"; otherwise the wrapped angle must lie in `[5, 345]` and
/// at least 5 degrees away from 180.
///
/// # Example
///
/// ```
/// use sheet_layout::is_valid_slant_angle;
///
/// assert!(is_valid_slant_angle(55.0));
/// assert!(is_valid_slant_angle(0.0));
/// assert!(!is_valid_slant_angle(-4.0));
/// assert!(!is_valid_slant_angle(363.0));
/// assert!(!is_valid_slant_angle(178.0));
/// ```
#[must_use]
pub fn is_valid_slant_angle(angle: f64) -> bool {
    if !angle.is_finite() {
        return false;
    }
    let wrapped = angle.rem_euclid(360.0);
    if wrapped == 0.0 || wrapped == 180.0 {
        return true;
    }
    (MIN_SLANT_ANGLE..=MAX_SLANT_ANGLE).contains(&wrapped)
        && (wrapped - 180.0).abs() >= MIN_SLANT_ANGLE
}

fn check_output(params: &SheetParams) -> SheetResult<()> {
    if params.output.is_file() && !params.force {
        return Err(SheetError::OutputConflict {
            path: params.output.clone(),
        });
    }
    Ok(())
}

fn check_slant_angle(angle: f64) -> SheetResult<()> {
    if is_valid_slant_angle(angle) {
        Ok(())
    } else {
        Err(SheetError::InvalidSlantAngle(angle))
    }
}

fn check_lengths(config: &GeometryConfig, raw_ratio: [f64; 3]) -> SheetResult<()> {
    require_positive("paper width", config.paper_width)?;
    require_positive("paper height", config.paper_height)?;
    require_positive("x-height", config.x_height)?;
    require_positive("slant line spacing", config.slant_line_spacing)?;
    require_positive("line width", config.line_width)?;
    require_non_negative("top margin", config.top_margin)?;
    require_non_negative("vertical margin", config.vertical_margin)?;
    require_non_negative("gap", config.gap)?;

    if raw_ratio.iter().any(|r| !(r.is_finite() && *r > 0.0)) {
        return Err(SheetError::InvalidRatio { ratio: raw_ratio });
    }

    let half_width = config.paper_width / 2.0;
    if config.vertical_margin >= half_width {
        return Err(SheetError::MarginTooLarge {
            name: "vertical margin",
            value: config.vertical_margin,
            limit: half_width,
        });
    }
    if config.top_margin >= config.paper_height {
        return Err(SheetError::MarginTooLarge {
            name: "top margin",
            value: config.top_margin,
            limit: config.paper_height,
        });
    }
    Ok(())
}

fn require_positive(name: &'static str, value: f64) -> SheetResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SheetError::InvalidLength {
            name,
            value,
            requirement: "> 0",
        })
    }
}

fn require_non_negative(name: &'static str, value: f64) -> SheetResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SheetError::InvalidLength {
            name,
            value,
            requirement: ">= 0",
        })
    }
}
