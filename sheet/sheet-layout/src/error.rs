//! Error types for sheet configuration and layout.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving or laying out a practice sheet.
#[derive(Debug, Error)]
pub enum SheetError {
    /// The output file exists and overwriting was not forced.
    #[error("{path} already exists. Use --force to overwrite.")]
    OutputConflict {
        /// The existing output path.
        path: PathBuf,
    },

    /// Slant angle too close to horizontal.
    #[error(
        "The slant angle ({0} deg) is too close to horizontal. \
         Please enter a value between 5 and 345 (modulo 360) \
         that is at least 5 away from 180."
    )]
    InvalidSlantAngle(f64),

    /// A length that must be strictly positive (or non-negative) is not.
    #[error("invalid {name}: {value} (must be {requirement})")]
    InvalidLength {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// What the value must satisfy.
        requirement: &'static str,
    },

    /// A component of the height ratio is not strictly positive.
    #[error("invalid height ratio {ratio:?}: all components must be > 0")]
    InvalidRatio {
        /// The rejected ratio, in input order.
        ratio: [f64; 3],
    },

    /// A margin does not leave any writable area on the page.
    #[error("{name} of {value} is too large for a page dimension of {limit}")]
    MarginTooLarge {
        /// Name of the margin.
        name: &'static str,
        /// The rejected margin.
        value: f64,
        /// The page dimension the margin is checked against.
        limit: f64,
    },

    /// Unrecognized line color.
    #[error("unknown line color: {0:?}")]
    InvalidColor(String),

    /// Unrecognized line style.
    #[error("unknown line style: {0:?} (expected one of '-', '--', '-.', ':')")]
    InvalidLineStyle(String),

    /// Unrecognized unit of length.
    #[error("unknown unit: {0:?} (expected 'mm' or 'in')")]
    InvalidUnit(String),

    /// Unrecognized paper orientation.
    #[error("unknown orientation: {0:?} (expected 'portrait' or 'landscape')")]
    InvalidOrientation(String),

    /// Slant tiling walked further than the window allows.
    #[error("slant line tiling exceeded {limit} steps")]
    SlantTilingDiverged {
        /// The step bound that was exceeded.
        limit: usize,
    },
}

/// Result type for sheet operations.
pub type SheetResult<T> = std::result::Result<T, SheetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SheetError::OutputConflict {
            path: PathBuf::from("sheet.pdf"),
        };
        assert_eq!(
            format!("{err}"),
            "sheet.pdf already exists. Use --force to overwrite."
        );

        let err = SheetError::InvalidSlantAngle(3.5);
        assert!(format!("{err}").contains("3.5 deg"));

        let err = SheetError::InvalidLength {
            name: "x-height",
            value: -1.0,
            requirement: "> 0",
        };
        assert_eq!(format!("{err}"), "invalid x-height: -1 (must be > 0)");
    }

    #[test]
    fn test_margin_error_mentions_limit() {
        let err = SheetError::MarginTooLarge {
            name: "vertical margin",
            value: 120.0,
            limit: 105.0,
        };
        let msg = format!("{err}");
        assert!(msg.contains("120"));
        assert!(msg.contains("105"));
    }
}
