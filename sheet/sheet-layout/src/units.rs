//! Units of length and paper orientation.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::SheetError;

/// Millimeters per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// Typographic points per inch.
pub const POINTS_PER_INCH: f64 = 72.0;

/// Unit of length used for every dimension of a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Unit {
    /// Millimeters.
    #[default]
    Millimeter,
    /// Inches.
    Inch,
}

impl Unit {
    /// Number of millimeters in one of this unit.
    #[must_use]
    pub const fn mm_per_unit(self) -> f64 {
        match self {
            Self::Millimeter => 1.0,
            Self::Inch => MM_PER_INCH,
        }
    }

    /// Convert a length given in millimeters into this unit.
    ///
    /// # Example
    ///
    /// ```
    /// use sheet_layout::Unit;
    ///
    /// assert!((Unit::Inch.convert_mm(25.4) - 1.0).abs() < 1e-12);
    /// assert!((Unit::Millimeter.convert_mm(25.4) - 25.4).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn convert_mm(self, mm: f64) -> f64 {
        mm / self.mm_per_unit()
    }

    /// Number of PDF points in one of this unit.
    #[must_use]
    pub fn points_per_unit(self) -> f64 {
        POINTS_PER_INCH * self.mm_per_unit() / MM_PER_INCH
    }

    /// Short symbol used in annotations and on the command line.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Millimeter => "mm",
            Self::Inch => "in",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Unit {
    type Err = SheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mm" => Ok(Self::Millimeter),
            "in" => Ok(Self::Inch),
            other => Err(SheetError::InvalidUnit(other.to_string())),
        }
    }
}

/// Paper orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Orientation {
    /// Height greater than width for the standard sizes.
    #[default]
    Portrait,
    /// Width and height swapped.
    Landscape,
}

impl Orientation {
    /// Apply the orientation to a portrait `(width, height)` pair.
    #[must_use]
    pub const fn orient(self, size: (f64, f64)) -> (f64, f64) {
        match self {
            Self::Portrait => size,
            Self::Landscape => (size.1, size.0),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
        })
    }
}

impl FromStr for Orientation {
    type Err = SheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "portrait" => Ok(Self::Portrait),
            "landscape" => Ok(Self::Landscape),
            other => Err(SheetError::InvalidOrientation(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_convert_mm() {
        assert_relative_eq!(Unit::Millimeter.convert_mm(210.0), 210.0);
        assert_relative_eq!(Unit::Inch.convert_mm(210.0), 8.267_716_535, epsilon = 1e-9);
    }

    #[test]
    fn test_points_per_unit() {
        assert_relative_eq!(Unit::Inch.points_per_unit(), 72.0);
        assert_relative_eq!(Unit::Millimeter.points_per_unit(), 72.0 / 25.4);
    }

    #[test]
    fn test_parse_unit() {
        assert_eq!("mm".parse::<Unit>().ok(), Some(Unit::Millimeter));
        assert_eq!("in".parse::<Unit>().ok(), Some(Unit::Inch));
        assert!(matches!(
            "cm".parse::<Unit>(),
            Err(SheetError::InvalidUnit(ref u)) if u == "cm"
        ));
        assert_eq!(Unit::Inch.to_string(), "in");
    }

    #[test]
    fn test_orientation() {
        assert_eq!(Orientation::Portrait.orient((210.0, 297.0)), (210.0, 297.0));
        assert_eq!(Orientation::Landscape.orient((210.0, 297.0)), (297.0, 210.0));
        assert_eq!(
            "landscape".parse::<Orientation>().ok(),
            Some(Orientation::Landscape)
        );
        assert!("sideways".parse::<Orientation>().is_err());
    }
}
