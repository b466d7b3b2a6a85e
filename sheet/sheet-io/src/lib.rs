//! Document output for practice sheets.
//!
//! Renders a laid-out [`Sheet`] into a printable document:
//!
//! - **PDF** - single page, vector strokes, Helvetica annotation
//! - **SVG** - physical page size, one `<line>` per segment
//!
//! # Format Detection
//!
//! The format follows the output file extension. A path without an
//! extension is written as PDF.
//!
//! ```no_run
//! use sheet_io::save_sheet;
//! use sheet_layout::{layout_sheet, SheetParams};
//!
//! let config = SheetParams::new("practice.pdf").resolve().unwrap();
//! let sheet = layout_sheet(&config).unwrap();
//! save_sheet(&sheet, "practice.pdf").unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod pdf;
mod svg;

pub use error::{RenderError, RenderResult};
pub use pdf::{render_pdf, text_width, write_pdf};
pub use svg::{LINE_SPACING, render_svg};

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use sheet_layout::Sheet;
use tracing::info;

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    /// Portable Document Format.
    Pdf,
    /// Scalable Vector Graphics.
    Svg,
}

impl DocumentFormat {
    /// Detect the format from the file extension, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::UnsupportedFormat`] for an extension other than
    /// `pdf` or `svg`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> RenderResult<Self> {
        let Some(ext) = path.as_ref().extension() else {
            return Ok(Self::Pdf);
        };
        let ext = ext.to_string_lossy().to_lowercase();
        match ext.as_str() {
            "pdf" => Ok(Self::Pdf),
            "svg" => Ok(Self::Svg),
            _ => Err(RenderError::UnsupportedFormat { extension: ext }),
        }
    }

    /// Canonical file extension.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Svg => "svg",
        }
    }
}

/// Write a sheet to `path`, choosing the format from its extension.
///
/// An existing file is replaced; the overwrite check belongs to
/// [`SheetParams::resolve`](sheet_layout::SheetParams::resolve).
///
/// # Errors
///
/// Returns an error if the extension is unsupported or the file cannot be
/// written.
pub fn save_sheet<P: AsRef<Path>>(sheet: &Sheet, path: P) -> RenderResult<DocumentFormat> {
    let path = path.as_ref();
    let format = DocumentFormat::from_path(path)?;

    let file = File::create(path).map_err(|e| RenderError::io_write(path, e))?;
    let mut writer = BufWriter::new(file);
    match format {
        DocumentFormat::Pdf => write_pdf(sheet, &mut writer)?,
        DocumentFormat::Svg => writer
            .write_all(render_svg(sheet).as_bytes())
            .map_err(|e| RenderError::io_write(path, e))?,
    }
    writer.flush().map_err(|e| RenderError::io_write(path, e))?;

    info!(
        path = %path.display(),
        format = format.extension(),
        segments = sheet.segments.len(),
        "Wrote practice sheet"
    );
    Ok(format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_path() {
        assert_eq!(DocumentFormat::from_path("sheet.pdf").unwrap(), DocumentFormat::Pdf);
        assert_eq!(DocumentFormat::from_path("sheet.PDF").unwrap(), DocumentFormat::Pdf);
        assert_eq!(DocumentFormat::from_path("a/b/sheet.svg").unwrap(), DocumentFormat::Svg);
        assert_eq!(DocumentFormat::from_path("sheet").unwrap(), DocumentFormat::Pdf);
    }

    #[test]
    fn format_from_path_unsupported() {
        let err = DocumentFormat::from_path("sheet.png").unwrap_err();
        assert!(matches!(err, RenderError::UnsupportedFormat { ref extension } if extension == "png"));
    }

    #[test]
    fn format_extension() {
        assert_eq!(DocumentFormat::Pdf.extension(), "pdf");
        assert_eq!(DocumentFormat::Svg.extension(), "svg");
    }
}
