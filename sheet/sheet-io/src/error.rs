//! Error types for sheet output.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for rendering and writing sheets.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while rendering or writing a sheet.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The output extension names a format that cannot be written.
    #[error("unsupported output format: .{extension} (expected .pdf or .svg)")]
    UnsupportedFormat {
        /// The unrecognized extension.
        extension: String,
    },

    /// PDF encoding failed.
    #[error("PDF encoding error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// I/O error while encoding into a buffer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Writing the output file failed.
    #[error("Failed to write to {path}: {source}")]
    IoWrite {
        /// The path that failed.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl RenderError {
    /// Attach the output path to an I/O error.
    #[must_use]
    pub fn io_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoWrite {
            path: path.into(),
            source,
        }
    }
}
