//! Error types for the render crate.

use thiserror::Error;

/// Errors that can occur during rendering operations.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The SVG markup could not be parsed.
    #[error("failed to parse SVG: {0}")]
    SvgParse(String),

    /// Invalid raster dimensions (zero width or height).
    #[error("invalid raster dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
