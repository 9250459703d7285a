//! Export failure taxonomy.

use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The host has no graphic element to export.
    #[error("SVG element not found")]
    GraphicNotFound,

    /// Rasterization did not finish before the configured timeout.
    #[error("rasterization timed out after {}ms", .0.as_millis())]
    RasterizeTimeout(Duration),

    /// The markup could not be decoded or drawn.
    #[error("rasterization failed: {0}")]
    Rasterize(String),

    /// The drawn canvas could not be encoded as PNG.
    #[error("PNG encoding failed: {0}")]
    Encode(String),

    /// The host refused or failed to deliver the file.
    #[error("delivery failed: {0}")]
    Delivery(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
