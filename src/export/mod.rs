//! Export of the displayed vector graphic to downloadable files.
//!
//! SYSTEM CONTEXT
//! ==============
//! The exporter never touches a document or a canvas directly. The host
//! supplies a [`surface::GraphicSource`] (markup + declared size), a
//! [`surface::Rasterizer`], a [`surface::DownloadSink`] and a
//! [`surface::Sleeper`]; [`exporter::GraphicExporter`] sequences them.
//!
//! ERROR HANDLING
//! ==============
//! The public `export_*` calls never return an error. Failures are logged
//! once with `tracing::error!` and reported as `None`.

pub mod dimensions;
pub mod error;
pub mod exporter;
pub mod filename;
pub mod markup;
pub mod surface;

use std::fmt;
use std::time::Duration;

pub use dimensions::{DEFAULT_HEIGHT, DEFAULT_WIDTH, Dimensions, RawDimensions};
pub use error::ExportError;
pub use exporter::GraphicExporter;
pub use filename::make_title_file_safe;

/// Declaration prepended to every exported SVG document.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" standalone="no"?>"#;

pub const SVG_MIME_TYPE: &str = "image/svg+xml";
pub const PNG_MIME_TYPE: &str = "image/png";

/// PNG exports are always delivered under this name; the title is not used.
pub const PNG_FILE_NAME: &str = "title.png";

/// Default upper bound on how long rasterization may take.
pub const DEFAULT_RASTER_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_RASTER_TIMEOUT: Duration = Duration::from_millis(DEFAULT_RASTER_TIMEOUT_MS);

/// Output format of an export request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Svg,
    Png,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Svg => f.write_str("svg"),
            Self::Png => f.write_str("png"),
        }
    }
}

/// What a successful export handed to the download sink.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportReceipt {
    pub file_name: String,
    pub mime_type: &'static str,
    pub size: usize,
}

/// Build a standalone SVG document from serialized element markup.
pub fn svg_document(markup: &str) -> String {
    format!("{XML_DECLARATION}\n{markup}")
}
