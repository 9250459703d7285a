//! Host-provided surfaces the exporter drives.
//!
//! Browser hosts back these with the document, an offscreen canvas and an
//! anchor download; native hosts with files and `resvg`. Futures are not
//! required to be `Send` since every host runs exports on one thread.

use std::time::Duration;

use async_trait::async_trait;

use super::dimensions::RawDimensions;
use super::error::ExportError;

/// Markup and declared size of the graphic, taken from one read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphicSnapshot {
    pub markup: String,
    pub dimensions: RawDimensions,
}

/// Access to the single graphic element in the active view.
pub trait GraphicSource {
    /// Serialized markup of the graphic element, or `None` when it is absent.
    fn graphic_markup(&self) -> Option<String>;

    /// Declared `width`/`height` attributes of the graphic element.
    fn dimensions(&self) -> RawDimensions;

    /// Markup together with its dimensions.
    ///
    /// Sources whose content can change between queries override this so
    /// both halves come from the same version of the graphic.
    fn snapshot(&self) -> Option<GraphicSnapshot> {
        let markup = self.graphic_markup()?;
        Some(GraphicSnapshot { markup, dimensions: self.dimensions() })
    }
}

/// Draws SVG markup onto a `width` x `height` canvas and encodes it as PNG.
#[async_trait(?Send)]
pub trait Rasterizer {
    async fn rasterize(&self, markup: &str, width: u32, height: u32) -> Result<Vec<u8>, ExportError>;
}

/// Hands a finished file to the user (download, write to disk, ...).
pub trait DownloadSink {
    fn deliver(&self, file_name: &str, mime_type: &str, bytes: &[u8]) -> Result<(), ExportError>;
}

/// Timer used to bound rasterization.
#[async_trait(?Send)]
pub trait Sleeper {
    async fn sleep(&self, duration: Duration);
}
