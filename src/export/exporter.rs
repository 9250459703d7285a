//! Export sequencing over host surfaces.

#[cfg(test)]
#[path = "exporter_test.rs"]
mod exporter_test;

use std::time::Duration;

use futures::future::{self, Either};

use super::dimensions::Dimensions;
use super::error::ExportError;
use super::surface::{DownloadSink, GraphicSource, Rasterizer, Sleeper};
use super::{
    DEFAULT_RASTER_TIMEOUT, ExportFormat, ExportReceipt, PNG_FILE_NAME, PNG_MIME_TYPE, SVG_MIME_TYPE, svg_document,
};

/// Converts the host's graphic element into downloadable SVG or PNG files.
///
/// Each call is independent: nothing is cached between exports and no
/// application state is read.
pub struct GraphicExporter<S, R, D, T> {
    source: S,
    rasterizer: R,
    sink: D,
    sleeper: T,
    raster_timeout: Duration,
}

impl<S, R, D, T> GraphicExporter<S, R, D, T>
where
    S: GraphicSource,
    R: Rasterizer,
    D: DownloadSink,
    T: Sleeper,
{
    pub fn new(source: S, rasterizer: R, sink: D, sleeper: T) -> Self {
        Self { source, rasterizer, sink, sleeper, raster_timeout: DEFAULT_RASTER_TIMEOUT }
    }

    #[must_use]
    pub fn with_raster_timeout(mut self, timeout: Duration) -> Self {
        self.raster_timeout = timeout;
        self
    }

    pub fn raster_timeout(&self) -> Duration {
        self.raster_timeout
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn sink(&self) -> &D {
        &self.sink
    }

    /// Export the graphic as `<title>.svg`.
    ///
    /// Returns `None` after logging when the graphic is missing or delivery
    /// fails.
    pub fn export_svg(&self, title: &str) -> Option<ExportReceipt> {
        report(ExportFormat::Svg, self.try_export_svg(title))
    }

    /// Export the graphic as the PNG file `title.png`.
    ///
    /// Returns `None` after logging when the graphic is missing or
    /// rasterization fails, times out, or cannot be delivered.
    pub async fn export_png(&self) -> Option<ExportReceipt> {
        report(ExportFormat::Png, self.try_export_png().await)
    }

    pub fn try_export_svg(&self, title: &str) -> Result<ExportReceipt, ExportError> {
        let markup = self.source.graphic_markup().ok_or(ExportError::GraphicNotFound)?;
        let document = svg_document(&markup);
        self.deliver(format!("{title}.svg"), SVG_MIME_TYPE, document.as_bytes())
    }

    pub async fn try_export_png(&self) -> Result<ExportReceipt, ExportError> {
        let graphic = self.source.snapshot().ok_or(ExportError::GraphicNotFound)?;
        let size = Dimensions::resolve(&graphic.dimensions);
        tracing::debug!(width = size.width, height = size.height, "rasterizing graphic");

        let rasterize = self.rasterizer.rasterize(&graphic.markup, size.width, size.height);
        let timeout = self.sleeper.sleep(self.raster_timeout);
        let bytes = match future::select(rasterize, timeout).await {
            Either::Left((result, _)) => result?,
            Either::Right(((), _)) => return Err(ExportError::RasterizeTimeout(self.raster_timeout)),
        };

        self.deliver(PNG_FILE_NAME.to_owned(), PNG_MIME_TYPE, &bytes)
    }

    fn deliver(&self, file_name: String, mime_type: &'static str, bytes: &[u8]) -> Result<ExportReceipt, ExportError> {
        self.sink.deliver(&file_name, mime_type, bytes)?;
        tracing::info!(file = %file_name, bytes = bytes.len(), "export delivered");
        Ok(ExportReceipt { file_name, mime_type, size: bytes.len() })
    }
}

fn report(format: ExportFormat, result: Result<ExportReceipt, ExportError>) -> Option<ExportReceipt> {
    match result {
        Ok(receipt) => Some(receipt),
        Err(error) => {
            tracing::error!(%format, "{error}");
            None
        }
    }
}
