//! `resvg` rasterizer.
//!
//! Parsing, rendering and PNG encoding are CPU-bound and run on tokio's
//! blocking pool, so the exporter's timeout can fire while a large canvas is
//! still being drawn. A render abandoned by a timeout finishes in the
//! background and its output is dropped.

#[cfg(test)]
#[path = "raster_test.rs"]
mod raster_test;

use std::sync::Arc;

use async_trait::async_trait;
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg;

use crate::export::ExportError;
use crate::export::surface::Rasterizer;

/// Largest canvas side accepted, matching what browsers allow for a canvas.
pub const MAX_CANVAS_SIDE: u32 = 32_767;

/// Largest canvas area accepted (16384 x 16384, about 1 GiB of RGBA).
pub const MAX_CANVAS_PIXELS: u64 = 268_435_456;

/// Draws markup at its natural size onto a fixed-size transparent canvas,
/// anchored at the origin, and encodes it as PNG.
pub struct ResvgRasterizer {
    options: Arc<usvg::Options<'static>>,
}

impl ResvgRasterizer {
    /// Rasterizer with system fonts loaded.
    pub fn new() -> Self {
        let mut options = usvg::Options::default();
        Arc::make_mut(&mut options.fontdb).load_system_fonts();
        Self { options: Arc::new(options) }
    }

    /// Rasterizer without any fonts; text elements are skipped.
    pub fn without_fonts() -> Self {
        Self { options: Arc::new(usvg::Options::default()) }
    }
}

impl Default for ResvgRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl Rasterizer for ResvgRasterizer {
    async fn rasterize(&self, markup: &str, width: u32, height: u32) -> Result<Vec<u8>, ExportError> {
        check_canvas_size(width, height)?;
        let options = Arc::clone(&self.options);
        let markup = markup.to_owned();
        tokio::task::spawn_blocking(move || render_png(&markup, &options, width, height))
            .await
            .map_err(|e| ExportError::Rasterize(format!("render task failed: {e}")))?
    }
}

/// Reject canvases that are empty or too large to allocate safely.
fn check_canvas_size(width: u32, height: u32) -> Result<(), ExportError> {
    let pixels = u64::from(width) * u64::from(height);
    if width > MAX_CANVAS_SIDE || height > MAX_CANVAS_SIDE || pixels > MAX_CANVAS_PIXELS {
        return Err(ExportError::Rasterize(format!(
            "a {width}x{height} canvas exceeds the limit of {MAX_CANVAS_SIDE} per side and {MAX_CANVAS_PIXELS} pixels"
        )));
    }
    Ok(())
}

fn render_png(markup: &str, options: &usvg::Options<'static>, width: u32, height: u32) -> Result<Vec<u8>, ExportError> {
    let tree = usvg::Tree::from_str(markup, options).map_err(|e| ExportError::Rasterize(e.to_string()))?;
    let mut pixmap = Pixmap::new(width, height)
        .ok_or_else(|| ExportError::Rasterize(format!("cannot allocate a {width}x{height} canvas")))?;
    resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut());
    pixmap.encode_png().map_err(|e| ExportError::Encode(e.to_string()))
}
