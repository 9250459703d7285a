//! Native host surfaces: SVG files in, files on disk out.
//!
//! These back the `duotone` command-line binary and integration use from
//! other Rust programs. Rasterization goes through `resvg` with the system
//! font database so label text renders.

pub mod raster;
pub mod sink;
pub mod source;

pub use raster::ResvgRasterizer;
pub use sink::DirectorySink;
pub use source::SvgFileSource;

use std::time::Duration;

use async_trait::async_trait;

use crate::export::surface::Sleeper;

/// [`Sleeper`] backed by the tokio timer.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioSleeper;

#[async_trait(?Send)]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Exporter wired to the native surfaces.
pub type NativeExporter = crate::export::GraphicExporter<SvgFileSource, ResvgRasterizer, DirectorySink, TokioSleeper>;
