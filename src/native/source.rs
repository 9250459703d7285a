//! SVG document files as the graphic source.

#[cfg(test)]
#[path = "source_test.rs"]
mod source_test;

use std::fs;
use std::path::{Path, PathBuf};

use crate::export::RawDimensions;
use crate::export::markup::find_graphic;
use crate::export::surface::{GraphicSnapshot, GraphicSource};

/// Reads the graphic from a document on disk.
///
/// The file is re-read on every query, the way a live document is queried
/// on every export. [`GraphicSource::snapshot`] reads it once, so markup and
/// dimensions always describe the same version of the file. An unreadable
/// file counts as a missing graphic.
#[derive(Clone, Debug)]
pub struct SvgFileSource {
    path: PathBuf,
}

impl SvgFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(document) => Some(document),
            Err(error) => {
                tracing::warn!(path = %self.path.display(), %error, "cannot read graphic document");
                None
            }
        }
    }
}

impl GraphicSource for SvgFileSource {
    fn graphic_markup(&self) -> Option<String> {
        let document = self.read()?;
        find_graphic(&document).map(|graphic| graphic.serialize())
    }

    fn dimensions(&self) -> RawDimensions {
        self.read()
            .and_then(|document| find_graphic(&document).map(|graphic| graphic.dimensions()))
            .unwrap_or_default()
    }

    fn snapshot(&self) -> Option<GraphicSnapshot> {
        let document = self.read()?;
        let graphic = find_graphic(&document)?;
        Some(GraphicSnapshot { markup: graphic.serialize(), dimensions: graphic.dimensions() })
    }
}
