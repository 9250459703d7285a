//! Filesystem download sink.

#[cfg(test)]
#[path = "sink_test.rs"]
mod sink_test;

use std::fs;
use std::path::{Path, PathBuf};

use crate::export::ExportError;
use crate::export::surface::DownloadSink;

/// Writes delivered files into a directory, creating it on first use.
/// Existing files with the same name are replaced.
#[derive(Clone, Debug)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadSink for DirectorySink {
    fn deliver(&self, file_name: &str, mime_type: &str, bytes: &[u8]) -> Result<(), ExportError> {
        if file_name.is_empty() || file_name.contains(['/', '\\']) {
            return Err(ExportError::Delivery(format!("invalid file name {file_name:?}")));
        }
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(file_name);
        fs::write(&path, bytes)?;
        tracing::debug!(path = %path.display(), mime_type, "wrote export");
        Ok(())
    }
}
