//! Export entry points used by the export bar.
//!
//! Client-side (csr): runs the `duotone` exporter over the live document.
//! Elsewhere (native tests): no graphic is available, so every export
//! reports `None`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use duotone::export::{ExportReceipt, make_title_file_safe};

/// Stem used when the label sanitizes to nothing.
pub const FALLBACK_TITLE: &str = "untitled";

/// File-safe export title derived from the label text.
pub fn export_title(label_text: &str) -> String {
    let title = make_title_file_safe(label_text);
    if title.is_empty() { FALLBACK_TITLE.to_owned() } else { title }
}

/// Download the displayed graphic as `<title>.svg`.
pub fn export_svg(title: &str) -> Option<ExportReceipt> {
    #[cfg(feature = "csr")]
    {
        super::surfaces::browser_exporter().export_svg(title)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = title;
        None
    }
}

/// Download the displayed graphic as `title.png`.
pub async fn export_png() -> Option<ExportReceipt> {
    #[cfg(feature = "csr")]
    {
        super::surfaces::browser_exporter().export_png().await
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}
