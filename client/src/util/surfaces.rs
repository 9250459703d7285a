//! `web-sys` implementations of the export surfaces.
//!
//! ARCHITECTURE
//! ============
//! - [`DocumentSource`] queries `#svg` on every call and serializes it with
//!   `XMLSerializer`.
//! - [`CanvasRasterizer`] loads the markup into an `<img>` through a blob
//!   URL, awaits `load`/`error` as a promise, draws it at the origin of an
//!   offscreen canvas and awaits `toBlob`.
//! - [`AnchorDownload`] clicks a temporary `<a download>`.
//! - [`TimerSleeper`] bounds rasterization with a `gloo-timers` future.
//!
//! Object URLs are revoked once the image has loaded or the download has
//! been handed to the browser.

use std::time::Duration;

use async_trait::async_trait;
use duotone::export::markup::GRAPHIC_ELEMENT_ID;
use duotone::export::surface::{DownloadSink, GraphicSnapshot, GraphicSource, Rasterizer, Sleeper};
use duotone::export::{ExportError, GraphicExporter, RawDimensions, SVG_MIME_TYPE};
use gloo_timers::callback::Timeout;
use js_sys::{Array, Promise, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Blob, BlobPropertyBag, CanvasRenderingContext2d, Document, Element, HtmlAnchorElement, HtmlCanvasElement,
    HtmlImageElement, Url, XmlSerializer,
};

pub type BrowserExporter = GraphicExporter<DocumentSource, CanvasRasterizer, AnchorDownload, TimerSleeper>;

/// Exporter over the current document.
pub fn browser_exporter() -> BrowserExporter {
    GraphicExporter::new(DocumentSource, CanvasRasterizer, AnchorDownload, TimerSleeper)
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

fn blob_from_parts(parts: &Array, mime_type: &str) -> Result<Blob, JsValue> {
    let options = BlobPropertyBag::new();
    options.set_type(mime_type);
    Blob::new_with_u8_array_sequence_and_options(parts, &options)
}

/// Revoke an object URL once the current task has finished with it.
fn revoke_later(url: String) {
    Timeout::new(0, move || {
        let _ = Url::revoke_object_url(&url);
    })
    .forget();
}

// =============================================================================
// SOURCE
// =============================================================================

/// The `#svg` element of the active document.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentSource;

impl DocumentSource {
    fn element() -> Option<Element> {
        document()?.query_selector(&format!("#{GRAPHIC_ELEMENT_ID}")).ok().flatten()
    }

    fn serialize(element: &Element) -> Option<String> {
        let serializer = XmlSerializer::new().ok()?;
        serializer.serialize_to_string(element).ok()
    }

    fn declared_size(element: &Element) -> RawDimensions {
        RawDimensions { width: element.get_attribute("width"), height: element.get_attribute("height") }
    }
}

impl GraphicSource for DocumentSource {
    fn graphic_markup(&self) -> Option<String> {
        Self::serialize(&Self::element()?)
    }

    fn dimensions(&self) -> RawDimensions {
        Self::element().map(|element| Self::declared_size(&element)).unwrap_or_default()
    }

    fn snapshot(&self) -> Option<GraphicSnapshot> {
        let element = Self::element()?;
        Some(GraphicSnapshot { markup: Self::serialize(&element)?, dimensions: Self::declared_size(&element) })
    }
}

// =============================================================================
// RASTERIZER
// =============================================================================

#[derive(Clone, Copy, Debug, Default)]
pub struct CanvasRasterizer;

impl CanvasRasterizer {
    async fn load_image(markup: &str) -> Result<HtmlImageElement, ExportError> {
        let raster_err = |e: JsValue| ExportError::Rasterize(describe(&e));

        let parts = Array::of1(&JsValue::from_str(markup));
        let options = BlobPropertyBag::new();
        options.set_type(SVG_MIME_TYPE);
        let blob = Blob::new_with_str_sequence_and_options(&parts, &options).map_err(raster_err)?;
        let url = Url::create_object_url_with_blob(&blob).map_err(raster_err)?;

        let image = HtmlImageElement::new().map_err(raster_err)?;
        let loaded = Promise::new(&mut |resolve, reject| {
            image.set_onload(Some(&resolve));
            image.set_onerror(Some(&reject));
        });
        image.set_src(&url);

        let outcome = JsFuture::from(loaded).await;
        image.set_onload(None);
        image.set_onerror(None);
        revoke_later(url);
        outcome.map_err(|_| ExportError::Rasterize("image failed to load".to_owned()))?;
        Ok(image)
    }

    fn canvas(width: u32, height: u32) -> Result<HtmlCanvasElement, ExportError> {
        let document = document().ok_or_else(|| ExportError::Rasterize("no document".to_owned()))?;
        let canvas = document
            .create_element("canvas")
            .map_err(|e| ExportError::Rasterize(describe(&e)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| ExportError::Rasterize("created element is not a canvas".to_owned()))?;
        canvas.set_width(width);
        canvas.set_height(height);
        Ok(canvas)
    }

    async fn encode_png(canvas: &HtmlCanvasElement) -> Result<Vec<u8>, ExportError> {
        let mut requested = Ok(());
        let encoded = Promise::new(&mut |resolve, _reject| {
            requested = canvas.to_blob(&resolve);
        });
        requested.map_err(|e| ExportError::Encode(describe(&e)))?;

        let blob = JsFuture::from(encoded)
            .await
            .map_err(|e| ExportError::Encode(describe(&e)))?
            .dyn_into::<Blob>()
            .map_err(|_| ExportError::Encode("canvas produced no image".to_owned()))?;
        let buffer = JsFuture::from(blob.array_buffer())
            .await
            .map_err(|e| ExportError::Encode(describe(&e)))?;
        Ok(Uint8Array::new(&buffer).to_vec())
    }
}

#[async_trait(?Send)]
impl Rasterizer for CanvasRasterizer {
    async fn rasterize(&self, markup: &str, width: u32, height: u32) -> Result<Vec<u8>, ExportError> {
        let image = Self::load_image(markup).await?;
        let canvas = Self::canvas(width, height)?;
        let context = canvas
            .get_context("2d")
            .map_err(|e| ExportError::Rasterize(describe(&e)))?
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or_else(|| ExportError::Rasterize("2d context unavailable".to_owned()))?;
        context
            .draw_image_with_html_image_element(&image, 0.0, 0.0)
            .map_err(|e| ExportError::Rasterize(describe(&e)))?;
        Self::encode_png(&canvas).await
    }
}

// =============================================================================
// DOWNLOAD
// =============================================================================

#[derive(Clone, Copy, Debug, Default)]
pub struct AnchorDownload;

impl DownloadSink for AnchorDownload {
    fn deliver(&self, file_name: &str, mime_type: &str, bytes: &[u8]) -> Result<(), ExportError> {
        let delivery_err = |e: JsValue| ExportError::Delivery(describe(&e));

        let parts = Array::of1(&Uint8Array::from(bytes));
        let blob = blob_from_parts(&parts, mime_type).map_err(delivery_err)?;
        let url = Url::create_object_url_with_blob(&blob).map_err(delivery_err)?;

        let document = document().ok_or_else(|| ExportError::Delivery("no document".to_owned()))?;
        let anchor = document
            .create_element("a")
            .map_err(delivery_err)?
            .dyn_into::<HtmlAnchorElement>()
            .map_err(|_| ExportError::Delivery("created element is not an anchor".to_owned()))?;
        anchor.set_href(&url);
        anchor.set_download(file_name);
        anchor.click();
        revoke_later(url);
        Ok(())
    }
}

// =============================================================================
// TIMER
// =============================================================================

#[derive(Clone, Copy, Debug, Default)]
pub struct TimerSleeper;

#[async_trait(?Send)]
impl Sleeper for TimerSleeper {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}
