use super::*;

const SQUARE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="8" height="8"><rect width="8" height="8"/></svg>"#;

// =============================================================
// Canvas limits
// =============================================================

#[test]
fn accepts_canvases_within_limits() {
    assert!(check_canvas_size(2000, 1000).is_ok());
    assert!(check_canvas_size(MAX_CANVAS_SIDE, 1).is_ok());
    assert!(check_canvas_size(16_384, 16_384).is_ok());
}

#[test]
fn rejects_oversized_side() {
    let err = check_canvas_size(MAX_CANVAS_SIDE + 1, 10).unwrap_err();
    assert!(matches!(err, ExportError::Rasterize(_)));
    assert!(check_canvas_size(10, 100_000).is_err());
}

#[test]
fn rejects_oversized_area() {
    assert!(check_canvas_size(20_000, 20_000).is_err());
    assert!(check_canvas_size(u32::MAX, u32::MAX).is_err());
}

// =============================================================
// rasterize
// =============================================================

#[tokio::test]
async fn huge_declared_size_fails_before_allocating() {
    let rasterizer = ResvgRasterizer::without_fonts();
    let err = rasterizer.rasterize(SQUARE, 100_000, 100_000).await.unwrap_err();
    assert!(err.to_string().contains("100000x100000"));
}

#[tokio::test]
async fn renders_png_on_blocking_pool() {
    let rasterizer = ResvgRasterizer::without_fonts();
    let bytes = rasterizer.rasterize(SQUARE, 16, 12).await.unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[tokio::test]
async fn zero_size_canvas_is_a_rasterize_error() {
    let rasterizer = ResvgRasterizer::without_fonts();
    let err = rasterizer.rasterize(SQUARE, 0, 10).await.unwrap_err();
    assert!(matches!(err, ExportError::Rasterize(_)));
}

#[tokio::test]
async fn malformed_markup_is_a_rasterize_error() {
    let rasterizer = ResvgRasterizer::without_fonts();
    let err = rasterizer.rasterize("<svg", 10, 10).await.unwrap_err();
    assert!(matches!(err, ExportError::Rasterize(_)));
}
