//! Raster size resolution from declared `width`/`height` attributes.

#[cfg(test)]
#[path = "dimensions_test.rs"]
mod dimensions_test;

pub const DEFAULT_WIDTH: u32 = 2000;
pub const DEFAULT_HEIGHT: u32 = 1000;

/// Attribute values exactly as declared on the graphic element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawDimensions {
    pub width: Option<String>,
    pub height: Option<String>,
}

impl RawDimensions {
    pub fn new(width: Option<&str>, height: Option<&str>) -> Self {
        Self { width: width.map(str::to_owned), height: height.map(str::to_owned) }
    }
}

/// Canvas size used for rasterization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self { width: DEFAULT_WIDTH, height: DEFAULT_HEIGHT }
    }
}

impl Dimensions {
    /// Resolve declared attributes, falling back per axis to 2000 x 1000.
    pub fn resolve(raw: &RawDimensions) -> Self {
        Self {
            width: parse_dimension(raw.width.as_deref(), DEFAULT_WIDTH),
            height: parse_dimension(raw.height.as_deref(), DEFAULT_HEIGHT),
        }
    }
}

/// Parse the leading integer of an attribute value (`"400px"` -> 400).
///
/// Leading whitespace and a `+` sign are skipped. Anything without leading
/// digits, negative values, and values beyond `u32` use `fallback`.
pub fn parse_dimension(raw: Option<&str>, fallback: u32) -> u32 {
    let Some(raw) = raw else {
        return fallback;
    };
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_len = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return fallback;
    }
    unsigned[..digits_len].parse().unwrap_or(fallback)
}
