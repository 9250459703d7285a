//! Color picker state: the top and bottom gradient stops.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use serde::{Deserialize, Serialize};

use super::store::Store;

pub const DEFAULT_TOP_COLOR: &str = "#ff00f7";
pub const DEFAULT_BOTTOM_COLOR: &str = "#FF6600";

/// The two gradient colors. Values are CSS color strings and are stored
/// exactly as given; no validation is applied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSettings {
    #[serde(rename = "topColor")]
    pub top: String,
    #[serde(rename = "bottomColor")]
    pub bottom: String,
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self { top: DEFAULT_TOP_COLOR.to_owned(), bottom: DEFAULT_BOTTOM_COLOR.to_owned() }
    }
}

/// Observable color picker state.
pub type ColorState = Store<ColorSettings>;

impl Store<ColorSettings> {
    pub fn top_color(&self) -> &str {
        &self.get().top
    }

    pub fn bottom_color(&self) -> &str {
        &self.get().bottom
    }

    /// Replace the top color and notify subscribers.
    pub fn set_top_color(&mut self, color: impl Into<String>) {
        let color = color.into();
        self.update(|settings| settings.top = color);
    }

    /// Replace the bottom color and notify subscribers.
    pub fn set_bottom_color(&mut self, color: impl Into<String>) {
        let color = color.into();
        self.update(|settings| settings.bottom = color);
    }
}
