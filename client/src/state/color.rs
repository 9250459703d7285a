//! Color picker state handle.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use duotone::state::ColorSettings;
use leptos::prelude::*;

/// Copyable handle to the gradient colors.
#[derive(Clone, Copy, Debug)]
pub struct ColorHandle {
    settings: RwSignal<ColorSettings>,
}

impl ColorHandle {
    pub fn new(settings: RwSignal<ColorSettings>) -> Self {
        Self { settings }
    }

    /// Create the default colors and provide them to descendants.
    pub fn provide() -> Self {
        let handle = Self::new(RwSignal::new(ColorSettings::default()));
        provide_context(handle);
        handle
    }

    pub fn settings(&self) -> RwSignal<ColorSettings> {
        self.settings
    }

    pub fn top_color(&self) -> String {
        self.settings.with(|s| s.top.clone())
    }

    pub fn bottom_color(&self) -> String {
        self.settings.with(|s| s.bottom.clone())
    }

    pub fn set_top_color(&self, color: impl Into<String>) {
        let color = color.into();
        self.settings.update(|s| s.top = color);
    }

    pub fn set_bottom_color(&self, color: impl Into<String>) {
        let color = color.into();
        self.settings.update(|s| s.bottom = color);
    }
}

/// Fetch the color handle provided by the app root.
pub fn use_color() -> ColorHandle {
    expect_context::<ColorHandle>()
}
