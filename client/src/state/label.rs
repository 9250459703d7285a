//! Label text state handle.

#[cfg(test)]
#[path = "label_test.rs"]
mod label_test;

use duotone::state::LabelSettings;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug)]
pub struct LabelHandle {
    settings: RwSignal<LabelSettings>,
}

impl LabelHandle {
    pub fn new(settings: RwSignal<LabelSettings>) -> Self {
        Self { settings }
    }

    /// Create the default label and provide it to descendants.
    pub fn provide() -> Self {
        let handle = Self::new(RwSignal::new(LabelSettings::default()));
        provide_context(handle);
        handle
    }

    pub fn text(&self) -> String {
        self.settings.with(|s| s.text.clone())
    }

    pub fn set_text(&self, new_text: impl Into<String>) {
        let new_text = new_text.into();
        self.settings.update(|s| s.text = new_text);
    }
}

pub fn use_label() -> LabelHandle {
    expect_context::<LabelHandle>()
}
