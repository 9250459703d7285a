//! Label text state.

#[cfg(test)]
#[path = "label_test.rs"]
mod label_test;

use serde::{Deserialize, Serialize};

use super::store::Store;

pub const DEFAULT_LABEL_TEXT: &str = "human";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSettings {
    pub text: String,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self { text: DEFAULT_LABEL_TEXT.to_owned() }
    }
}

/// Observable label state.
pub type LabelState = Store<LabelSettings>;

impl Store<LabelSettings> {
    pub fn text(&self) -> &str {
        &self.get().text
    }

    /// Replace the label text and notify subscribers.
    pub fn set_text(&mut self, new_text: impl Into<String>) {
        let new_text = new_text.into();
        self.update(|settings| settings.text = new_text);
    }
}
