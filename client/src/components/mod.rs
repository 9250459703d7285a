//! UI components for the label editor.

pub mod color_controls;
pub mod export_bar;
pub mod label_input;
pub mod preview;
