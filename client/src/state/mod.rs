//! Shared client-side state handles.
//!
//! DESIGN
//! ======
//! Each concern is one `RwSignal` over the settings struct from `duotone`,
//! provided once by [`crate::app::App`] and fetched with `use_color()` /
//! `use_label()`. Leptos marks dependent scopes stale as soon as a setter
//! returns.

pub mod color;
pub mod label;
