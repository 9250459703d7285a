//! # duotone
//!
//! Host-independent core of the duotone label tool: shared color and label
//! state, plus export of the displayed vector graphic to SVG or PNG.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`state`] | Observable stores for the color picker and label text |
//! | [`export`] | File-safe titles, SVG packaging, PNG rasterization pipeline |
//! | [`native`] | Filesystem/`resvg` host surfaces (feature `native`) |
//!
//! Browser hosts implement the [`export::surface`] traits themselves; see the
//! `client` crate.

pub mod export;
#[cfg(feature = "native")]
pub mod native;
pub mod state;
