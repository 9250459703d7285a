//! Shared UI state for the label tool.
//!
//! DESIGN
//! ======
//! Each concern owns one settings struct (`ColorSettings`, `LabelSettings`)
//! held in a [`Store`], so consumers receive the state they need explicitly
//! instead of looking up named global slots.

pub mod color;
pub mod label;
pub mod store;

pub use color::{ColorSettings, ColorState};
pub use label::{LabelSettings, LabelState};
pub use store::{Store, SubscriptionId};
