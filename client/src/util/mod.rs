//! Browser glue helpers.

pub mod export;
#[cfg(feature = "csr")]
pub mod surfaces;
