//! Products
//!
//! Read-only catalog lookup plus the in-place stock decrement applied when a
//! purchase is paid.

pub mod models;
pub(crate) mod repository;
