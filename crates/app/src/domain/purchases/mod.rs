//! Purchases

pub mod data;
pub mod errors;
pub mod ledger;
pub mod models;
mod obligations;
mod repositories;
pub mod service;

pub use errors::{ErrorKind, PurchasesServiceError};
pub use ledger::*;
pub use service::*;
