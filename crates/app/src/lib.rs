//! Purchase and payment reconciliation core for the Lapak marketplace.

pub mod context;
pub mod database;
pub mod domain;
pub mod ids;

#[cfg(test)]
mod test;
