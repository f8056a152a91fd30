//! Purchase Handlers

pub(crate) mod create;
pub(crate) mod pay;
