//! Purchase Data

use crate::domain::{products::models::ProductId, purchases::models::Sender};

/// One requested cart entry, as received from the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPurchaseItem {
    pub product_id: String,
    pub qty: u32,
}

/// Checkout request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPurchase {
    pub items: Vec<NewPurchaseItem>,
    pub sender: Sender,
}

/// Proof-of-payment submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPayment {
    pub file_ids: Vec<String>,
}

/// Purchase header as written to the ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPurchaseRecord {
    pub total_price: u64,
    pub total_transfer: u32,
    pub sender: Sender,
}

/// Line item as written to the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewPurchaseLineItem {
    pub product_id: ProductId,
    pub qty: u64,
}
