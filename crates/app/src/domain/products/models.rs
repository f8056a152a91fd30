//! Product Models

use jiff::Timestamp;

use crate::ids::TypedId;

/// Product Id
pub type ProductId = TypedId<ProductSummary>;

/// Seller marker
#[derive(Debug)]
pub struct Seller;

/// Seller Id
pub type SellerId = TypedId<Seller>;

/// Uploaded file marker
#[derive(Debug)]
pub struct File;

/// File Id
pub type FileId = TypedId<File>;

/// Product as shown back to the buyer
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSummary {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub qty: u64,
    pub price: u64,
    pub sku: String,
    pub file_id: FileId,
    pub file_uri: String,
    pub file_thumbnail_uri: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Where a seller wants to be paid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SellerPayout {
    pub seller_id: SellerId,
    pub bank_account_name: String,
    pub bank_account_holder: String,
    pub bank_account_number: String,
}

/// Product joined with its owning seller's payout details
#[derive(Debug, Clone, PartialEq)]
pub struct ProductWithSeller {
    pub product: ProductSummary,
    pub seller: SellerPayout,
}
