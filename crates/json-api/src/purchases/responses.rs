//! Purchase response bodies.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use lapak_app::domain::{
    products::models::ProductSummary,
    purchases::models::{PaymentDetail, PurchaseReceipt},
};

/// A purchased catalog product as it was priced at checkout
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PurchasedProductResponse {
    pub product_id: String,
    pub name: String,
    pub category: String,

    /// Units in stock when the purchase was created
    pub qty: u64,

    /// Unit price in the smallest currency unit
    pub price: u64,
    pub sku: String,
    pub file_id: String,
    pub file_uri: String,
    pub file_thumbnail_uri: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ProductSummary> for PurchasedProductResponse {
    fn from(product: ProductSummary) -> Self {
        PurchasedProductResponse {
            product_id: product.id.to_string(),
            name: product.name,
            category: product.category,
            qty: product.qty,
            price: product.price,
            sku: product.sku,
            file_id: product.file_id.to_string(),
            file_uri: product.file_uri,
            file_thumbnail_uri: product.file_thumbnail_uri,
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}

/// What the buyer must transfer to one seller
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PaymentDetailResponse {
    pub seller_id: String,
    pub bank_account_name: String,
    pub bank_account_holder: String,
    pub bank_account_number: String,
    pub total_price: u64,
}

impl From<PaymentDetail> for PaymentDetailResponse {
    fn from(detail: PaymentDetail) -> Self {
        PaymentDetailResponse {
            seller_id: detail.seller_id.to_string(),
            bank_account_name: detail.bank_account_name,
            bank_account_holder: detail.bank_account_holder,
            bank_account_number: detail.bank_account_number,
            total_price: detail.total_price,
        }
    }
}

/// Purchase Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PurchaseCreatedResponse {
    pub purchase_id: String,
    pub purchased_items: Vec<PurchasedProductResponse>,
    pub total_price: u64,

    /// One entry per seller, ordered by seller id
    pub payment_details: Vec<PaymentDetailResponse>,
}

impl From<PurchaseReceipt> for PurchaseCreatedResponse {
    fn from(receipt: PurchaseReceipt) -> Self {
        PurchaseCreatedResponse {
            purchase_id: receipt.purchase_id.to_string(),
            purchased_items: receipt
                .purchased_items
                .into_iter()
                .map(Into::into)
                .collect(),
            total_price: receipt.total_price,
            payment_details: receipt
                .payment_details
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}

/// Payment Received Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PaymentReceivedResponse {
    pub status: String,
    pub message: String,
}

impl PaymentReceivedResponse {
    pub(crate) fn created() -> Self {
        Self {
            status: "Created".to_string(),
            message: "Successfully received payment".to_string(),
        }
    }
}
