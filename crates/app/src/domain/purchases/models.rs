//! Purchase Models

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    domain::products::models::{ProductId, ProductSummary, SellerId},
    ids::TypedId,
};

/// Purchase Id
pub type PurchaseId = TypedId<Purchase>;

/// Purchase Line Item Id
pub type LineItemId = TypedId<PurchaseLineItem>;

/// How the buyer can be reached about a purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactType {
    Email,
    Phone,
}

impl ContactType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }
}

impl fmt::Display for ContactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown contact type `{0}`")]
pub struct UnknownContactType(String);

impl FromStr for ContactType {
    type Err = UnknownContactType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            other => Err(UnknownContactType(other.to_string())),
        }
    }
}

/// Buyer details recorded against a purchase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sender {
    pub name: String,
    pub contact_type: ContactType,
    pub contact_detail: String,
}

/// Purchase Model
#[derive(Debug, Clone, PartialEq)]
pub struct Purchase {
    pub id: PurchaseId,
    pub total_price: u64,
    /// Number of distinct sellers, which is the number of payment proofs owed.
    pub total_transfer: u32,
    pub sender: Sender,
    pub paid_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl Purchase {
    #[must_use]
    pub fn is_paid(&self) -> bool {
        self.paid_at.is_some()
    }
}

/// Purchase Line Item Model
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseLineItem {
    pub id: LineItemId,
    pub purchase_id: PurchaseId,
    pub product_id: ProductId,
    pub qty: u64,
    pub created_at: Timestamp,
}

/// Amount owed to one seller within a purchase, and where to send it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentDetail {
    pub seller_id: SellerId,
    pub bank_account_name: String,
    pub bank_account_holder: String,
    pub bank_account_number: String,
    pub total_price: u64,
}

/// Result of a successful checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseReceipt {
    pub purchase_id: PurchaseId,
    pub purchased_items: Vec<ProductSummary>,
    pub total_price: u64,
    pub payment_details: Vec<PaymentDetail>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_type_round_trips_through_its_column_value() {
        for contact_type in [ContactType::Email, ContactType::Phone] {
            assert_eq!(contact_type.as_str().parse(), Ok(contact_type));
        }
    }

    #[test]
    fn contact_type_rejects_unknown_values() {
        assert!("fax".parse::<ContactType>().is_err());
        assert!("Email".parse::<ContactType>().is_err());
    }
}
