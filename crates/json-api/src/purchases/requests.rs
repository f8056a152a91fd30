//! Purchase request bodies and their validation rules.

use std::sync::LazyLock;

use regex::Regex;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidateEmail, ValidationError};

use lapak_app::domain::purchases::{
    data::{NewPayment, NewPurchase, NewPurchaseItem},
    models::{ContactType, Sender},
};

#[expect(
    clippy::expect_used,
    reason = "the pattern is a literal and is covered by tests"
)]
static PHONE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+\d{1,15}$").expect("phone number pattern compiles"));

/// How the buyer can be reached about the purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ContactTypeRequest {
    Email,
    Phone,
}

impl From<ContactTypeRequest> for ContactType {
    fn from(contact_type: ContactTypeRequest) -> Self {
        match contact_type {
            ContactTypeRequest::Email => ContactType::Email,
            ContactTypeRequest::Phone => ContactType::Phone,
        }
    }
}

/// A single cart line
#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PurchasedItemRequest {
    /// Catalog product id
    pub product_id: String,

    /// Units requested, at least 1
    #[validate(range(min = 1))]
    pub qty: u32,
}

/// Create Purchase Request
#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_sender_contact"))]
pub(crate) struct CreatePurchaseRequest {
    #[validate(length(min = 1), nested)]
    pub purchased_items: Vec<PurchasedItemRequest>,

    #[validate(length(min = 4, max = 55))]
    pub sender_name: String,

    pub sender_contact_type: ContactTypeRequest,

    /// Email address or `+`-prefixed phone number, matching `senderContactType`
    pub sender_contact_detail: String,
}

fn validate_sender_contact(request: &CreatePurchaseRequest) -> Result<(), ValidationError> {
    let detail = request.sender_contact_detail.as_str();

    let valid = match request.sender_contact_type {
        ContactTypeRequest::Email => detail.validate_email(),
        ContactTypeRequest::Phone => PHONE_NUMBER.is_match(detail),
    };

    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("sender_contact_detail")
            .with_message("contact detail does not match the contact type".into()))
    }
}

impl From<CreatePurchaseRequest> for NewPurchase {
    fn from(request: CreatePurchaseRequest) -> Self {
        NewPurchase {
            items: request
                .purchased_items
                .into_iter()
                .map(|item| NewPurchaseItem {
                    product_id: item.product_id,
                    qty: item.qty,
                })
                .collect(),
            sender: Sender {
                name: request.sender_name,
                contact_type: request.sender_contact_type.into(),
                contact_detail: request.sender_contact_detail,
            },
        }
    }
}

/// Create Payment Request
#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreatePaymentRequest {
    /// One proof-of-transfer file id per seller owed
    #[validate(length(min = 1))]
    pub file_ids: Vec<String>,
}

impl From<CreatePaymentRequest> for NewPayment {
    fn from(request: CreatePaymentRequest) -> Self {
        NewPayment {
            file_ids: request.file_ids,
        }
    }
}
